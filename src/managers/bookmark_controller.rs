//! Bookmark client controller.
//!
//! Owns the in-memory replica of the remote bookmark collection together with
//! the selected tab and the form draft. Every mutation goes to the remote
//! store first and is followed by a full reload; the local list is never
//! patched in place.
//!
//! Loads are tagged with a sequence number. Only the response to the most
//! recently issued load may replace the list, so a slow response to an older
//! request cannot overwrite fresher data.

use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::managers::bookmark_view::{filtered_bookmarks, is_due_on, sort_by_remember_date};
use crate::services::clock::{ClockTrait, LocalClock};
use crate::services::notification::NotificationSinkTrait;
use crate::services::remote_store::RemoteStoreTrait;
use crate::types::bookmark::{parse_remember_date, Bookmark, BookmarkDraft, Tab};
use crate::types::errors::ClientError;

pub const MSG_LOAD_FAILED: &str = "Failed to load bookmarks.";
pub const MSG_INVALID_URL: &str = "Invalid URL!";
pub const MSG_SAVE_FAILED: &str = "Failed to save bookmark.";
pub const MSG_SAVE_UNREACHABLE: &str = "Could not reach the bookmark service.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete bookmark.";
pub const MSG_DELETE_NETWORK: &str = "Network error while deleting bookmark.";

/// Where the controller is in its load/submit/delete cycle.
///
/// No phase is terminal: every operation can be retried from any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
    Submitting,
    SubmitFailed,
    Deleting,
    DeleteFailed,
}

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What [`BookmarkController::finish_load`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced; holds the new record count.
    Applied(usize),
    /// The load failed and the previous list was kept.
    Failed(ClientError),
    /// A newer load was issued since; the response was dropped.
    Stale,
}

/// Checks a draft and converts it into the record to create.
pub fn validate_draft(draft: &BookmarkDraft) -> Result<Bookmark, ClientError> {
    for (name, value) in [
        ("title", &draft.title),
        ("url", &draft.url),
        ("remember_date", &draft.remember_date),
    ] {
        if value.trim().is_empty() {
            return Err(ClientError::MissingField(name.to_string()));
        }
    }

    if !is_absolute_url(&draft.url) {
        return Err(ClientError::InvalidUrl(draft.url.clone()));
    }

    let remember_date = parse_remember_date(&draft.remember_date)
        .ok_or_else(|| ClientError::InvalidDate(draft.remember_date.clone()))?;

    Ok(Bookmark {
        title: draft.title.clone(),
        url: draft.url.clone(),
        remember_date,
    })
}

/// True when `s` parses as a URL with both a scheme and a host.
pub fn is_absolute_url(s: &str) -> bool {
    Url::parse(s).map(|u| u.has_host()).unwrap_or(false)
}

/// State container for the bookmark list view.
pub struct BookmarkController<S, N> {
    store: S,
    notifier: N,
    clock: Box<dyn ClockTrait>,
    bookmarks: Vec<Bookmark>,
    selected_tab: Tab,
    form_draft: BookmarkDraft,
    is_loading: bool,
    phase: Phase,
    load_seq: u64,
}

impl<S: RemoteStoreTrait, N: NotificationSinkTrait> BookmarkController<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            clock: Box::new(LocalClock),
            bookmarks: Vec::new(),
            selected_tab: Tab::All,
            form_draft: BookmarkDraft::default(),
            is_loading: false,
            phase: Phase::Idle,
            load_seq: 0,
        }
    }

    /// Replaces the clock used for "due today" checks.
    pub fn with_clock(mut self, clock: impl ClockTrait + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn form_draft(&self) -> &BookmarkDraft {
        &self.form_draft
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // ─── Loading ───

    /// Marks a new load as in flight and returns its ticket. Any ticket issued
    /// earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.is_loading = true;
        self.phase = Phase::Loading;
        LoadTicket { seq: self.load_seq }
    }

    /// Applies the response for `ticket`.
    ///
    /// Stale responses change nothing, not even the loading flag, since the
    /// newer load is still pending.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Bookmark>, ClientError>,
    ) -> LoadOutcome {
        if ticket.seq != self.load_seq {
            debug!(
                seq = ticket.seq,
                latest = self.load_seq,
                "discarding stale bookmark load"
            );
            return LoadOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(mut fetched) => {
                sort_by_remember_date(&mut fetched);
                let count = fetched.len();
                self.bookmarks = fetched;
                self.phase = Phase::Loaded;
                info!(count, "bookmarks loaded");
                LoadOutcome::Applied(count)
            }
            Err(e) => {
                warn!(error = %e, "bookmark load failed");
                self.notifier.error(MSG_LOAD_FAILED);
                self.phase = Phase::LoadFailed;
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Fetches the whole collection and replaces the local list with it.
    ///
    /// On failure the previous list is kept and a load error is reported.
    pub async fn load_all(&mut self) -> Result<usize, ClientError> {
        let ticket = self.begin_load();
        let result = self.store.fetch_all().await;
        match self.finish_load(ticket, result) {
            LoadOutcome::Applied(count) => Ok(count),
            LoadOutcome::Failed(e) => Err(e),
            // Unreachable while `&mut self` is held across the fetch.
            LoadOutcome::Stale => Ok(self.bookmarks.len()),
        }
    }

    // ─── Draft ───

    /// Sets one draft field by form name. Returns `false` for unknown fields.
    pub fn update_draft(&mut self, field: &str, value: &str) -> bool {
        self.form_draft.set_field(field, value)
    }

    pub fn clear_draft(&mut self) {
        self.form_draft.clear();
    }

    /// Submits the current form draft.
    pub async fn submit_form(&mut self) -> Result<(), ClientError> {
        let draft = self.form_draft.clone();
        self.submit_draft(draft).await
    }

    /// Validates `draft`, creates it remotely and reloads.
    ///
    /// `draft` becomes the form draft. It is cleared only after the store
    /// accepted the record; on any failure it stays for correction.
    pub async fn submit_draft(&mut self, draft: BookmarkDraft) -> Result<(), ClientError> {
        self.form_draft = draft;

        let bookmark = match validate_draft(&self.form_draft) {
            Ok(b) => b,
            Err(e) => {
                debug!(error = %e, "draft rejected before submit");
                let message = match &e {
                    ClientError::InvalidUrl(_) => MSG_INVALID_URL.to_string(),
                    other => other.to_string(),
                };
                self.notifier.error(&message);
                return Err(e);
            }
        };

        self.phase = Phase::Submitting;
        if let Err(e) = self.store.create(&bookmark).await {
            warn!(title = %bookmark.title, error = %e, "bookmark create failed");
            let message = match e {
                ClientError::Transport(_) => MSG_SAVE_UNREACHABLE,
                _ => MSG_SAVE_FAILED,
            };
            self.notifier.error(message);
            self.phase = Phase::SubmitFailed;
            return Err(e);
        }

        info!(title = %bookmark.title, "bookmark created");
        // A failed reload is already reported; the create itself succeeded.
        let _ = self.load_all().await;
        self.form_draft.clear();
        self.notifier
            .success(&format!("{} saved successfully!", bookmark.title));
        Ok(())
    }

    // ─── Delete ───

    /// Deletes by title and reloads. Records sharing the title are matched
    /// however the remote store decides.
    pub async fn delete_by_title(&mut self, title: &str) -> Result<(), ClientError> {
        if title.is_empty() {
            let e = ClientError::MissingField("title".to_string());
            self.notifier.error(&e.to_string());
            return Err(e);
        }

        self.phase = Phase::Deleting;
        if let Err(e) = self.store.delete(title).await {
            warn!(title, error = %e, "bookmark delete failed");
            let message = match e {
                ClientError::Transport(_) => MSG_DELETE_NETWORK,
                _ => MSG_DELETE_FAILED,
            };
            self.notifier.error(message);
            self.phase = Phase::DeleteFailed;
            return Err(e);
        }

        info!(title, "bookmark deleted");
        let _ = self.load_all().await;
        Ok(())
    }

    // ─── View ───

    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
    }

    /// Whether `date_str` (`YYYY-MM-DD`) is today's local date.
    pub fn is_due_today(&self, date_str: &str) -> bool {
        is_due_on(date_str, self.clock.today())
    }

    /// The list as the selected tab shows it.
    pub fn visible_bookmarks(&self) -> Vec<&Bookmark> {
        filtered_bookmarks(self.selected_tab, &self.bookmarks, self.clock.today())
    }
}
