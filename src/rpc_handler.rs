//! RPC method handler for the remindmarks JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested against any
//! [`RemoteStoreTrait`]. Each method maps to one UI event on the controller.

use serde_json::{json, Value};

use crate::managers::bookmark_controller::BookmarkController;
use crate::services::notification::QueuedNotifier;
use crate::services::remote_store::RemoteStoreTrait;
use crate::types::bookmark::{Bookmark, BookmarkDraft, Tab};

/// Controller flavour driven over RPC: notifications are queued so the server
/// can return them with each response.
pub type RpcController<S> = BookmarkController<S, QueuedNotifier>;

fn bookmark_json<S: RemoteStoreTrait>(controller: &RpcController<S>, b: &Bookmark) -> Value {
    let date = b.remember_date.format("%Y-%m-%d").to_string();
    json!({
        "title": b.title,
        "url": b.url,
        "remember_date": date,
        "display_date": b.display_date(),
        "host": b.host(),
        "due_today": controller.is_due_today(&date),
    })
}

/// The selected tab and the bookmarks it shows.
pub fn view_json<S: RemoteStoreTrait>(controller: &RpcController<S>) -> Value {
    let items: Vec<Value> = controller
        .visible_bookmarks()
        .into_iter()
        .map(|b| bookmark_json(controller, b))
        .collect();
    json!({
        "tab": controller.selected_tab(),
        "items": items,
    })
}

/// Controller state without the list itself.
pub fn state_json<S: RemoteStoreTrait>(controller: &RpcController<S>) -> Value {
    json!({
        "tab": controller.selected_tab(),
        "phase": controller.phase(),
        "is_loading": controller.is_loading(),
        "count": controller.bookmarks().len(),
        "draft": controller.form_draft(),
    })
}

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

/// Dispatch a JSON-RPC method call to the controller.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Notifications raised along the way stay queued on the controller.
pub async fn handle_method<S: RemoteStoreTrait>(
    controller: &mut RpcController<S>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmarks.load" => {
            controller.load_all().await.map_err(|e| e.to_string())?;
            Ok(view_json(controller))
        }
        "bookmarks.view" => Ok(view_json(controller)),
        "bookmarks.submit" => {
            let has_fields = ["title", "url", "remember_date"]
                .iter()
                .any(|f| params.get(*f).is_some());
            let result = if has_fields {
                let draft = BookmarkDraft::new(
                    str_param(params, "title").unwrap_or_default(),
                    str_param(params, "url").unwrap_or_default(),
                    str_param(params, "remember_date").unwrap_or_default(),
                );
                controller.submit_draft(draft).await
            } else {
                controller.submit_form().await
            };
            result.map_err(|e| e.to_string())?;
            Ok(view_json(controller))
        }
        "bookmarks.delete" => {
            let title = str_param(params, "title").ok_or("missing title")?;
            controller
                .delete_by_title(title)
                .await
                .map_err(|e| e.to_string())?;
            Ok(view_json(controller))
        }

        // ─── Tabs ───
        "tab.select" => {
            let tab: Tab = str_param(params, "tab").ok_or("missing tab")?.parse()?;
            controller.select_tab(tab);
            Ok(view_json(controller))
        }

        // ─── Draft ───
        "draft.get" => Ok(json!(controller.form_draft())),
        "draft.set" => {
            let field = str_param(params, "field").ok_or("missing field")?;
            let value = str_param(params, "value").ok_or("missing value")?;
            if !controller.update_draft(field, value) {
                return Err(format!("unknown draft field: {}", field));
            }
            Ok(json!(controller.form_draft()))
        }
        "draft.clear" => {
            controller.clear_draft();
            Ok(json!(controller.form_draft()))
        }

        "state.get" => Ok(state_json(controller)),

        _ => Err(format!("unknown method: {}", method)),
    }
}
