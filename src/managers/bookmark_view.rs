//! Derived views over the bookmark list.
//!
//! Everything here is a pure function of its inputs; callers recompute on
//! every state change instead of caching results.

use chrono::NaiveDate;

use crate::types::bookmark::{Bookmark, Tab, DATE_FORMAT};

/// Sorts ascending by remember date. Records with equal dates keep the order
/// the store returned them in.
pub fn sort_by_remember_date(bookmarks: &mut [Bookmark]) {
    bookmarks.sort_by(|a, b| a.remember_date.cmp(&b.remember_date));
}

/// `today` formatted as `YYYY-MM-DD`.
pub fn date_key(today: NaiveDate) -> String {
    today.format(DATE_FORMAT).to_string()
}

/// Exact string match of `date_str` against `today` in `YYYY-MM-DD` form.
pub fn is_due_on(date_str: &str, today: NaiveDate) -> bool {
    date_str == date_key(today)
}

/// The bookmarks shown for `tab`, in source order.
pub fn filtered_bookmarks(tab: Tab, bookmarks: &[Bookmark], today: NaiveDate) -> Vec<&Bookmark> {
    match tab {
        Tab::All => bookmarks.iter().collect(),
        Tab::Today => bookmarks
            .iter()
            .filter(|b| b.remember_date == today)
            .collect(),
    }
}
