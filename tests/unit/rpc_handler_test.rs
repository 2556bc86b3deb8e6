//! Unit tests for the RPC handler — every JSON-RPC method dispatched by
//! `handle_method`, run against an in-memory store.

#[path = "../common/mod.rs"]
mod common;

use serde_json::json;

use common::{bookmark, date, MemoryStore};
use remindmarks::managers::bookmark_controller::{BookmarkController, MSG_INVALID_URL};
use remindmarks::rpc_handler::{handle_method, RpcController};
use remindmarks::services::clock::FixedClock;
use remindmarks::services::notification::{NotificationLevel, QueuedNotifier};

fn setup() -> RpcController<MemoryStore> {
    let store = MemoryStore::with_records(vec![
        bookmark("Later", "2024-04-01"),
        bookmark("Now", "2024-03-15"),
    ]);
    BookmarkController::new(store, QueuedNotifier::new()).with_clock(FixedClock(date(2024, 3, 15)))
}

// ─── Ping / unknown ───

#[tokio::test]
async fn test_ping() {
    let mut c = setup();
    let res = handle_method(&mut c, "ping", &json!({})).await.unwrap();
    assert_eq!(res, json!({"pong": true}));
}

#[tokio::test]
async fn test_unknown_method_returns_error() {
    let mut c = setup();
    let res = handle_method(&mut c, "nonexistent.method", &json!({})).await;
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Bookmarks ───

#[tokio::test]
async fn test_load_returns_sorted_view() {
    let mut c = setup();
    let res = handle_method(&mut c, "bookmarks.load", &json!({}))
        .await
        .unwrap();

    assert_eq!(res["tab"], "all");
    let items = res["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Now");
    assert_eq!(items[0]["remember_date"], "2024-03-15");
    assert_eq!(items[0]["display_date"], "15/03/2024");
    assert_eq!(items[0]["due_today"], true);
    assert_eq!(items[0]["host"], "now.example.com");
    assert_eq!(items[1]["due_today"], false);
}

#[tokio::test]
async fn test_view_does_not_fetch() {
    let mut c = setup();
    let res = handle_method(&mut c, "bookmarks.view", &json!({}))
        .await
        .unwrap();
    assert_eq!(res["items"].as_array().unwrap().len(), 0);
    assert_eq!(c.store().fetch_calls(), 0);
}

#[tokio::test]
async fn test_submit_with_params() {
    let mut c = setup();
    let res = handle_method(
        &mut c,
        "bookmarks.submit",
        &json!({"title": "Serde", "url": "https://serde.rs", "remember_date": "2024-03-20"}),
    )
    .await
    .unwrap();

    let titles: Vec<&str> = res["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Now", "Serde", "Later"]);

    let notes = c.notifier().drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Success);
    assert_eq!(notes[0].message, "Serde saved successfully!");
}

#[tokio::test]
async fn test_submit_invalid_url_is_error_with_notification() {
    let mut c = setup();
    let res = handle_method(
        &mut c,
        "bookmarks.submit",
        &json!({"title": "Bad", "url": "nope", "remember_date": "2024-03-20"}),
    )
    .await;

    assert!(res.unwrap_err().starts_with("Invalid URL"));
    assert_eq!(c.notifier().errors(), vec![MSG_INVALID_URL]);
    assert_eq!(c.store().network_calls(), 0);
    assert_eq!(c.form_draft().title, "Bad");
}

#[tokio::test]
async fn test_submit_without_params_uses_draft() {
    let mut c = setup();
    for (field, value) in [
        ("title", "Draft"),
        ("url", "https://draft.dev"),
        ("remember_date", "2024-03-15"),
    ] {
        handle_method(&mut c, "draft.set", &json!({"field": field, "value": value}))
            .await
            .unwrap();
    }

    handle_method(&mut c, "bookmarks.submit", &json!({}))
        .await
        .unwrap();

    assert!(c.store().records().iter().any(|b| b.title == "Draft"));
    let draft = handle_method(&mut c, "draft.get", &json!({})).await.unwrap();
    assert_eq!(draft, json!({"title": "", "url": "", "remember_date": ""}));
}

#[tokio::test]
async fn test_delete_requires_title() {
    let mut c = setup();
    let res = handle_method(&mut c, "bookmarks.delete", &json!({})).await;
    assert_eq!(res.unwrap_err(), "missing title");
}

#[tokio::test]
async fn test_delete_and_reload() {
    let mut c = setup();
    let res = handle_method(&mut c, "bookmarks.delete", &json!({"title": "Now"}))
        .await
        .unwrap();
    let items = res["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Later");
}

// ─── Tabs ───

#[tokio::test]
async fn test_tab_select_filters_view() {
    let mut c = setup();
    handle_method(&mut c, "bookmarks.load", &json!({}))
        .await
        .unwrap();

    let res = handle_method(&mut c, "tab.select", &json!({"tab": "today"}))
        .await
        .unwrap();

    assert_eq!(res["tab"], "today");
    let items = res["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Now");
}

#[tokio::test]
async fn test_tab_select_rejects_unknown_tab() {
    let mut c = setup();
    let res = handle_method(&mut c, "tab.select", &json!({"tab": "hoje"})).await;
    assert!(res.unwrap_err().contains("unknown tab"));
}

// ─── Draft / state ───

#[tokio::test]
async fn test_draft_set_unknown_field() {
    let mut c = setup();
    let res = handle_method(&mut c, "draft.set", &json!({"field": "folder", "value": "x"})).await;
    assert!(res.unwrap_err().contains("unknown draft field"));
}

#[tokio::test]
async fn test_draft_clear_twice() {
    let mut c = setup();
    handle_method(&mut c, "draft.set", &json!({"field": "title", "value": "T"}))
        .await
        .unwrap();
    let first = handle_method(&mut c, "draft.clear", &json!({})).await.unwrap();
    let second = handle_method(&mut c, "draft.clear", &json!({})).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_state_reports_phase_and_count() {
    let mut c = setup();
    let before = handle_method(&mut c, "state.get", &json!({})).await.unwrap();
    assert_eq!(before["phase"], "idle");
    assert_eq!(before["count"], 0);

    handle_method(&mut c, "bookmarks.load", &json!({}))
        .await
        .unwrap();
    let after = handle_method(&mut c, "state.get", &json!({})).await.unwrap();
    assert_eq!(after["phase"], "loaded");
    assert_eq!(after["is_loading"], false);
    assert_eq!(after["count"], 2);
}
