//! remindmarks RPC server — JSON-RPC over stdin/stdout for GUI shells.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmarks.submit", "params":{"title":"...","url":"...","remember_date":"2024-03-15"}}
//! Response: {"id":1, "result":{...}, "notifications":[...]} or {"id":1, "error":"...", "notifications":[...]}
//!
//! Usage: `remindmarks-rpc [API_URL]`. Without an argument the API URL comes
//! from `REMINDMARKS_API_URL` or the settings file.
//!
//! Requests are handled strictly one at a time. Logs go to stderr.

use std::io::Write;

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

use remindmarks::app::App;
use remindmarks::logging::init_logging;
use remindmarks::rpc_handler::{handle_method, view_json};
use remindmarks::services::notification::QueuedNotifier;
use remindmarks::services::settings_engine::SettingsEngine;

fn emit(value: &Value) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", value);
    let _ = stdout.flush();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging(LevelFilter::INFO);

    let api_url_flag = std::env::args().nth(1);
    let app = match App::new(
        SettingsEngine::new(None),
        api_url_flag.as_deref(),
        QueuedNotifier::new(),
    ) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to start RPC server");
            emit(&json!({"event": "error", "error": e.to_string()}));
            std::process::exit(1);
        }
    };
    let mut controller = app.controller;

    // Initial load, like the page mount. Failures are reported, not fatal.
    let _ = controller.load_all().await;
    emit(&json!({
        "event": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "view": view_json(&controller),
        "notifications": controller.notifier().drain(),
    }));

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(l)) => l,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "stdin read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                emit(&json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let result = handle_method(&mut controller, method, &params).await;
        let notifications = controller.notifier().drain();

        let response = match result {
            Ok(val) => json!({"id": id, "result": val, "notifications": notifications}),
            Err(err) => json!({"id": id, "error": err, "notifications": notifications}),
        };
        emit(&response);
    }

    info!("stdin closed, shutting down");
}
