//! Notification sinks for surfacing operation results to the user.
//!
//! Sinks are fire-and-forget: the controller never inspects what happens to a
//! message after handing it over.

use std::sync::Mutex;

use serde::Serialize;
use tracing::{info, warn};

/// Receives user-facing success and error messages.
pub trait NotificationSinkTrait {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Severity of a queued notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A single message captured by [`QueuedNotifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Emits notifications as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSinkTrait for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "remindmarks::notify", "{}", message);
    }

    fn error(&self, message: &str) {
        warn!(target: "remindmarks::notify", "{}", message);
    }
}

/// Prints successes to stdout and errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl NotificationSinkTrait for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Buffers notifications until they are drained.
#[derive(Debug, Default)]
pub struct QueuedNotifier {
    queue: Mutex<Vec<Notification>>,
}

impl QueuedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: NotificationLevel, message: &str) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(Notification {
                level,
                message: message.to_string(),
            });
        }
    }

    /// Removes and returns everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }

    /// Copies the queue without clearing it.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .map(|queue| queue.clone())
            .unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NotificationLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NotificationLevel::Success)
    }

    fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .filter(|n| n.level == level)
            .map(|n| n.message)
            .collect()
    }
}

impl NotificationSinkTrait for QueuedNotifier {
    fn success(&self, message: &str) {
        self.push(NotificationLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationLevel::Error, message);
    }
}
