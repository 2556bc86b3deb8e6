use serde::{Deserialize, Serialize};

use super::bookmark::Tab;

/// Persisted client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientSettings {
    /// Root URL of the remote store; `/bookmarks` is appended per request.
    pub api_url: Option<String>,
    pub request_timeout_secs: u64,
    pub default_tab: Tab,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout_secs: 10,
            default_tab: Tab::All,
        }
    }
}
