//! Remote store access for bookmark records.
//!
//! The store is the source of truth; the client only ever reads the whole
//! collection, creates one record, or deletes by title.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::types::bookmark::Bookmark;
use crate::types::errors::ClientError;

const USER_AGENT_VALUE: &str = concat!("remindmarks/", env!("CARGO_PKG_VERSION"));

/// Operations the controller needs from the bookmark backend.
pub trait RemoteStoreTrait {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Bookmark>, ClientError>> + Send;
    fn create(&self, bookmark: &Bookmark) -> impl Future<Output = Result<(), ClientError>> + Send;
    /// Deletes every record the store matches for `title`.
    fn delete(&self, title: &str) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// REST client for `{base}/bookmarks`.
#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemoteStore {
    /// Creates a client rooted at `base_url`. A trailing slash is ignored.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/bookmarks", self.base_url)
    }

    fn item_url(&self, title: &str) -> String {
        format!("{}/{}", self.collection_url(), encode_component(title))
    }

    fn check_status(response: &reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::RemoteRejection(status.as_u16()))
        }
    }
}

impl RemoteStoreTrait for HttpRemoteStore {
    async fn fetch_all(&self) -> Result<Vec<Bookmark>, ClientError> {
        let url = self.collection_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::check_status(&response)?;

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    async fn create(&self, bookmark: &Bookmark) -> Result<(), ClientError> {
        let url = self.collection_url();
        debug!(title = %bookmark.title, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(bookmark)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::check_status(&response)
    }

    async fn delete(&self, title: &str) -> Result<(), ClientError> {
        let url = self.item_url(title);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::check_status(&response)
    }
}

/// Percent-encodes `s` for use as a single path segment.
///
/// Leaves the same characters untouched as JavaScript's `encodeURIComponent`.
pub fn encode_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0xf) as usize]));
            }
        }
    }
    out
}
