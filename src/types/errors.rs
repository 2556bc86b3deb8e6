use std::fmt;

// === ClientError ===

/// Errors raised by bookmark controller operations and the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A required draft field was left empty.
    MissingField(String),
    /// The URL is not an absolute URL with a scheme and host.
    InvalidUrl(String),
    /// The remember date is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// The request never produced a response.
    Transport(String),
    /// The remote store answered with a non-2xx status.
    RemoteRejection(u16),
    /// The response body did not have the expected shape.
    MalformedResponse(String),
}

impl ClientError {
    /// True for errors detected locally before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::MissingField(_) | ClientError::InvalidUrl(_) | ClientError::InvalidDate(_)
        )
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MissingField(field) => write!(f, "Missing required field: {}", field),
            ClientError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            ClientError::InvalidDate(date) => write!(f, "Invalid remember date: {}", date),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::RemoteRejection(status) => {
                write!(f, "Remote store rejected the request with status {}", status)
            }
            ClientError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

// === ConfigError ===

/// Errors related to loading and editing client settings.
#[derive(Debug)]
pub enum ConfigError {
    /// No API URL was configured by any source.
    MissingApiUrl,
    /// The configured API URL is not an absolute http(s) URL.
    InvalidApiUrl(String),
    /// The provided settings key is unknown.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
    /// An I/O error occurred while reading or writing settings.
    Io(String),
    /// Failed to serialize or deserialize settings.
    Serialization(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiUrl => write!(f, "No API URL configured"),
            ConfigError::InvalidApiUrl(url) => write!(f, "Invalid API URL: {}", url),
            ConfigError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
            ConfigError::Io(msg) => write!(f, "Settings I/O error: {}", msg),
            ConfigError::Serialization(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
