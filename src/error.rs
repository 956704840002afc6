//! Error types for the home controller client
//!
//! [`ActionError`] is the failure taxonomy of a single backend request.
//! [`HomeError`] wraps it together with the configuration and I/O errors
//! that can happen around a request (startup, logging setup).

use serde::Serialize;
use thiserror::Error;

/// Result type alias for crate-level operations
pub type Result<T> = std::result::Result<T, HomeError>;

/// Failure of one request against the backend
#[derive(Error, Debug)]
pub enum ActionError {
    /// Base URL and path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response could not be read as an HTTP response
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Non-2xx status without a readable error detail
    #[error("Server returned status code: {0}")]
    StatusCode(u16),

    /// Non-2xx status carrying a `{"detail": ...}` body
    #[error("{0}")]
    Server(String),

    /// 2xx body did not match the expected result shape
    #[error("Decoding error: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Connection refused, DNS failure, or a timeout before the body was complete
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Machine-readable classification of an [`ActionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidUrl,
    InvalidResponse,
    StatusCode,
    Server,
    Decoding,
    Transport,
}

impl ErrorKind {
    /// Stable identifier used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidUrl => "invalid_url",
            ErrorKind::InvalidResponse => "invalid_response",
            ErrorKind::StatusCode => "status_code",
            ErrorKind::Server => "server",
            ErrorKind::Decoding => "decoding",
            ErrorKind::Transport => "transport",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ActionError {
    /// Create an invalid URL error
    pub fn invalid_url<S: Into<String>>(endpoint: S) -> Self {
        Self::InvalidUrl(endpoint.into())
    }

    /// Create an invalid response error
    pub fn invalid_response<S: Into<String>>(reason: S) -> Self {
        Self::InvalidResponse(reason.into())
    }

    /// Create a server-reported error
    pub fn server<S: Into<String>>(detail: S) -> Self {
        Self::Server(detail.into())
    }

    /// Map the error to its kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            ActionError::InvalidResponse(_) => ErrorKind::InvalidResponse,
            ActionError::StatusCode(_) => ErrorKind::StatusCode,
            ActionError::Server(_) => ErrorKind::Server,
            ActionError::Decoding(_) => ErrorKind::Decoding,
            ActionError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// HTTP status of the failed response, when the backend answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ActionError::StatusCode(code) => Some(*code),
            _ => None,
        }
    }

    /// Whether no complete response arrived (connection failure or timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self, ActionError::Transport(_))
    }
}

/// Crate-level error
#[derive(Error, Debug)]
pub enum HomeError {
    /// A backend request failed
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HomeError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// The underlying request error, if any
    pub fn as_action(&self) -> Option<&ActionError> {
        match self {
            HomeError::Action(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for HomeError {
    fn from(err: config::ConfigError) -> Self {
        HomeError::Config(err.to_string())
    }
}
