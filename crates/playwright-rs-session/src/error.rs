// Error types for playwright-rs-session

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for session storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading, writing or replaying stored sessions
#[derive(Debug, Error)]
pub enum Error {
    /// The storage state file could not be read or written
    ///
    /// Most commonly the file does not exist yet because the login setup
    /// has not been run for this user.
    #[error("Storage state I/O failed for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage state file is not valid session JSON
    #[error("Storage state '{}' is not valid session JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error outside of a specific file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The browser rejected a cookie or localStorage operation
    #[error("Browser error: {0}")]
    Browser(#[from] playwright_rs::Error),

    /// A URL could not be parsed or has no host
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Returns true when the underlying cause is a missing storage file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Error::Context(_, inner) => inner.is_not_found(),
            _ => false,
        }
    }
}
