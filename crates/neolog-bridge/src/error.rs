//! Error types for neolog-bridge.
//!
//! Each handler invocation is isolated: no error here is fatal to the host
//! process. Payload errors propagate out of the handler that hit them;
//! send failures are only ever logged.

use thiserror::Error;

use neolog_types::ParseError;

/// Errors that can occur while bridging host events to the watch.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The configuration page returned a payload that could not be decoded.
    #[error("configuration payload rejected: {0}")]
    Payload(#[from] ParseError),

    /// The host refused to open the configuration page.
    #[error("failed to open {url}: {reason}")]
    OpenUrl {
        /// The URL that was being opened.
        url: String,
        /// The host's reason for refusing.
        reason: String,
    },

    /// The host reported that an app message could not be delivered.
    #[error("app message send failed: {reason}")]
    SendFailed {
        /// The host's reason for the failure.
        reason: String,
    },
}

impl Error {
    /// Create an open-URL failure.
    pub fn open_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OpenUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a send failure.
    pub fn send_failed(reason: impl Into<String>) -> Self {
        Self::SendFailed {
            reason: reason.into(),
        }
    }
}

/// Result type alias using neolog-bridge's Error type.
pub type Result<T> = std::result::Result<T, Error>;
