//! Error types for configuration payload decoding.

use thiserror::Error;

/// Errors produced while decoding a configuration payload.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The response string was not valid percent-encoded UTF-8.
    #[error("invalid percent-encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded response was not the expected JSON document.
    #[error("invalid JSON payload: {0}")]
    Json(String),

    /// A color field did not contain a parseable hex value.
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),
}

/// Result type alias using [`ParseError`].
pub type ParseResult<T> = std::result::Result<T, ParseError>;
