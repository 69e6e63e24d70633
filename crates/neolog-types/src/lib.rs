//! Platform-agnostic types for the NeoLog watchface companion.
//!
//! This crate provides the shared vocabulary between the phone-side
//! companion and the watch application:
//!
//! - Watch descriptors ([`WatchInfo`], [`Platform`])
//! - The configuration payload returned by the hosted configuration page
//!   ([`ConfigPayload`], [`HexColor`])
//! - The outbound app message and its dictionary encoding
//!   ([`SettingsMessage`], [`MessageValue`], [`keys`])
//! - Typed decoding errors ([`ParseError`])
//!
//! # Example
//!
//! ```
//! use neolog_types::{ConfigPayload, SettingsMessage};
//!
//! let response = "%7B%22backgroundColor%22%3A%22FF0000%22%2C%22displayStatusBar%22%3Atrue%7D";
//! let payload = ConfigPayload::from_urlencoded(response).unwrap();
//! let message = SettingsMessage::from_payload(&payload).unwrap();
//! assert_eq!(message.background_color, 16711680);
//! ```

pub mod error;
pub mod keys;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{ConfigPayload, HexColor, MessageValue, Platform, SettingsMessage, WatchInfo};
