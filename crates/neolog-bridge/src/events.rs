//! Lifecycle events delivered by the host runtime.
//!
//! The host dispatches at most one event at a time; handlers complete
//! before the next event is delivered.

use serde::{Deserialize, Serialize};

use neolog_types::SettingsMessage;

/// Lifecycle events the host runtime delivers to the companion.
///
/// All events are serializable for logging and harness scripting.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new event types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum HostEvent {
    /// The companion sandbox finished loading.
    Ready,
    /// The user asked to open the configuration page.
    ShowConfiguration,
    /// The configuration page closed and handed back its result.
    WebviewClosed {
        /// URL-encoded JSON document produced by the page.
        response: String,
    },
}

impl HostEvent {
    /// The event name used in the host runtime's dispatch table.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::Ready => "ready",
            HostEvent::ShowConfiguration => "showConfiguration",
            HostEvent::WebviewClosed { .. } => "webviewclosed",
        }
    }
}

/// What dispatching a [`HostEvent`] resulted in.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new outcomes
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum EventOutcome {
    /// Readiness was announced.
    Ready,
    /// The configuration page was opened.
    ConfigPageOpened {
        /// The URL that was opened.
        url: String,
    },
    /// Settings were forwarded to the watch.
    Forwarded {
        /// The message that was dispatched.
        message: SettingsMessage,
    },
    /// The returned payload carried no settings to forward.
    Skipped,
}
