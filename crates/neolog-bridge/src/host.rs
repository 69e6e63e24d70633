//! Host runtime abstraction.
//!
//! The companion never owns a radio or a browser; it asks the host runtime
//! that embeds it to do both. This module provides the [`HostRuntime`]
//! trait that abstracts over a real phone host and mock hosts for testing.

use async_trait::async_trait;

use neolog_types::{SettingsMessage, WatchInfo};

use crate::error::Result;

/// Trait abstracting the primitives the host runtime exposes.
///
/// Implement this for the environment embedding the companion. The crate
/// ships [`crate::MockHost`] for tests and harnesses.
///
/// # Example
///
/// ```ignore
/// use neolog_bridge::{ConfigBridge, HostRuntime};
///
/// fn build_bridge<H: HostRuntime>(host: H) -> ConfigBridge<H> {
///     ConfigBridge::new(host)
/// }
/// ```
#[async_trait]
pub trait HostRuntime: Send + Sync {
    /// Query the descriptor of the currently paired watch.
    ///
    /// Returns `None` when the host does not expose the lookup capability
    /// (older mobile apps); callers fall back to [`WatchInfo::default()`].
    fn watch_info(&self) -> Option<WatchInfo>;

    /// Ambient locale of the phone environment (e.g. `en_US`).
    ///
    /// Not the watch's configured language; the two can differ.
    fn locale(&self) -> String;

    /// Open a URL in an external browsing context.
    fn open_url(&self, url: &str) -> Result<()>;

    /// Dispatch an app message to the watch.
    ///
    /// Fire-and-forget with exactly two terminal outcomes; there are no
    /// intermediate states, no cancellation, and no timeout beyond what
    /// the host itself enforces.
    async fn send_app_message(&self, message: &SettingsMessage) -> Result<()>;
}
