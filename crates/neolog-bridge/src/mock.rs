//! Mock host runtime for testing.
//!
//! This module provides a mock host that can be used for unit testing
//! without a phone runtime. The [`MockHost`] implements the
//! [`HostRuntime`] trait, allowing it to be used interchangeably with a
//! real host in generic code.
//!
//! # Features
//!
//! - **Recording**: every opened URL and dispatched message is kept for
//!   later assertions
//! - **Failure injection**: make `open_url` or `send_app_message` fail
//! - **Latency simulation**: add artificial delay to message dispatch

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use async_trait::async_trait;

use neolog_types::{SettingsMessage, WatchInfo};

use crate::error::{Error, Result};
use crate::host::HostRuntime;

/// A mock host runtime for testing.
///
/// Starts out pretending to be a phone paired with the default watch
/// descriptor, locale `en_US`, with every primitive succeeding.
///
/// # Example
///
/// ```
/// use neolog_bridge::{ConfigBridge, MockHost};
///
/// # #[tokio::main]
/// # async fn main() {
/// let host = MockHost::new();
/// host.set_locale("de_DE");
///
/// let bridge = ConfigBridge::new(host);
/// let url = bridge.on_show_configuration().unwrap();
/// assert!(url.contains("/de/"));
/// # }
/// ```
pub struct MockHost {
    watch_info: RwLock<Option<WatchInfo>>,
    locale: RwLock<String>,
    opened_urls: RwLock<Vec<String>>,
    sent_messages: RwLock<Vec<SettingsMessage>>,
    /// Number of dispatch attempts, failed ones included.
    send_count: AtomicU32,
    fail_open: AtomicBool,
    fail_send: AtomicBool,
    fail_reason: RwLock<String>,
    /// Simulated send latency in milliseconds (0 = no delay).
    send_latency_ms: AtomicU64,
}

impl std::fmt::Debug for MockHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHost")
            .field("watch_info", &*read(&self.watch_info))
            .field("locale", &*read(&self.locale))
            .field("send_count", &self.send_count.load(Ordering::Relaxed))
            .finish()
    }
}

// Lock poisoning only happens when a test thread panicked mid-assertion;
// the recorded state is still the most useful thing to return.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl MockHost {
    /// Create a mock host with default values.
    pub fn new() -> Self {
        Self {
            watch_info: RwLock::new(Some(WatchInfo::default())),
            locale: RwLock::new("en_US".to_string()),
            opened_urls: RwLock::new(Vec::new()),
            sent_messages: RwLock::new(Vec::new()),
            send_count: AtomicU32::new(0),
            fail_open: AtomicBool::new(false),
            fail_send: AtomicBool::new(false),
            fail_reason: RwLock::new("mock failure".to_string()),
            send_latency_ms: AtomicU64::new(0),
        }
    }

    /// Set the watch descriptor the host reports.
    ///
    /// `None` simulates a host without the lookup capability.
    pub fn set_watch_info(&self, watch: Option<WatchInfo>) {
        *write(&self.watch_info) = watch;
    }

    /// Set the ambient phone locale.
    pub fn set_locale(&self, locale: impl Into<String>) {
        *write(&self.locale) = locale.into();
    }

    /// Make `open_url` fail.
    pub fn set_fail_open(&self, fail: bool) {
        self.fail_open.store(fail, Ordering::Relaxed);
    }

    /// Make `send_app_message` fail.
    pub fn set_fail_send(&self, fail: bool) {
        self.fail_send.store(fail, Ordering::Relaxed);
    }

    /// Set the reason reported by injected failures.
    pub fn set_fail_reason(&self, reason: impl Into<String>) {
        *write(&self.fail_reason) = reason.into();
    }

    /// Add artificial delay to message dispatch.
    pub fn set_send_latency(&self, latency: Duration) {
        self.send_latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// URLs opened so far, in order.
    pub fn opened_urls(&self) -> Vec<String> {
        read(&self.opened_urls).clone()
    }

    /// Messages delivered so far, in order. Failed dispatches are not
    /// recorded here; see [`MockHost::send_count`].
    pub fn sent_messages(&self) -> Vec<SettingsMessage> {
        read(&self.sent_messages).clone()
    }

    /// Number of dispatch attempts, failed ones included.
    pub fn send_count(&self) -> u32 {
        self.send_count.load(Ordering::Relaxed)
    }

    fn fail_reason(&self) -> String {
        read(&self.fail_reason).clone()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostRuntime for MockHost {
    fn watch_info(&self) -> Option<WatchInfo> {
        read(&self.watch_info).clone()
    }

    fn locale(&self) -> String {
        read(&self.locale).clone()
    }

    fn open_url(&self, url: &str) -> Result<()> {
        if self.fail_open.load(Ordering::Relaxed) {
            return Err(Error::open_url(url, self.fail_reason()));
        }
        write(&self.opened_urls).push(url.to_string());
        Ok(())
    }

    async fn send_app_message(&self, message: &SettingsMessage) -> Result<()> {
        let latency = self.send_latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        self.send_count.fetch_add(1, Ordering::Relaxed);

        if self.fail_send.load(Ordering::Relaxed) {
            return Err(Error::send_failed(self.fail_reason()));
        }

        write(&self.sent_messages).push(*message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use neolog_types::Platform;

    use super::*;

    #[test]
    fn test_mock_defaults() {
        let host = MockHost::new();
        let watch = host.watch_info().unwrap();
        assert_eq!(watch.platform, Platform::Aplite);
        assert_eq!(host.locale(), "en_US");
        assert_eq!(host.send_count(), 0);
    }

    #[test]
    fn test_capability_can_be_removed() {
        let host = MockHost::new();
        host.set_watch_info(None);
        assert!(host.watch_info().is_none());
    }

    #[tokio::test]
    async fn test_failed_sends_are_counted_but_not_recorded() {
        let host = MockHost::new();
        host.set_fail_send(true);
        host.set_fail_reason("watch disconnected");

        let message = SettingsMessage {
            background_color: 0,
            foreground_color: None,
            display_status_bar: None,
        };

        let err = host.send_app_message(&message).await.unwrap_err();
        assert!(err.to_string().contains("watch disconnected"));
        assert_eq!(host.send_count(), 1);
        assert!(host.sent_messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_latency_is_simulated() {
        let host = MockHost::new();
        host.set_send_latency(Duration::from_millis(250));

        let message = SettingsMessage {
            background_color: 0xFF0000,
            foreground_color: None,
            display_status_bar: None,
        };

        let started = tokio::time::Instant::now();
        host.send_app_message(&message).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
