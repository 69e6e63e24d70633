//! The configuration bridge.
//!
//! Routes the three lifecycle events from the host runtime to their
//! handlers. The bridge holds no state of its own beyond the injected
//! host; every handler invocation is isolated.

use tracing::{debug, info, warn};

use neolog_types::{ConfigPayload, SettingsMessage, WatchInfo};

use crate::error::Result;
use crate::events::{EventOutcome, HostEvent};
use crate::host::HostRuntime;
use crate::url::config_page_url;

/// Routes host lifecycle events to their handlers.
///
/// # Example
///
/// ```
/// use neolog_bridge::{ConfigBridge, HostEvent, MockHost};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bridge = ConfigBridge::new(MockHost::new());
/// bridge.handle_event(HostEvent::Ready).await?;
/// let outcome = bridge.handle_event(HostEvent::ShowConfiguration).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigBridge<H: HostRuntime> {
    host: H,
}

impl<H: HostRuntime> ConfigBridge<H> {
    /// Create a bridge around an injected host runtime.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Access the underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Dispatch a host event to its handler.
    pub async fn handle_event(&self, event: HostEvent) -> Result<EventOutcome> {
        match event {
            HostEvent::Ready => {
                self.on_ready();
                Ok(EventOutcome::Ready)
            }
            HostEvent::ShowConfiguration => {
                let url = self.on_show_configuration()?;
                Ok(EventOutcome::ConfigPageOpened { url })
            }
            HostEvent::WebviewClosed { response } => {
                match self.on_webview_closed(&response).await? {
                    Some(message) => Ok(EventOutcome::Forwarded { message }),
                    None => Ok(EventOutcome::Skipped),
                }
            }
        }
    }

    /// Announce that the companion is loaded and running.
    pub fn on_ready(&self) {
        info!("Companion ready and running");
    }

    /// Open the configuration page appropriate for the paired watch.
    ///
    /// Falls back to the default descriptor when the host cannot report
    /// one. Returns the URL that was opened.
    pub fn on_show_configuration(&self) -> Result<String> {
        let watch = self.host.watch_info().unwrap_or_else(|| {
            debug!("Host has no watch info capability, using default descriptor");
            WatchInfo::default()
        });

        let url = config_page_url(&watch, &self.host.locale());
        info!("Opening configuration page: {}", url);
        self.host.open_url(&url)?;

        Ok(url)
    }

    /// Relay the configuration returned by the page to the watch.
    ///
    /// A decode failure propagates as [`crate::Error::Payload`]. A payload
    /// without a background color is an explicit skip: nothing is sent.
    /// A send failure is logged and not propagated; the returned message
    /// describes what was dispatched either way.
    pub async fn on_webview_closed(&self, response: &str) -> Result<Option<SettingsMessage>> {
        let payload = ConfigPayload::from_urlencoded(response)?;
        info!("Configuration page returned: {:?}", payload);

        let Some(message) = SettingsMessage::from_payload(&payload) else {
            return Ok(None);
        };

        match self.host.send_app_message(&message).await {
            Ok(()) => info!("Send successful"),
            Err(err) => warn!("Send failed: {}", err),
        }

        Ok(Some(message))
    }
}
