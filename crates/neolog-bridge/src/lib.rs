//! Configuration bridge for the NeoLog watchface.
//!
//! This crate is the phone-side half of the watchface: it reacts to the
//! three lifecycle events its host runtime delivers and otherwise holds no
//! state.
//!
//! - **ready** — announce that the companion is running
//! - **showConfiguration** — open the configuration web page matching the
//!   paired watch's platform and the phone's locale
//! - **webviewclosed** — decode the page's result and relay the chosen
//!   settings to the watch as an app message
//!
//! The host runtime is injected through the [`HostRuntime`] trait, so the
//! handlers can be exercised without a phone; [`MockHost`] ships for
//! exactly that.
//!
//! # Quick Start
//!
//! ```
//! use neolog_bridge::{ConfigBridge, EventOutcome, HostEvent, MockHost};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = ConfigBridge::new(MockHost::new());
//!
//! bridge.handle_event(HostEvent::Ready).await?;
//!
//! let outcome = bridge.handle_event(HostEvent::ShowConfiguration).await?;
//! if let EventOutcome::ConfigPageOpened { url } = outcome {
//!     assert!(url.ends_with("index_aplite.html"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod error;
pub mod events;
pub mod host;
pub mod mock;
pub mod url;

pub use bridge::ConfigBridge;
pub use error::{Error, Result};
pub use events::{EventOutcome, HostEvent};
pub use host::HostRuntime;
pub use mock::MockHost;
pub use url::{config_page_url, CONFIG_BASE_URL, PAGE_APLITE, PAGE_DEFAULT};

// Re-export the shared types crate for downstream convenience.
pub use neolog_types as types;
pub use neolog_types::{ConfigPayload, HexColor, Platform, SettingsMessage, WatchInfo};
