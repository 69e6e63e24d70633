//! Core types for the NeoLog companion.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::keys;

/// Hardware platform of a paired watch.
///
/// Platform names arrive from the host runtime as lowercase strings. Values
/// the crate does not know deserialize to [`Platform::Unknown`] instead of
/// failing, since new watch generations must not break the companion.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new platforms
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    /// Original black-and-white generation.
    Aplite,
    /// First color generation.
    Basalt,
    /// Round color generation.
    Chalk,
    /// Black-and-white successor generation.
    Diorite,
    /// Large color generation.
    Emery,
    /// Platform name this crate does not know.
    #[serde(other)]
    Unknown,
}

impl Platform {
    /// Look up a platform by its host-reported name.
    ///
    /// Matching is case-insensitive. Returns `None` for names this crate
    /// does not know.
    ///
    /// # Examples
    ///
    /// ```
    /// use neolog_types::Platform;
    ///
    /// assert_eq!(Platform::from_name("aplite"), Some(Platform::Aplite));
    /// assert_eq!(Platform::from_name("Basalt"), Some(Platform::Basalt));
    /// assert_eq!(Platform::from_name("hoverboard"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "aplite" => Some(Platform::Aplite),
            "basalt" => Some(Platform::Basalt),
            "chalk" => Some(Platform::Chalk),
            "diorite" => Some(Platform::Diorite),
            "emery" => Some(Platform::Emery),
            _ => None,
        }
    }

    /// The lowercase name the host runtime uses for this platform.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Aplite => "aplite",
            Platform::Basalt => "basalt",
            Platform::Chalk => "chalk",
            Platform::Diorite => "diorite",
            Platform::Emery => "emery",
            Platform::Unknown => "unknown",
        }
    }

    /// Whether this is the original black-and-white generation.
    ///
    /// The hosted configuration pages serve a reduced page to this
    /// generation.
    #[must_use]
    pub fn is_aplite(&self) -> bool {
        matches!(self, Platform::Aplite)
    }

    /// Whether the platform has a color display.
    ///
    /// Unknown platforms are assumed to be color-capable.
    #[must_use]
    pub fn supports_color(&self) -> bool {
        !matches!(self, Platform::Aplite | Platform::Diorite)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptor of the paired watch, as reported by the host runtime.
///
/// Lives for a single event handler invocation and is never persisted.
/// When the host does not expose the lookup capability, callers use
/// [`WatchInfo::default()`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchInfo {
    /// Hardware platform.
    pub platform: Platform,
    /// Marketing model name, when the host reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Language configured on the watch (e.g. `en_US`).
    ///
    /// Distinct from the phone's ambient locale, which is what selects a
    /// translated configuration page.
    pub language: String,
}

impl WatchInfo {
    /// Create a descriptor for a platform and watch language.
    pub fn new(platform: Platform, language: impl Into<String>) -> Self {
        Self {
            platform,
            model: None,
            language: language.into(),
        }
    }
}

impl Default for WatchInfo {
    /// The fallback descriptor used when the host cannot report one.
    fn default() -> Self {
        Self::new(Platform::Aplite, "en_US")
    }
}

/// A 24-bit RGB color carried as a hex string on the wire.
///
/// The configuration page submits colors as bare hex digits
/// (e.g. `"FF0000"`); an optional `0x` or `#` prefix is tolerated.
///
/// # Examples
///
/// ```
/// use neolog_types::HexColor;
///
/// let red: HexColor = "FF0000".parse().unwrap();
/// assert_eq!(red.value(), 16711680);
/// assert_eq!(red.to_string(), "FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub u32);

impl HexColor {
    /// Parse a color from its wire form.
    pub fn parse(input: &str) -> ParseResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .or_else(|| trimmed.strip_prefix('#'))
            .unwrap_or(trimmed);

        if digits.is_empty() || digits.len() > 6 {
            return Err(ParseError::InvalidColor(input.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseError::InvalidColor(input.to_string()))
    }

    /// The color as a 24-bit integer, the form the watch expects.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Configuration choices returned by the hosted configuration page.
///
/// Decoded from the URL-encoded JSON document the page hands back when it
/// closes. Every field is optional; the page decides which settings to
/// submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    /// Watchface background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<HexColor>,
    /// Watchface foreground (bars and status text) color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<HexColor>,
    /// Whether the watchface shows the date/battery status bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_status_bar: Option<bool>,
}

impl ConfigPayload {
    /// Decode a payload from the URL-encoded JSON the page hands back.
    ///
    /// # Examples
    ///
    /// ```
    /// use neolog_types::ConfigPayload;
    ///
    /// let response = "%7B%22backgroundColor%22%3A%22FF0000%22%7D";
    /// let payload = ConfigPayload::from_urlencoded(response).unwrap();
    /// assert_eq!(payload.background_color.unwrap().value(), 0xFF0000);
    /// ```
    pub fn from_urlencoded(response: &str) -> ParseResult<Self> {
        let decoded = urlencoding::decode(response)
            .map_err(|err| ParseError::InvalidEncoding(err.to_string()))?;
        serde_json::from_str(&decoded).map_err(|err| ParseError::Json(err.to_string()))
    }
}

/// Value side of an app message dictionary tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    /// A 32-bit signed integer, the watch's `int32` tuple type.
    Int(i32),
    /// A boolean, carried as the watch's small-integer tuple type.
    Bool(bool),
}

/// Outbound settings message for the watch.
///
/// Built from a [`ConfigPayload`] whose background color is present. The
/// watch reads every dictionary key independently, so optional fields that
/// were not submitted simply produce no tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsMessage {
    /// Background color as a 24-bit integer.
    pub background_color: u32,
    /// Foreground color as a 24-bit integer, when submitted.
    pub foreground_color: Option<u32>,
    /// Status bar toggle, when submitted.
    pub display_status_bar: Option<bool>,
}

impl SettingsMessage {
    /// Build the outbound message for a decoded payload.
    ///
    /// Returns `None` when the payload carries no background color, in
    /// which case nothing is forwarded to the watch.
    #[must_use]
    pub fn from_payload(payload: &ConfigPayload) -> Option<Self> {
        let background = payload.background_color?;
        Some(Self {
            background_color: background.value(),
            foreground_color: payload.foreground_color.map(|color| color.value()),
            display_status_bar: payload.display_status_bar,
        })
    }

    /// Render the message as app message dictionary tuples.
    ///
    /// Absent optional fields produce no tuple.
    #[must_use]
    pub fn to_tuples(&self) -> Vec<(u32, MessageValue)> {
        let mut tuples = vec![(
            keys::CONFIG_BACKGROUND_COLOR,
            MessageValue::Int(self.background_color as i32),
        )];
        if let Some(foreground) = self.foreground_color {
            tuples.push((keys::CONFIG_FOREGROUND_COLOR, MessageValue::Int(foreground as i32)));
        }
        if let Some(display) = self.display_status_bar {
            tuples.push((keys::CONFIG_STATUS_BAR, MessageValue::Bool(display)));
        }
        tuples
    }
}
