//! Configuration page URL composition.
//!
//! The configuration pages are hosted per watchface release. Page selection
//! depends on two inputs: the watch platform (the black-and-white aplite
//! generation gets a reduced page) and the phone's ambient locale (only a
//! German translation exists).

use neolog_types::{Platform, WatchInfo};

/// Base URL of the hosted configuration pages for this release line.
pub const CONFIG_BASE_URL: &str = "http://pebble.ralph-schuster.eu/neolog/2.0/config/";

/// Page served to color-capable platforms.
pub const PAGE_DEFAULT: &str = "index.html";

/// Page served to the black-and-white aplite generation.
pub const PAGE_APLITE: &str = "index_aplite.html";

/// The one locale that has a translated configuration page.
pub const LOCALE_GERMAN: &str = "de_DE";

/// Select the page file for a watch platform.
#[must_use]
pub fn page_for(platform: Platform) -> &'static str {
    if platform.is_aplite() {
        PAGE_APLITE
    } else {
        PAGE_DEFAULT
    }
}

/// Path segment for a translated page; empty when no translation exists.
#[must_use]
pub fn locale_segment(locale: &str) -> &'static str {
    if locale == LOCALE_GERMAN { "de/" } else { "" }
}

/// Compose the full configuration page URL for a watch and phone locale.
///
/// # Examples
///
/// ```
/// use neolog_bridge::url::config_page_url;
/// use neolog_types::{Platform, WatchInfo};
///
/// let watch = WatchInfo::new(Platform::Basalt, "en_US");
/// assert_eq!(
///     config_page_url(&watch, "de_DE"),
///     "http://pebble.ralph-schuster.eu/neolog/2.0/config/de/index.html"
/// );
/// ```
#[must_use]
pub fn config_page_url(watch: &WatchInfo, locale: &str) -> String {
    format!(
        "{}{}{}",
        CONFIG_BASE_URL,
        locale_segment(locale),
        page_for(watch.platform)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_selection() {
        assert_eq!(page_for(Platform::Aplite), PAGE_APLITE);
        assert_eq!(page_for(Platform::Basalt), PAGE_DEFAULT);
        assert_eq!(page_for(Platform::Chalk), PAGE_DEFAULT);
        assert_eq!(page_for(Platform::Diorite), PAGE_DEFAULT);
        assert_eq!(page_for(Platform::Unknown), PAGE_DEFAULT);
    }

    #[test]
    fn test_locale_segment_only_for_exact_german_locale() {
        assert_eq!(locale_segment("de_DE"), "de/");
        assert_eq!(locale_segment("en_US"), "");
        assert_eq!(locale_segment("fr_FR"), "");
        // Austrian German has no translated page of its own.
        assert_eq!(locale_segment("de_AT"), "");
        assert_eq!(locale_segment(""), "");
    }

    #[test]
    fn test_full_url_for_aplite_german() {
        let watch = WatchInfo::new(Platform::Aplite, "de_DE");
        assert_eq!(
            config_page_url(&watch, "de_DE"),
            "http://pebble.ralph-schuster.eu/neolog/2.0/config/de/index_aplite.html"
        );
    }

    #[test]
    fn test_full_url_for_default_descriptor() {
        let watch = WatchInfo::default();
        assert_eq!(
            config_page_url(&watch, "en_US"),
            "http://pebble.ralph-schuster.eu/neolog/2.0/config/index_aplite.html"
        );
    }

    #[test]
    fn test_watch_language_does_not_select_translation() {
        // Only the phone's ambient locale picks the translated page.
        let watch = WatchInfo::new(Platform::Basalt, "de_DE");
        assert_eq!(
            config_page_url(&watch, "en_US"),
            "http://pebble.ralph-schuster.eu/neolog/2.0/config/index.html"
        );
    }
}
