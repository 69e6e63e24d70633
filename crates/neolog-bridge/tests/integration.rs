//! Integration tests for neolog-bridge.
//!
//! These drive the full event flow the host runtime would deliver over a
//! [`MockHost`], covering every observable property of the bridge.

use neolog_bridge::{
    ConfigBridge, Error, EventOutcome, HostEvent, MockHost, Platform, WatchInfo,
};

fn bridge() -> ConfigBridge<MockHost> {
    ConfigBridge::new(MockHost::new())
}

// --- Configuration page selection ---

#[tokio::test]
async fn aplite_watch_gets_the_reduced_page() {
    let bridge = bridge();
    bridge
        .host()
        .set_watch_info(Some(WatchInfo::new(Platform::Aplite, "en_US")));

    let outcome = bridge
        .handle_event(HostEvent::ShowConfiguration)
        .await
        .unwrap();

    let EventOutcome::ConfigPageOpened { url } = outcome else {
        panic!("expected the configuration page to open, got {outcome:?}");
    };
    assert_eq!(
        url,
        "http://pebble.ralph-schuster.eu/neolog/2.0/config/index_aplite.html"
    );
    assert_eq!(bridge.host().opened_urls(), vec![url]);
}

#[tokio::test]
async fn color_watches_get_the_full_page() {
    for platform in [Platform::Basalt, Platform::Chalk, Platform::Emery] {
        let bridge = bridge();
        bridge
            .host()
            .set_watch_info(Some(WatchInfo::new(platform, "en_US")));

        let url = bridge.on_show_configuration().unwrap();
        assert!(
            url.ends_with("/config/index.html"),
            "platform {platform} should get index.html, got {url}"
        );
    }
}

#[tokio::test]
async fn german_phone_locale_selects_the_translated_page() {
    let bridge = bridge();
    bridge
        .host()
        .set_watch_info(Some(WatchInfo::new(Platform::Basalt, "en_US")));
    bridge.host().set_locale("de_DE");

    let url = bridge.on_show_configuration().unwrap();
    assert_eq!(
        url,
        "http://pebble.ralph-schuster.eu/neolog/2.0/config/de/index.html"
    );
}

#[tokio::test]
async fn non_german_locales_get_the_untranslated_page() {
    for locale in ["en_US", "fr_FR", "de_AT", "es_ES"] {
        let bridge = bridge();
        bridge.host().set_locale(locale);

        let url = bridge.on_show_configuration().unwrap();
        assert!(
            !url.contains("/de/"),
            "locale {locale} must not select the translation, got {url}"
        );
    }
}

#[tokio::test]
async fn missing_capability_falls_back_to_default_descriptor() {
    let bridge = bridge();
    bridge.host().set_watch_info(None);

    let url = bridge.on_show_configuration().unwrap();

    // Default descriptor is aplite/en_US: reduced page, no locale segment.
    assert_eq!(
        url,
        "http://pebble.ralph-schuster.eu/neolog/2.0/config/index_aplite.html"
    );
}

// --- Relaying returned configuration ---

#[tokio::test]
async fn full_payload_is_forwarded_as_integers() {
    let bridge = bridge();
    let response = "%7B%22backgroundColor%22%3A%22FF0000%22%2C%22foregroundColor%22%3A%2200FF00%22%2C%22displayStatusBar%22%3Atrue%7D";

    let outcome = bridge
        .handle_event(HostEvent::WebviewClosed {
            response: response.to_string(),
        })
        .await
        .unwrap();

    let EventOutcome::Forwarded { message } = outcome else {
        panic!("expected the settings to be forwarded, got {outcome:?}");
    };
    assert_eq!(message.background_color, 16711680);
    assert_eq!(message.foreground_color, Some(65280));
    assert_eq!(message.display_status_bar, Some(true));

    assert_eq!(bridge.host().sent_messages(), vec![message]);
    assert_eq!(bridge.host().send_count(), 1);
}

#[tokio::test]
async fn payload_without_background_color_is_skipped() {
    for response in ["%7B%7D", "%7B%22displayStatusBar%22%3Atrue%7D"] {
        let bridge = bridge();

        let outcome = bridge
            .handle_event(HostEvent::WebviewClosed {
                response: response.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, EventOutcome::Skipped);
        assert!(bridge.host().sent_messages().is_empty());
        assert_eq!(bridge.host().send_count(), 0);
    }
}

#[tokio::test]
async fn malformed_response_propagates_a_payload_error() {
    let bridge = bridge();

    let err = bridge
        .handle_event(HostEvent::WebviewClosed {
            response: "CANCELLED".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Payload(_)));
    assert_eq!(bridge.host().send_count(), 0);
}

#[tokio::test]
async fn send_failure_is_observable_only_through_the_host() {
    let bridge = bridge();
    bridge.host().set_fail_send(true);
    bridge.host().set_fail_reason("watch out of range");

    let outcome = bridge
        .handle_event(HostEvent::WebviewClosed {
            response: r#"{"backgroundColor":"123456"}"#.to_string(),
        })
        .await
        .unwrap();

    // The handler reports what it dispatched; the failure is log-only.
    let EventOutcome::Forwarded { message } = outcome else {
        panic!("expected a forwarded outcome, got {outcome:?}");
    };
    assert_eq!(message.background_color, 0x123456);
    assert_eq!(bridge.host().send_count(), 1);
    assert!(bridge.host().sent_messages().is_empty());
}

// --- Full lifecycle ---

#[tokio::test]
async fn full_session_ready_configure_relay() {
    let bridge = bridge();
    bridge
        .host()
        .set_watch_info(Some(WatchInfo::new(Platform::Chalk, "en_GB")));
    bridge.host().set_locale("de_DE");

    assert_eq!(
        bridge.handle_event(HostEvent::Ready).await.unwrap(),
        EventOutcome::Ready
    );

    let opened = bridge
        .handle_event(HostEvent::ShowConfiguration)
        .await
        .unwrap();
    assert_eq!(
        opened,
        EventOutcome::ConfigPageOpened {
            url: "http://pebble.ralph-schuster.eu/neolog/2.0/config/de/index.html".to_string()
        }
    );

    let relayed = bridge
        .handle_event(HostEvent::WebviewClosed {
            response: "%7B%22backgroundColor%22%3A%22000000%22%2C%22foregroundColor%22%3A%22FFFFFF%22%2C%22displayStatusBar%22%3Afalse%7D"
                .to_string(),
        })
        .await
        .unwrap();

    let EventOutcome::Forwarded { message } = relayed else {
        panic!("expected the settings to be forwarded, got {relayed:?}");
    };
    assert_eq!(message.background_color, 0x000000);
    assert_eq!(message.foreground_color, Some(0xFFFFFF));
    assert_eq!(message.display_status_bar, Some(false));
    assert_eq!(bridge.host().opened_urls().len(), 1);
    assert_eq!(bridge.host().sent_messages().len(), 1);
}
