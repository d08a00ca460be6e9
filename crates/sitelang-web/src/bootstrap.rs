//! Page bootstrap inputs: the inline configuration block and the click
//! targets the entry point listens on.
//!
//! # Design
//! - A missing or malformed configuration never blocks the page; defaults apply
//!   and the rejection is reported once logging is up.
//! - Click targets translate the clicked element into an [`InputEvent`]; the
//!   wasm entry point only attaches listeners.

use sitelang_core::localizer::TRIGGER;
use sitelang_core::{ConfigError, Element, InputEvent, SiteConfig};

/// `id` of the `<script type="application/json">` block carrying [`SiteConfig`].
pub const CONFIG_SCRIPT_ID: &str = "sitelang-config";

/// Hotspot fill while a touch is held.
pub const HOTSPOT_PRESSED_FILL: &str = "rgba(255, 255, 255, 0.05)";
/// Hotspot fill once a touch ends.
pub const HOTSPOT_RELEASED_FILL: &str = "transparent";
/// Delay before a released hotspot loses its fill, in milliseconds.
pub const HOTSPOT_RELEASE_DELAY_MS: u32 = 100;

/// Configuration read from the page.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Effective configuration.
    pub config: SiteConfig,
    /// Why the page-supplied block was ignored, if it was.
    pub rejected: Option<ConfigError>,
}

/// Parse the inline configuration block; absent or blank text means defaults.
#[must_use]
pub fn load_config(raw: Option<&str>) -> LoadedConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return LoadedConfig {
            config: SiteConfig::default(),
            rejected: None,
        };
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => LoadedConfig {
            config,
            rejected: None,
        },
        Err(err) => LoadedConfig {
            config: SiteConfig::default(),
            rejected: Some(err),
        },
    }
}

/// Elements the page reacts to when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Language toggle.
    Trigger,
    /// Visual identity wheel segments and circles.
    Hotspot,
    /// Popup close button.
    CloseButton,
    /// Popup backdrop.
    Overlay,
    /// Mobile navigation opener.
    NavOpen,
    /// Mobile navigation closer.
    NavClose,
    /// In-page anchors.
    Anchor,
}

impl ClickTarget {
    /// Every target, in wiring order.
    pub const ALL: [Self; 7] = [
        Self::Trigger,
        Self::Hotspot,
        Self::CloseButton,
        Self::Overlay,
        Self::NavOpen,
        Self::NavClose,
        Self::Anchor,
    ];

    /// Selector matching the target's elements.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Trigger => TRIGGER,
            Self::Hotspot => ".wheel-section, .center-circle, .bottom-circle",
            Self::CloseButton => ".btn--closePopup",
            Self::Overlay => ".popup__overlay",
            Self::NavOpen => ".js-navOpen",
            Self::NavClose => ".js-navClose",
            Self::Anchor => ".js-anchor",
        }
    }

    /// Event raised by a click on `element`.
    pub fn event<E: Element>(self, element: &E) -> Option<InputEvent> {
        let event = match self {
            Self::Trigger => InputEvent::TriggerClicked,
            Self::Hotspot => InputEvent::HotspotClicked {
                section: element.attribute("data-section")?,
            },
            Self::CloseButton => InputEvent::CloseClicked,
            Self::Overlay => InputEvent::OverlayClicked,
            Self::NavOpen => InputEvent::NavOpenClicked,
            Self::NavClose => InputEvent::NavCloseClicked,
            Self::Anchor => InputEvent::AnchorClicked {
                hash: anchor_hash(element.attribute("href").as_deref().unwrap_or_default()),
            },
        };
        Some(event)
    }

    /// Whether the browser's default action must be suppressed for `event`.
    #[must_use]
    pub fn prevents_default(self, event: &InputEvent) -> bool {
        matches!(
            (self, event),
            (Self::Anchor, InputEvent::AnchorClicked { hash }) if hash.len() > 1
        )
    }
}

/// Fragment of an anchor `href` including the `#`, or empty when there is none.
#[must_use]
pub fn anchor_hash(href: &str) -> String {
    href.find('#')
        .map(|start| &href[start..])
        .filter(|hash| hash.len() > 1)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use sitelang_core::LocaleCode;
    use sitelang_test_support::FakeElement;
    use sitelang_test_support::fixtures::page;

    use super::*;

    #[test]
    fn blank_or_missing_config_uses_defaults() {
        for raw in [None, Some(""), Some("  \n ")] {
            let loaded = load_config(raw);
            assert_eq!(loaded.config, SiteConfig::default());
            assert!(loaded.rejected.is_none());
        }
    }

    #[test]
    fn page_config_overrides_defaults() {
        let loaded = load_config(Some(r#"{ "default_locale": "en", "preload_delay_ms": 0 }"#));
        assert!(loaded.rejected.is_none());
        assert_eq!(loaded.config.default_locale, LocaleCode::En);
        assert_eq!(loaded.config.preload_delay_ms, 0);
    }

    #[test]
    fn malformed_config_is_reported_and_ignored() {
        let loaded = load_config(Some(r#"{ "dictionary_base": 7 }"#));
        assert!(loaded.rejected.is_some());
        assert_eq!(loaded.config, SiteConfig::default());
    }

    #[test]
    fn anchor_hash_takes_fragment() {
        assert_eq!(anchor_hash("#news"), "#news");
        assert_eq!(anchor_hash("index.html#about"), "#about");
        assert_eq!(anchor_hash("#"), "");
        assert_eq!(anchor_hash("https://example.org/"), "");
    }

    #[test]
    fn fixture_page_has_every_click_target() {
        let root = page();
        for target in ClickTarget::ALL {
            assert!(
                !root.select_all(target.selector()).is_empty(),
                "no element for {target:?}"
            );
        }
    }

    #[test]
    fn clicks_translate_to_input_events() {
        let hotspot = FakeElement::new("div.wheel-section").attr("data-section", "3");
        assert_eq!(
            ClickTarget::Hotspot.event(&hotspot),
            Some(InputEvent::HotspotClicked {
                section: "3".into()
            })
        );
        let bare = FakeElement::new("div.bottom-circle");
        assert_eq!(ClickTarget::Hotspot.event(&bare), None);

        let anchor = FakeElement::new("a.js-anchor").attr("href", "#event");
        let event = ClickTarget::Anchor.event(&anchor);
        assert_eq!(
            event,
            Some(InputEvent::AnchorClicked {
                hash: "#event".into()
            })
        );
        assert!(event.is_some_and(|event| ClickTarget::Anchor.prevents_default(&event)));

        let external = FakeElement::new("a.js-anchor").attr("href", "/press");
        let event = ClickTarget::Anchor.event(&external);
        assert!(event.is_some_and(|event| !ClickTarget::Anchor.prevents_default(&event)));

        assert_eq!(
            ClickTarget::Trigger.event(&FakeElement::new("button")),
            Some(InputEvent::TriggerClicked)
        );
    }
}
