//! Site configuration with defaults matching the shipped page.
//!
//! # Design
//! - Every field has a default so an absent or partial blob still boots.
//! - Unknown fields are rejected to surface typos early.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::locale::{DEFAULT_LOCALE, LocaleCode};

const DEFAULT_DICTIONARY_BASE: &str = "./assets/js/language";
const DEFAULT_TRANSITION_DELAY_MS: u64 = 150;
const DEFAULT_PRELOAD_DELAY_MS: u64 = 1_000;
const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
const DEFAULT_CAROUSEL_MIN_WIDTH: u32 = 560;
const DEFAULT_ANCHOR_OFFSET: f64 = 50.0;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// Runtime knobs for the localizer and its collaborators.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Locale bound at startup.
    pub default_locale: LocaleCode,
    /// Directory the `{code}.json` dictionaries are served from.
    pub dictionary_base: String,
    /// Pause between a successful fetch and the rebind.
    pub transition_delay_ms: u64,
    /// Delay before warming the cache with the alternate locale.
    pub preload_delay_ms: u64,
    /// Trailing-edge resize debounce window.
    pub resize_debounce_ms: u64,
    /// Viewport width below which carousels are disabled.
    pub carousel_min_width: u32,
    /// Extra gap kept above an anchor target when scrolling.
    pub anchor_offset: f64,
    /// Default tracing filter directive.
    pub log_level: String,
    /// Log output format (`json` or `pretty`); the build profile decides when unset.
    pub log_format: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE,
            dictionary_base: DEFAULT_DICTIONARY_BASE.to_string(),
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
            preload_delay_ms: DEFAULT_PRELOAD_DELAY_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            carousel_min_width: DEFAULT_CAROUSEL_MIN_WIDTH,
            anchor_offset: DEFAULT_ANCHOR_OFFSET,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: None,
        }
    }
}

impl SiteConfig {
    /// Decode and validate a JSON configuration blob.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Decode { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dictionary_base.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "dictionary_base",
                reason: "must not be empty",
            });
        }
        if self.resize_debounce_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "resize_debounce_ms",
                reason: "must be greater than zero",
            });
        }
        if !self.anchor_offset.is_finite() || self.anchor_offset < 0.0 {
            return Err(ConfigError::InvalidField {
                field: "anchor_offset",
                reason: "must be a non-negative number",
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "log_level",
                reason: "must not be empty",
            });
        }
        if let Some(format) = &self.log_format {
            if !LOG_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidField {
                    field: "log_format",
                    reason: "must be `json` or `pretty`",
                });
            }
        }
        Ok(())
    }

    /// URL of the dictionary for `locale`.
    #[must_use]
    pub fn dictionary_url(&self, locale: LocaleCode) -> String {
        format!(
            "{}/{}.json",
            self.dictionary_base.trim_end_matches('/'),
            locale.code()
        )
    }

    /// Transition pause as a [`Duration`].
    #[must_use]
    pub const fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    /// Preload delay as a [`Duration`].
    #[must_use]
    pub const fn preload_delay(&self) -> Duration {
        Duration::from_millis(self.preload_delay_ms)
    }

    /// Resize debounce window as a [`Duration`].
    #[must_use]
    pub const fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_blob_yields_defaults() -> Result<(), ConfigError> {
        let config = SiteConfig::from_json("{}")?;
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.transition_delay(), Duration::from_millis(150));
        assert_eq!(
            config.dictionary_url(LocaleCode::En),
            "./assets/js/language/en.json"
        );
        Ok(())
    }

    #[test]
    fn partial_blob_overrides_named_fields() -> Result<(), ConfigError> {
        let config = SiteConfig::from_json(
            r#"{"default_locale":"en","dictionary_base":"/i18n/","resize_debounce_ms":100}"#,
        )?;
        assert_eq!(config.default_locale, LocaleCode::En);
        assert_eq!(config.dictionary_url(LocaleCode::Zh), "/i18n/zh.json");
        assert_eq!(config.resize_debounce(), Duration::from_millis(100));
        assert_eq!(config.carousel_min_width, 560);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SiteConfig::from_json(r#"{"locale":"en"}"#);
        assert!(matches!(err, Err(ConfigError::Decode { .. })));
    }

    #[test]
    fn zero_debounce_fails_validation() {
        let err = SiteConfig::from_json(r#"{"resize_debounce_ms":0}"#);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidField {
                field: "resize_debounce_ms",
                ..
            })
        ));
    }

    #[test]
    fn log_format_accepts_known_names_only() -> Result<(), ConfigError> {
        let config = SiteConfig::from_json(r#"{"log_format":"json"}"#)?;
        assert_eq!(config.log_format.as_deref(), Some("json"));
        let err = SiteConfig::from_json(r#"{"log_format":"fancy"}"#);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidField {
                field: "log_format",
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn blank_base_fails_validation() {
        let config = SiteConfig {
            dictionary_base: "  ".into(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
