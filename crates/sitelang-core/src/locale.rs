//! The closed set of locales the site ships.
//!
//! # Design
//! - Two locales only; the trigger control always targets the other one.
//! - Parsing accepts browser language tags so navigator values map cleanly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale used before any switch has happened.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Zh;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Traditional Chinese (Taiwan).
    Zh,
    /// English.
    En,
}

impl LocaleCode {
    /// All supported locales in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Zh, Self::En]
    }

    /// Short code used in dictionary file names and body classes.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Value written to the root `lang` attribute.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::Zh => "zh-TW",
            Self::En => "en",
        }
    }

    /// Body class marking the active locale.
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Zh => "lang--zh",
            Self::En => "lang--en",
        }
    }

    /// Label shown on a trigger control whose target is this locale.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "EN",
        }
    }

    /// The locale a toggle from `self` switches to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Map a short code or BCP 47 tag (`zh-TW`, `en_US`) to a supported locale.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_tags_and_rejects_unknown() {
        assert_eq!(LocaleCode::parse("zh"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::parse("zh-TW"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::parse(" EN_us "), Some(LocaleCode::En));
        assert_eq!(LocaleCode::parse("fr"), None);
        assert_eq!(LocaleCode::parse(""), None);
    }

    #[test]
    fn label_names_the_target_locale() {
        assert_eq!(LocaleCode::Zh.other().label(), "EN");
        assert_eq!(LocaleCode::En.other().label(), "中文");
    }

    #[test]
    fn document_values_follow_locale() {
        assert_eq!(LocaleCode::Zh.html_lang(), "zh-TW");
        assert_eq!(LocaleCode::En.body_class(), "lang--en");
        assert_eq!(LocaleCode::default(), LocaleCode::Zh);
        assert_eq!(LocaleCode::En.to_string(), "en");
    }
}
