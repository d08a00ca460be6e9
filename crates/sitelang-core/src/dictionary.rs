//! Locale dictionary document and its typed section views.
//!
//! # Design
//! - Keep the fetched document opaque; decode a section only when it is bound.
//! - Decode leniently: a field of the wrong type reads as absent instead of
//!   failing its siblings, and empty strings count as absent.
//! - List fields keep their positions so index-aligned hooks stay aligned.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{FetchError, FetchResult};
use crate::locale::LocaleCode;

/// Parsed dictionary for one locale. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleDictionary {
    locale: LocaleCode,
    sections: Map<String, Value>,
}

impl LocaleDictionary {
    /// Parse a raw JSON payload. The top level must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Parse`] when the payload is not a JSON object.
    pub fn from_slice(locale: LocaleCode, bytes: &[u8]) -> FetchResult<Self> {
        let sections = serde_json::from_slice::<Map<String, Value>>(bytes)
            .map_err(|source| FetchError::Parse { locale, source })?;
        Ok(Self { locale, sections })
    }

    /// Build a dictionary from an already decoded value.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Parse`] when `value` is not a JSON object.
    pub fn from_value(locale: LocaleCode, value: Value) -> FetchResult<Self> {
        let sections = serde_json::from_value::<Map<String, Value>>(value)
            .map_err(|source| FetchError::Parse { locale, source })?;
        Ok(Self { locale, sections })
    }

    /// Locale this dictionary was loaded for.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Whether the document carries a section with this name.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Decode a section into its typed view; `None` when absent or not decodable.
    #[must_use]
    pub fn section<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let value = self.sections.get(name)?;
        match T::deserialize(value) {
            Ok(section) => Some(section),
            Err(err) => {
                tracing::warn!(
                    locale = %self.locale,
                    section = name,
                    error = %err,
                    "dictionary section ignored"
                );
                None
            }
        }
    }

    /// Plain string lookup of `section.key`.
    #[must_use]
    pub fn text(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(key)?
            .as_str()
            .filter(|value| !value.is_empty())
    }
}

/// Ordered list of optional strings; non-string and empty entries read as gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextList(Vec<Option<String>>);

impl TextList {
    /// Entry at `index`, skipping gaps.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index)?.as_deref()
    }

    /// Number of positions, gaps included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present entries in order.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(Option::as_deref)
    }
}

impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Value>::deserialize(deserializer)?;
        Ok(Self(items.into_iter().map(non_empty_string).collect()))
    }
}

fn non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text),
        _ => None,
    }
}

mod lenient {
    use std::collections::BTreeMap;

    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    pub(super) fn text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(super::non_empty_string(Value::deserialize(deserializer)?))
    }

    pub(super) fn field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(&value).ok())
    }

    pub(super) fn records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };
        let total = items.len();
        let kept: Vec<T> = items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect();
        if kept.len() < total {
            tracing::warn!(dropped = total - kept.len(), "malformed list records skipped");
        }
        Ok(Some(kept))
    }

    pub(super) fn entries<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let Value::Object(map) = Value::deserialize(deserializer)? else {
            return Ok(BTreeMap::new());
        };
        Ok(map
            .iter()
            .filter(|(_, value)| !matches!(value, Value::String(text) if text.is_empty()))
            .filter_map(|(key, value)| {
                T::deserialize(value).ok().map(|entry| (key.clone(), entry))
            })
            .collect())
    }
}

/// `nav`: hook key to label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavSection {
    labels: BTreeMap<String, String>,
}

impl NavSection {
    /// Label for a `data-json-key` value.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for NavSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        let labels = map
            .into_iter()
            .filter_map(|(key, value)| non_empty_string(value).map(|label| (key, label)))
            .collect();
        Ok(Self { labels })
    }
}

/// `opening`: hero intro lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpeningSection {
    /// Paragraphs, index-aligned with their hooks.
    #[serde(deserialize_with = "lenient::field")]
    pub intro_texts: Option<TextList>,
}

/// `about`: two titled paragraph groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutSection {
    /// First group (`#aboutGroup1`).
    #[serde(deserialize_with = "lenient::field")]
    pub about_group1: Option<AboutGroup>,
    /// Second group (`#aboutGroup2`).
    #[serde(deserialize_with = "lenient::field")]
    pub about_group2: Option<AboutGroup>,
}

/// One `about` group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AboutGroup {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Paragraphs, index-aligned with their hooks.
    #[serde(deserialize_with = "lenient::field")]
    pub texts: Option<TextList>,
}

/// `news`: title plus slide records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsSection {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Slides in display order.
    #[serde(deserialize_with = "lenient::records")]
    pub news_data: Option<Vec<NewsItem>>,
}

/// One news slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsItem {
    /// Image URL.
    pub img_src: String,
    /// Image alt text.
    pub img_alt: String,
    /// Display date.
    pub date: String,
    /// Heading.
    pub title: String,
    /// Summary markup.
    pub desc: String,
    /// Target of the more button.
    pub url: String,
}

/// `event`: title plus slide records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventSection {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Slides in display order.
    #[serde(deserialize_with = "lenient::records")]
    pub event_data: Option<Vec<EventItem>>,
}

/// One event slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventItem {
    /// Display date.
    pub date: String,
    /// Image URL.
    pub img_src: String,
    /// Image alt text.
    pub img_alt: String,
    /// Heading.
    pub title: String,
    /// Venue.
    pub location: String,
    /// Target of the more button.
    pub url: String,
}

/// `preview`: curating copy and the feature list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewSection {
    /// First curating heading.
    #[serde(deserialize_with = "lenient::text")]
    pub curating_title1: Option<String>,
    /// Second curating heading.
    #[serde(deserialize_with = "lenient::text")]
    pub curating_title2: Option<String>,
    /// Curating intro paragraph.
    #[serde(deserialize_with = "lenient::text")]
    pub curating_intro: Option<String>,
    /// Hint below the curating wheel.
    #[serde(deserialize_with = "lenient::text")]
    pub curating_hint: Option<String>,
    /// Features heading.
    #[serde(deserialize_with = "lenient::text")]
    pub features_title: Option<String>,
    /// Values keyed by `data-json-key`.
    #[serde(deserialize_with = "lenient::entries")]
    pub features: BTreeMap<String, FeatureEntry>,
}

/// A feature hook value: bare markup or a structured record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FeatureEntry {
    /// Markup for the hook's content.
    Text(String),
    /// Content plus attributes.
    Detail(FeatureDetail),
}

/// Structured feature record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureDetail {
    /// Content markup.
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
    /// Image alt text.
    #[serde(deserialize_with = "lenient::text")]
    pub alt: Option<String>,
    /// Link target.
    #[serde(deserialize_with = "lenient::text")]
    pub href: Option<String>,
    /// Links regenerated inside a links container.
    #[serde(deserialize_with = "lenient::records")]
    pub links: Option<Vec<FeatureLink>>,
}

/// Link generated inside a links container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureLink {
    /// Link target.
    pub href: String,
    /// Link text (plain).
    pub text: String,
}

/// `vi`: visual identity copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViSection {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Subtitle markup.
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: Option<String>,
    /// Logo alt text.
    #[serde(deserialize_with = "lenient::text")]
    pub logo_alt: Option<String>,
    /// Paragraphs, index-aligned with their hooks.
    #[serde(deserialize_with = "lenient::field")]
    pub intro_texts: Option<TextList>,
    /// Imagery heading.
    #[serde(deserialize_with = "lenient::text")]
    pub imagery_title: Option<String>,
    /// Imagery captions, also used as artwork alt text.
    #[serde(deserialize_with = "lenient::field")]
    pub imagery_items: Option<TextList>,
}

/// `participation`: rules and call-to-action copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipationSection {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Intro paragraph.
    #[serde(deserialize_with = "lenient::text")]
    pub intro: Option<String>,
    /// First rule heading.
    #[serde(deserialize_with = "lenient::text")]
    pub highlight_title: Option<String>,
    /// Items of the first rule block.
    #[serde(deserialize_with = "lenient::field")]
    pub highlight_items: Option<TextList>,
    /// Second rule heading.
    #[serde(deserialize_with = "lenient::text")]
    pub info_title: Option<String>,
    /// Action button labels.
    #[serde(deserialize_with = "lenient::field")]
    pub action_items: Option<TextList>,
}

/// `authorization`: application rules copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationSection {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Paragraphs, index-aligned with their hooks.
    #[serde(deserialize_with = "lenient::field")]
    pub intro_texts: Option<TextList>,
    /// Application rule heading.
    #[serde(deserialize_with = "lenient::text")]
    pub application_title: Option<String>,
    /// Application rule items.
    #[serde(deserialize_with = "lenient::field")]
    pub application_items: Option<TextList>,
    /// Action button labels.
    #[serde(deserialize_with = "lenient::field")]
    pub action_items: Option<TextList>,
}

/// `style`: section title only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleSection {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
}

/// `contact`: department line plus regenerated lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    /// Department line.
    #[serde(deserialize_with = "lenient::text")]
    pub department: Option<String>,
    /// Contact lines, regenerated as list items.
    #[serde(deserialize_with = "lenient::field")]
    pub info: Option<TextList>,
    /// Sector lines, regenerated as list items.
    #[serde(deserialize_with = "lenient::field")]
    pub sectors: Option<TextList>,
}

/// `popup`: popup id to its copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupSection {
    /// Entries keyed by `data-popup-id`; undecodable entries are dropped.
    pub entries: BTreeMap<String, PopupEntry>,
}

impl<'de> Deserialize<'de> for PopupSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::entries(deserializer).map(|entries| Self { entries })
    }
}

/// Copy for one popup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupEntry {
    /// Section or item heading.
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Description markup.
    #[serde(deserialize_with = "lenient::text")]
    pub desc: Option<String>,
    /// Tag list heading.
    #[serde(deserialize_with = "lenient::text")]
    pub tags_title: Option<String>,
    /// Tag list markup.
    #[serde(deserialize_with = "lenient::text")]
    pub tags: Option<String>,
    /// Preview heading.
    #[serde(deserialize_with = "lenient::text")]
    pub preview_title: Option<String>,
    /// Preview paragraphs, regenerated.
    #[serde(deserialize_with = "lenient::field")]
    pub preview_content: Option<TextList>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dictionary(value: Value) -> LocaleDictionary {
        match LocaleDictionary::from_value(LocaleCode::En, value) {
            Ok(dictionary) => dictionary,
            Err(err) => panic!("fixture must be an object: {err}"),
        }
    }

    #[test]
    fn non_object_payload_is_a_parse_error() {
        let err = LocaleDictionary::from_slice(LocaleCode::Zh, b"[1, 2]");
        assert!(matches!(
            err,
            Err(FetchError::Parse {
                locale: LocaleCode::Zh,
                ..
            })
        ));
        assert!(LocaleDictionary::from_slice(LocaleCode::Zh, b"{not json").is_err());
    }

    #[test]
    fn text_lookup_ignores_empty_and_non_strings() {
        let dict = dictionary(json!({
            "nav": { "about": "About", "news": "", "count": 3 }
        }));
        assert_eq!(dict.text("nav", "about"), Some("About"));
        assert_eq!(dict.text("nav", "news"), None);
        assert_eq!(dict.text("nav", "count"), None);
        assert_eq!(dict.text("missing", "about"), None);
    }

    #[test]
    fn wrong_typed_field_does_not_hide_siblings() {
        let dict = dictionary(json!({
            "participation": {
                "title": "Join",
                "intro": 42,
                "highlightItems": ["a", 7, "", "d"]
            }
        }));
        let section: Option<ParticipationSection> = dict.section("participation");
        let Some(section) = section else {
            panic!("section should decode");
        };
        assert_eq!(section.title.as_deref(), Some("Join"));
        assert_eq!(section.intro, None);
        let items = section.highlight_items.unwrap_or_default();
        assert_eq!(items.len(), 4);
        assert_eq!(items.get(0), Some("a"));
        assert_eq!(items.get(1), None);
        assert_eq!(items.get(2), None);
        assert_eq!(items.get(3), Some("d"));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let dict = dictionary(json!({
            "news": {
                "newsData": [
                    { "title": "kept", "url": "https://example.test" },
                    "not a record",
                    { "title": 5 }
                ]
            }
        }));
        let section: NewsSection = dict.section("news").unwrap_or_default();
        let items = section.news_data.unwrap_or_default();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "kept");
        assert_eq!(items[0].img_src, "");
    }

    #[test]
    fn feature_entries_accept_both_shapes() {
        let dict = dictionary(json!({
            "preview": {
                "features": {
                    "plain": "<b>x</b>",
                    "rich": { "text": "y", "href": "/y", "links": [{ "href": "/z", "text": "z" }] },
                    "bogus": 12,
                    "blank": ""
                }
            }
        }));
        let section: PreviewSection = dict.section("preview").unwrap_or_default();
        assert_eq!(
            section.features.get("plain"),
            Some(&FeatureEntry::Text("<b>x</b>".into()))
        );
        let Some(FeatureEntry::Detail(rich)) = section.features.get("rich") else {
            panic!("rich feature should decode as detail");
        };
        assert_eq!(rich.href.as_deref(), Some("/y"));
        assert_eq!(rich.links.as_ref().map(Vec::len), Some(1));
        assert!(!section.features.contains_key("bogus"));
        assert!(!section.features.contains_key("blank"));
    }

    #[test]
    fn popup_section_keeps_ids() {
        let dict = dictionary(json!({
            "popup": {
                "0": { "title": "Seed", "previewContent": ["p1", "p2"] },
                "3": "broken"
            }
        }));
        let section: PopupSection = dict.section("popup").unwrap_or_default();
        assert_eq!(section.entries.len(), 1);
        let seed = &section.entries["0"];
        assert_eq!(seed.title.as_deref(), Some("Seed"));
        assert_eq!(
            seed.preview_content.as_ref().map(|list| list.present().count()),
            Some(2)
        );
    }

    #[test]
    fn non_object_section_reads_as_absent() {
        let dict = dictionary(json!({ "style": "oops" }));
        assert!(dict.has_section("style"));
        assert!(dict.section::<StyleSection>("style").is_none());
    }
}
