//! Markup generation for regenerated list regions.
//!
//! Dictionary copy is trusted markup and is inserted as-is; values landing in
//! attributes or plain-text positions are escaped.

use std::fmt::Write;

use crate::dictionary::{EventItem, FeatureLink, NewsItem};

/// Escape text for an HTML attribute value or text node.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// One `.swiper-slide` per news item.
#[must_use]
pub fn news_slides(items: &[NewsItem]) -> String {
    let mut html = String::new();
    for item in items {
        let _ = write!(
            html,
            r#"<div class="swiper-slide"><div class="cardItem cardItem--news"><div class="cardItem__image"><img src="{src}" alt="{alt}"></div><div class="cardItem__text"><div class="date">{date}</div><div class="title f-section-h4">{title}</div><div class="desc f-section-h5">{desc}</div><div class="more"><a href="{url}" class="btn btn--more" target="_blank"><span class="btn__text">MORE</span></a></div></div></div></div>"#,
            src = escape(&item.img_src),
            alt = escape(&item.img_alt),
            date = item.date,
            title = item.title,
            desc = item.desc,
            url = escape(&item.url),
        );
    }
    html
}

/// One `.swiper-slide` per event item.
#[must_use]
pub fn event_slides(items: &[EventItem]) -> String {
    let mut html = String::new();
    for item in items {
        let _ = write!(
            html,
            r#"<div class="swiper-slide"><div class="cardItem cardItem--event"><div class="cardItem__date">{date}</div><div class="cardItem__image"><img src="{src}" alt="{alt}"></div><div class="cardItem__text"><div class="title f-section-h4">{title}</div><div class="location"><span>{location}</span></div><div class="more"><a href="{url}" class="btn btn--more" target="_blank"><span class="btn__text">MORE</span></a></div></div></div></div>"#,
            date = item.date,
            src = escape(&item.img_src),
            alt = escape(&item.img_alt),
            title = item.title,
            location = item.location,
            url = escape(&item.url),
        );
    }
    html
}

/// Wrap each entry in `<tag>` without escaping.
#[must_use]
pub fn wrap_each<'a>(tag: &str, entries: impl IntoIterator<Item = &'a str>) -> String {
    entries.into_iter().fold(String::new(), |mut html, entry| {
        let _ = write!(html, "<{tag}>{entry}</{tag}>");
        html
    })
}

/// Anchors for a feature links container; link text is plain text.
#[must_use]
pub fn feature_links(links: &[FeatureLink]) -> String {
    links
        .iter()
        .enumerate()
        .fold(String::new(), |mut html, (index, link)| {
            let _ = write!(
                html,
                r#"<a href="{href}" target="_blank" rel="noopener noreferrer" data-link-index="{index}">{text}</a>"#,
                href = escape(&link.href),
                text = escape(&link.text),
            );
            html
        })
}
