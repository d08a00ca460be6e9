//! Curating preview copy and the feature list.

use super::Binder;
use crate::dictionary::{FeatureEntry, PreviewSection};
use crate::dom::Element;
use crate::markup;

const CURATING_TITLES: &str = ".previewGroup--curating .previewGroup__title .f-section-title";

pub(super) fn bind<E: Element>(preview: &PreviewSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html_nth(root, CURATING_TITLES, 0, preview.curating_title1.as_deref());
    b.html_nth(root, CURATING_TITLES, 1, preview.curating_title2.as_deref());
    b.html(root, ".previewGroup--curating .intro .f-section-p", preview.curating_intro.as_deref());
    b.html(root, ".hint__text", preview.curating_hint.as_deref());
    b.html(
        root,
        ".previewGroup--features .previewGroup__title .f-section-title",
        preview.features_title.as_deref(),
    );

    if preview.features.is_empty() {
        return;
    }
    for element in root.select_all(".featuresList [data-json-key]") {
        let Some(entry) = element
            .attribute("data-json-key")
            .and_then(|key| preview.features.get(&key))
        else {
            continue;
        };
        bind_feature(b, &element, entry);
    }
}

fn bind_feature<E: Element>(b: &mut Binder<'_, E>, element: &E, entry: &FeatureEntry) {
    let tag = element.tag_name();
    let is_link = tag.eq_ignore_ascii_case("a");
    let takes_content =
        is_link || tag.eq_ignore_ascii_case("div") || element.has_class("featureText");

    match entry {
        FeatureEntry::Text(html) => {
            if takes_content {
                b.html_on(element, Some(html));
            }
        }
        FeatureEntry::Detail(detail) => {
            b.attr_on(element, "alt", detail.alt.as_deref());
            if takes_content {
                b.html_on(element, detail.text.as_deref());
            }
            if is_link {
                b.attr_on(element, "href", detail.href.as_deref());
            }
            if let Some(links) = &detail.links {
                if element.has_attribute("data-links-container") {
                    b.regenerate_on(element, &markup::feature_links(links));
                }
            }
        }
    }
}
