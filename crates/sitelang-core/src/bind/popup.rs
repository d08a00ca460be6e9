//! Popup copy, keyed by `data-popup-id`.

use super::Binder;
use crate::dictionary::PopupSection;
use crate::dom::Element;
use crate::markup;

pub(super) fn bind<E: Element>(popup: &PopupSection, b: &mut Binder<'_, E>) {
    for (id, entry) in &popup.entries {
        let selector = format!(r#"[data-popup-id="{id}"]"#);
        let Some(element) = b.root().select(&selector) else {
            continue;
        };
        b.html(&element, ".text__title", entry.title.as_deref());
        b.html(&element, ".text__desc", entry.desc.as_deref());
        b.html(&element, ".text__tags dt", entry.tags_title.as_deref());
        b.html(&element, ".text__tags dd", entry.tags.as_deref());
        b.html(&element, ".previewTitle", entry.preview_title.as_deref());
        if let Some(content) = &entry.preview_content {
            b.regenerate(&element, ".previewContent", &markup::wrap_each("p", content.present()));
        }
    }
}
