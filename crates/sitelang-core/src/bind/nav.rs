//! Header navigation labels.

use super::Binder;
use crate::dictionary::NavSection;
use crate::dom::Element;

pub(super) fn bind<E: Element>(nav: &NavSection, b: &mut Binder<'_, E>) {
    for anchor in b.root().select_all(".navbarText") {
        let Some(key) = anchor.attribute("data-json-key") else {
            continue;
        };
        let Some(label) = nav.label(&key) else {
            continue;
        };
        let spans = anchor.select_all("span");
        if spans.is_empty() {
            b.text_on(&anchor, Some(label));
        } else {
            for span in &spans {
                b.text_on(span, Some(label));
            }
        }
    }
}
