//! About groups: a title plus index-aligned paragraphs each.

use super::Binder;
use crate::dictionary::{AboutGroup, AboutSection};
use crate::dom::Element;

pub(super) fn bind<E: Element>(about: &AboutSection, b: &mut Binder<'_, E>) {
    bind_group(b, "#aboutGroup1", about.about_group1.as_ref());
    bind_group(b, "#aboutGroup2", about.about_group2.as_ref());
}

fn bind_group<E: Element>(b: &mut Binder<'_, E>, selector: &str, group: Option<&AboutGroup>) {
    let Some(group) = group else {
        return;
    };
    let Some(element) = b.root().select(selector) else {
        return;
    };
    b.html(&element, ".sectionGroup__title", group.title.as_deref());
    b.html_indexed(&element, ".f-section-p", group.texts.as_ref());
}
