//! Style section title.

use super::Binder;
use crate::dictionary::StyleSection;
use crate::dom::Element;

pub(super) fn bind<E: Element>(style: &StyleSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html(root, "#style .section__title .f-section-title", style.title.as_deref());
}
