//! Hero intro lines.

use super::Binder;
use crate::dictionary::OpeningSection;
use crate::dom::Element;

pub(super) fn bind<E: Element>(opening: &OpeningSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html_indexed(root, ".intro__text", opening.intro_texts.as_ref());
}
