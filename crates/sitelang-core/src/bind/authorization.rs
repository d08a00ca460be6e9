//! Authorization rules.

use super::Binder;
use crate::dictionary::AuthorizationSection;
use crate::dom::Element;

pub(super) fn bind<E: Element>(auth: &AuthorizationSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html(root, "#authorization .section__title .f-section-title", auth.title.as_deref());
    b.html_indexed(root, "#authorization .intro p", auth.intro_texts.as_ref());
    b.html(root, "#authorization .rule__title", auth.application_title.as_deref());
    b.html_indexed(
        root,
        "#authorization .rule__list .f-section-h5",
        auth.application_items.as_ref(),
    );
    b.html_indexed(root, "#authorization .action .btn__text", auth.action_items.as_ref());
}
