//! Participation rules. The first rule block carries the highlights, the
//! second rule title the info heading.

use super::Binder;
use crate::dictionary::ParticipationSection;
use crate::dom::Element;

pub(super) fn bind<E: Element>(part: &ParticipationSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html(root, "#participation .section__title .f-section-title", part.title.as_deref());
    b.html(root, "#participation .intro p", part.intro.as_deref());
    b.html_nth(root, "#participation .rule__title", 0, part.highlight_title.as_deref());
    if let Some(first_rule) = root.select("#participation .rule") {
        b.html_indexed(&first_rule, ".f-section-h5", part.highlight_items.as_ref());
    }
    b.html_nth(root, "#participation .rule__title", 1, part.info_title.as_deref());
    b.html_indexed(root, "#participation .action .btn__text", part.action_items.as_ref());
}
