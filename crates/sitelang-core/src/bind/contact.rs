//! Contact block: department line plus regenerated info and sector lists.

use super::Binder;
use crate::dictionary::ContactSection;
use crate::dom::Element;
use crate::markup;

pub(super) fn bind<E: Element>(contact: &ContactSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html(root, ".department", contact.department.as_deref());
    if let Some(info) = &contact.info {
        b.regenerate(root, ".info", &markup::wrap_each("li", info.present()));
    }
    if let Some(sectors) = &contact.sectors {
        b.regenerate(root, ".sectors", &markup::wrap_each("li", sectors.present()));
    }
}
