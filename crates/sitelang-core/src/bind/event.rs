//! Event title and regenerated slides.

use super::Binder;
use crate::dictionary::EventSection;
use crate::dom::Element;
use crate::markup;

pub(super) fn bind<E: Element>(event: &EventSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html(root, "#event .section__title .f-section-title", event.title.as_deref());
    if let Some(items) = &event.event_data {
        b.regenerate(root, ".cardsSwiper--event .swiper-wrapper", &markup::event_slides(items));
    }
}
