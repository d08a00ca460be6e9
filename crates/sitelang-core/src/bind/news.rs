//! News title and regenerated slides.

use super::Binder;
use crate::dictionary::NewsSection;
use crate::dom::Element;
use crate::markup;

pub(super) fn bind<E: Element>(news: &NewsSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    b.html(root, "#news .section__title .f-section-title", news.title.as_deref());
    if let Some(items) = &news.news_data {
        b.regenerate(root, ".cardsSwiper--news .swiper-wrapper", &markup::news_slides(items));
    }
}
