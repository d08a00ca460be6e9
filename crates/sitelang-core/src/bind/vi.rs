//! Visual identity copy plus locale-specific artwork.

use super::Binder;
use crate::dictionary::ViSection;
use crate::dom::Element;
use crate::locale::LocaleCode;

const ARTWORK_BASE: &str = "assets/images/vi";
const IMAGERY_NAMES: [&str; 3] = ["nature", "culture", "amazing"];

pub(super) fn bind<E: Element>(vi: &ViSection, b: &mut Binder<'_, E>) {
    let root = b.root();
    let title = vi.title.as_deref();
    let subtitle = vi.subtitle.as_deref();

    // The mobile header and the desktop intro both carry the title pair.
    b.html(root, ".section--vi .section__title .topic", title);
    b.html(root, ".section--vi .section__title .sub", subtitle);
    b.html(root, ".viGroup--intro .topic", title);
    b.html(root, ".viGroup--intro .sub", subtitle);

    b.attr(root, ".viGroup--intro .coverImg img", "alt", vi.logo_alt.as_deref());
    b.html_indexed(
        root,
        ".viGroup--intro .introText__paragraph .f-section-p",
        vi.intro_texts.as_ref(),
    );
    b.html(
        root,
        ".viGroup--imagery .viGroup__title .f-section-title",
        vi.imagery_title.as_deref(),
    );
    b.html_indexed(root, ".imageryGroup__title .f-section-h4", vi.imagery_items.as_ref());

    bind_element_artwork(b);
    bind_imagery_artwork(b, vi);
}

fn bind_element_artwork<E: Element>(b: &mut Binder<'_, E>) {
    let root = b.root();
    let locale = b.locale();
    for display in ["pc", "mb"] {
        let src = artwork_path("element", display, locale);
        b.attr(root, &format!(".viGroup__image .display--{display}"), "src", Some(&src));
    }
}

fn bind_imagery_artwork<E: Element>(b: &mut Binder<'_, E>, vi: &ViSection) {
    let locale = b.locale();
    for (index, group) in b.root().select_all(".imageryGroup").iter().enumerate() {
        let Some(name) = IMAGERY_NAMES.get(index) else {
            break;
        };
        let alt = vi.imagery_items.as_ref().and_then(|items| items.get(index));
        for display in ["pc", "mb"] {
            let selector = format!(".imageryGroup__image .display--{display}");
            let Some(img) = group.select(&selector) else {
                continue;
            };
            b.attr_on(&img, "src", Some(&artwork_path(name, display, locale)));
            b.attr_on(&img, "alt", alt);
        }
    }
}

/// Path of a locale-specific visual identity asset.
fn artwork_path(name: &str, display: &str, locale: LocaleCode) -> String {
    format!("{ARTWORK_BASE}/img_{name}-{display}-{}.svg", locale.code())
}
