//! Page chrome around the localized content: sticky header, mobile
//! navigation drawer and anchor scrolling.

use crate::dom::Element;

const HEADER: &str = ".l-header";
const STICKY_WRAPPER: &str = ".l-header .sticky-wrapper";
const STICKY_CLASS: &str = "header-sticky";
const NAVIGATION: &str = ".js-navigation";
const NAV_OPEN_CLASS: &str = "is-open";
const BODY_NAV_CLASS: &str = "openNav";

/// The header sticks once the page has scrolled past twice its own height.
#[must_use]
pub fn is_sticky(scroll_top: f64, nav_height: f64) -> bool {
    scroll_top > nav_height * 2.0
}

/// Window offset that lands `target_top` just below the header.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, header_height: f64, gap: f64) -> f64 {
    target_top - (header_height + gap)
}

/// Toggle the sticky class for the given scroll position. Returns the new state.
///
/// The threshold follows the wrapper's content height; its margins do not move it.
pub fn sync_header<E: Element>(root: &E, scroll_top: f64) -> Option<bool> {
    let wrapper = root.select(STICKY_WRAPPER)?;
    let sticky = is_sticky(scroll_top, wrapper.content_height());
    if sticky {
        wrapper.add_class(STICKY_CLASS);
    } else {
        wrapper.remove_class(STICKY_CLASS);
    }
    Some(sticky)
}

/// Open the mobile navigation drawer.
pub fn open_nav<E: Element>(root: &E) {
    if let Some(nav) = root.select(NAVIGATION) {
        nav.add_class(NAV_OPEN_CLASS);
    }
    if let Some(body) = root.select("body") {
        body.add_class(BODY_NAV_CLASS);
    }
}

/// Close the mobile navigation drawer.
pub fn close_nav<E: Element>(root: &E) {
    if let Some(nav) = root.select(NAVIGATION) {
        nav.remove_class(NAV_OPEN_CLASS);
    }
    if let Some(body) = root.select("body") {
        body.remove_class(BODY_NAV_CLASS);
    }
}

/// Scroll offset for an in-page anchor (`#news`), or `None` when the target is missing.
pub fn anchor_target<E: Element>(root: &E, hash: &str, gap: f64) -> Option<f64> {
    if !hash.starts_with('#') || hash.len() < 2 {
        return None;
    }
    let target = root.select(hash)?;
    let header_height = root.select(HEADER).map_or(0.0, |header| header.outer_height());
    Some(anchor_scroll_top(target.offset_top(), header_height, gap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_threshold_is_exclusive() {
        assert!(!is_sticky(160.0, 80.0));
        assert!(is_sticky(160.5, 80.0));
        assert!(!is_sticky(0.0, 0.0));
    }

    #[test]
    fn anchor_offset_subtracts_header_and_gap() {
        let top = anchor_scroll_top(1_200.0, 90.0, 50.0);
        assert!((top - 1_060.0).abs() < f64::EPSILON);
    }
}
