//! DOM seam shared by the binders, popup controller and page chrome.
//!
//! # Design
//! - Handles are cheap clones over shared nodes, so every mutator takes `&self`.
//! - Only the operations the page needs; selectors are plain CSS strings.
//! - The host owns side effects that are not DOM writes (timers, widgets).

use std::time::Duration;

use async_trait::async_trait;

use crate::carousel::CarouselPlan;

/// Handle to a DOM element.
pub trait Element: Clone {
    /// Descendants matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// First descendant matching `selector`.
    fn select(&self, selector: &str) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    /// Attribute value, if set.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Whether the attribute is present.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Set an attribute value.
    fn set_attribute(&self, name: &str, value: &str);

    /// Remove an attribute.
    fn remove_attribute(&self, name: &str);

    /// Replace the element's content with parsed markup.
    fn set_inner_html(&self, html: &str);

    /// Replace the element's content with plain text.
    fn set_text(&self, text: &str);

    /// Whether the element carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` to the element's class list.
    fn add_class(&self, class: &str);

    /// Remove `class` from the element's class list.
    fn remove_class(&self, class: &str);

    /// Upper-case tag name (`A`, `DIV`, `IMG`).
    fn tag_name(&self) -> String;

    /// Set one inline style property.
    fn set_style(&self, property: &str, value: &str);

    /// Distance from the top of the document to the element's border box.
    fn offset_top(&self) -> f64;

    /// Rendered height including vertical margins.
    fn outer_height(&self) -> f64;

    /// Height of the content box, excluding padding, borders and margins.
    fn content_height(&self) -> f64;
}

/// Environment the localizer runs in.
#[async_trait(?Send)]
pub trait PageHost {
    /// Element handle type of this host.
    type Element: Element;

    /// Document root (`<html>`); every hook is resolved beneath it.
    fn document(&self) -> Self::Element;

    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> u32;

    /// Suspend for `delay`; used for the visual transition before a rebind.
    async fn pause(&self, delay: Duration);

    /// Destroy and, when planned, recreate a carousel widget.
    fn apply_carousel(&self, plan: &CarouselPlan);

    /// Smooth-scroll the window to a document offset.
    fn scroll_to(&self, top: f64);
}
