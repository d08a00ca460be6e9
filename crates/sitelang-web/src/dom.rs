//! [`Element`] over live `web_sys` nodes.

use sitelang_core::Element;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, HtmlElement, SvgElement};

use crate::layout::parse_px;

/// Handle to a live DOM element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct WebElement(web_sys::Element);

impl WebElement {
    pub(crate) const fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    pub(crate) const fn inner(&self) -> &web_sys::Element {
        &self.0
    }

    fn inline_style(&self) -> Option<CssStyleDeclaration> {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            return Some(html.style());
        }
        self.0.dyn_ref::<SvgElement>().map(SvgElement::style)
    }

    fn computed_px(&self, properties: [&str; 2]) -> f64 {
        let style = gloo::utils::window()
            .get_computed_style(&self.0)
            .ok()
            .flatten();
        style.map_or(0.0, |style| {
            properties
                .iter()
                .filter_map(|property| style.get_property_value(property).ok())
                .map(|value| parse_px(&value))
                .sum()
        })
    }
}

fn report(operation: &'static str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::debug!(operation, error = ?err, "DOM call failed");
    }
}

impl Element for WebElement {
    fn select_all(&self, selector: &str) -> Vec<Self> {
        match self.0.query_selector_all(selector) {
            Ok(list) => (0..list.length())
                .filter_map(|index| list.item(index))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .map(Self)
                .collect(),
            Err(err) => {
                tracing::warn!(selector, error = ?err, "selector rejected");
                Vec::new()
            }
        }
    }

    fn select(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(Self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        report("setAttribute", self.0.set_attribute(name, value));
    }

    fn remove_attribute(&self, name: &str) {
        report("removeAttribute", self.0.remove_attribute(name));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        report("classList.add", self.0.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        report("classList.remove", self.0.class_list().remove_1(class));
    }

    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(style) = self.inline_style() {
            report("style.setProperty", style.set_property(property, value));
        }
    }

    fn offset_top(&self) -> f64 {
        let scroll_y = gloo::utils::window().scroll_y().unwrap_or(0.0);
        self.0.get_bounding_client_rect().top() + scroll_y
    }

    fn outer_height(&self) -> f64 {
        self.0.get_bounding_client_rect().height()
            + self.computed_px(["margin-top", "margin-bottom"])
    }

    fn content_height(&self) -> f64 {
        let padding = self.computed_px(["padding-top", "padding-bottom"]);
        (f64::from(self.0.client_height()) - padding).max(0.0)
    }
}
