//! In-memory element tree implementing [`Element`].
//!
//! Supports the selector subset the page uses: compound selectors made of a
//! tag, `#id`, `.class` and `[attr]` / `[attr="value"]` parts, joined by
//! descendant combinators, with `,` lists. Markup written through
//! `set_inner_html` is stored verbatim and replaces the children.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use sitelang_core::Element;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    children: Vec<FakeElement>,
    parent: Weak<RefCell<Node>>,
    content: String,
    offset_top: f64,
    outer_height: f64,
    content_height: Option<f64>,
    writes: usize,
}

/// Shared handle to a fake DOM node.
#[derive(Clone, Debug)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeElement {
    /// Build an element from a compound selector such as `div#news.section.section--news`.
    #[must_use]
    pub fn new(selector: &str) -> Self {
        let compound = Compound::parse(selector);
        let node = Node {
            tag: compound.tag.unwrap_or_else(|| "div".to_string()),
            ..Node::default()
        };
        let element = Self(Rc::new(RefCell::new(node)));
        if let Some(id) = compound.id {
            element.set_attribute("id", &id);
        }
        for class in compound.classes {
            element.add_class(&class);
        }
        for (name, value) in compound.attrs {
            element.set_attribute(&name, value.as_deref().unwrap_or(""));
        }
        element.0.borrow_mut().writes = 0;
        element
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attrs.insert(name.into(), value.into());
        self
    }

    /// Builder: initial content.
    #[must_use]
    pub fn text(self, content: &str) -> Self {
        self.0.borrow_mut().content = content.into();
        self
    }

    /// Builder: layout values used by scroll math.
    #[must_use]
    pub fn layout(self, offset_top: f64, outer_height: f64) -> Self {
        {
            let mut node = self.0.borrow_mut();
            node.offset_top = offset_top;
            node.outer_height = outer_height;
        }
        self
    }

    /// Builder: content-box height, when it differs from the outer height.
    #[must_use]
    pub fn with_content_height(self, height: f64) -> Self {
        self.0.borrow_mut().content_height = Some(height);
        self
    }

    /// Builder: append one child.
    #[must_use]
    pub fn child(self, child: Self) -> Self {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
        self
    }

    /// Builder: append children in order.
    #[must_use]
    pub fn children(self, children: impl IntoIterator<Item = Self>) -> Self {
        children.into_iter().fold(self, Self::child)
    }

    /// Current content: initial text, or the last markup/text written.
    #[must_use]
    pub fn content(&self) -> String {
        self.0.borrow().content.clone()
    }

    /// Inline style value.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    /// Number of mutations applied since construction.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }

    /// Number of child elements.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// First match of `selector`, for assertions.
    ///
    /// # Panics
    ///
    /// Panics naming the selector when nothing matches.
    #[must_use]
    pub fn expect(&self, selector: &str) -> Self {
        match self.select(selector) {
            Some(element) => element,
            None => panic!("fixture has no element matching `{selector}`"),
        }
    }

    /// Content of the first match, or an empty string.
    #[must_use]
    pub fn content_of(&self, selector: &str) -> String {
        self.select(selector).map(|el| el.content()).unwrap_or_default()
    }

    /// Contents of every match in document order.
    #[must_use]
    pub fn contents_of(&self, selector: &str) -> Vec<String> {
        self.select_all(selector).iter().map(Self::content).collect()
    }

    /// Mutation count summed over this element and its descendants.
    #[must_use]
    pub fn subtree_writes(&self) -> usize {
        let node = self.0.borrow();
        node.writes + node.children.iter().map(Self::subtree_writes).sum::<usize>()
    }

    fn touch(&self) {
        self.0.borrow_mut().writes += 1;
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    fn descendants(&self, out: &mut Vec<Self>) {
        for child in &self.0.borrow().children {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn classes(&self) -> Vec<String> {
        self.attribute("class")
            .map(|value| value.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn write_classes(&self, classes: &[String]) {
        self.0
            .borrow_mut()
            .attrs
            .insert("class".into(), classes.join(" "));
        self.touch();
    }

    fn matches_chain(&self, chain: &[Compound]) -> bool {
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        if !last.matches(self) {
            return false;
        }
        let mut remaining = rest;
        let mut ancestor = self.parent();
        while let Some((next, before)) = remaining.split_last() {
            let Some(current) = ancestor else {
                return false;
            };
            if next.matches(&current) {
                remaining = before;
            }
            ancestor = current.parent();
        }
        true
    }
}

impl Element for FakeElement {
    fn select_all(&self, selector: &str) -> Vec<Self> {
        let chains: Vec<Vec<Compound>> = selector
            .split(',')
            .map(|part| part.split_whitespace().map(Compound::parse).collect())
            .filter(|chain: &Vec<Compound>| !chain.is_empty())
            .collect();
        let mut all = Vec::new();
        self.descendants(&mut all);
        all.into_iter()
            .filter(|candidate| chains.iter().any(|chain| candidate.matches_chain(chain)))
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.borrow_mut().attrs.insert(name.into(), value.into());
        self.touch();
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attrs.remove(name);
        self.touch();
    }

    fn set_inner_html(&self, html: &str) {
        {
            let mut node = self.0.borrow_mut();
            node.children.clear();
            node.content = html.into();
        }
        self.touch();
    }

    fn set_text(&self, text: &str) {
        self.set_inner_html(text);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|existing| existing == class)
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.classes();
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.into());
        }
        self.write_classes(&classes);
    }

    fn remove_class(&self, class: &str) {
        let mut classes = self.classes();
        classes.retain(|existing| existing != class);
        self.write_classes(&classes);
    }

    fn tag_name(&self) -> String {
        self.0.borrow().tag.to_ascii_uppercase()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.into(), value.into());
        self.touch();
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn outer_height(&self) -> f64 {
        self.0.borrow().outer_height
    }

    fn content_height(&self) -> f64 {
        let node = self.0.borrow();
        node.content_height.unwrap_or(node.outer_height)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Compound {
    fn parse(input: &str) -> Self {
        let mut compound = Self::default();
        let mut chars = input.trim().chars().peekable();
        let mut tag = String::new();
        while let Some(&ch) = chars.peek() {
            if matches!(ch, '#' | '.' | '[') {
                break;
            }
            tag.push(ch);
            chars.next();
        }
        if !tag.is_empty() && tag != "*" {
            compound.tag = Some(tag.to_ascii_lowercase());
        }
        while let Some(marker) = chars.next() {
            match marker {
                '#' | '.' => {
                    let mut name = String::new();
                    while let Some(&ch) = chars.peek() {
                        if matches!(ch, '#' | '.' | '[') {
                            break;
                        }
                        name.push(ch);
                        chars.next();
                    }
                    if marker == '#' {
                        compound.id = Some(name);
                    } else {
                        compound.classes.push(name);
                    }
                }
                '[' => {
                    let body: String = chars.by_ref().take_while(|ch| *ch != ']').collect();
                    let attr = match body.split_once('=') {
                        Some((name, value)) => (
                            name.trim().to_string(),
                            Some(value.trim().trim_matches(['"', '\'']).to_string()),
                        ),
                        None => (body.trim().to_string(), None),
                    };
                    compound.attrs.push(attr);
                }
                _ => {}
            }
        }
        compound
    }

    fn matches(&self, element: &FakeElement) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attribute("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|(name, expected)| {
            match (element.attribute(name), expected) {
                (Some(actual), Some(expected)) => &actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> FakeElement {
        FakeElement::new("html").child(
            FakeElement::new("body").children([
                FakeElement::new("section#news.section").child(
                    FakeElement::new("div.section__title")
                        .child(FakeElement::new("h2.f-section-title").text("old")),
                ),
                FakeElement::new("div[data-popup-id=\"3\"].popupBox__content")
                    .child(FakeElement::new("p.text__title")),
                FakeElement::new("a.navbarText").attr("data-json-key", "about"),
            ]),
        )
    }

    #[test]
    fn descendant_chain_matches_through_ancestors() {
        let root = tree();
        let title = root.expect("#news .section__title .f-section-title");
        assert_eq!(title.content(), "old");
        assert!(root.select("#event .f-section-title").is_none());
        assert_eq!(root.select_all("h2").len(), 1);
    }

    #[test]
    fn attribute_selectors_with_and_without_values() {
        let root = tree();
        assert!(root.select(r#"[data-popup-id="3"] .text__title"#).is_some());
        assert!(root.select(r#"[data-popup-id="4"]"#).is_none());
        assert_eq!(root.select_all("[data-json-key]").len(), 1);
        assert_eq!(root.select_all(".navbarText, .popupBox__content").len(), 2);
    }

    #[test]
    fn scoped_select_still_sees_outer_ancestors() {
        let root = tree();
        let section = root.expect("#news");
        assert!(section.select("#news .f-section-title").is_some());
        assert!(section.select("#news").is_none());
    }

    #[test]
    fn inner_html_replaces_children() {
        let root = tree();
        let body = root.expect("body");
        body.set_inner_html("<p>x</p>");
        assert_eq!(body.child_count(), 0);
        assert!(root.select("#news").is_none());
        assert_eq!(body.content(), "<p>x</p>");
    }

    #[test]
    fn class_edits_are_idempotent() {
        let el = FakeElement::new("div.a");
        el.add_class("b");
        el.add_class("b");
        assert_eq!(el.attribute("class").as_deref(), Some("a b"));
        el.remove_class("a");
        assert!(!el.has_class("a"));
        assert_eq!(el.tag_name(), "DIV");
    }
}
