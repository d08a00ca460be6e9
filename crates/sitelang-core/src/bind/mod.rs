//! Section binders: pure `bind(section, binder)` functions, one per page region.
//!
//! # Design
//! - Each binder reads only its own dictionary section and touches only its own region.
//! - Missing sections, keys and hooks are per-field no-ops; previous content stays.
//! - List regions are regenerated wholesale; every other hook is filled in place.
//! - A report records what each binder did so callers can log and react.

mod about;
mod authorization;
mod contact;
mod event;
mod nav;
mod news;
mod opening;
mod participation;
mod popup;
mod preview;
mod style;
mod vi;

use serde::de::DeserializeOwned;

use crate::dictionary::{LocaleDictionary, TextList};
use crate::dom::Element;
use crate::locale::LocaleCode;

/// Page regions in rebind order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Header navigation labels.
    Nav,
    /// Hero intro lines.
    Opening,
    /// About groups.
    About,
    /// News title and slides.
    News,
    /// Event title and slides.
    Event,
    /// Curating preview and features.
    Preview,
    /// Visual identity copy and artwork.
    Vi,
    /// Participation rules.
    Participation,
    /// Authorization rules.
    Authorization,
    /// Style title.
    Style,
    /// Contact block.
    Contact,
    /// Popup copy.
    Popup,
}

impl Section {
    /// Fixed rebind order: navigation first, then content sections.
    pub const ORDER: [Self; 12] = [
        Self::Nav,
        Self::Opening,
        Self::About,
        Self::News,
        Self::Event,
        Self::Preview,
        Self::Vi,
        Self::Participation,
        Self::Authorization,
        Self::Style,
        Self::Contact,
        Self::Popup,
    ];

    /// Top-level dictionary key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::Opening => "opening",
            Self::About => "about",
            Self::News => "news",
            Self::Event => "event",
            Self::Preview => "preview",
            Self::Vi => "vi",
            Self::Participation => "participation",
            Self::Authorization => "authorization",
            Self::Style => "style",
            Self::Contact => "contact",
            Self::Popup => "popup",
        }
    }
}

/// What one binder did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Region bound.
    pub section: Section,
    /// Whether the dictionary carried a decodable section.
    pub present: bool,
    /// Hooks written.
    pub writes: usize,
    /// Whether a list region was regenerated.
    pub regenerated: bool,
}

/// Outcome of a full rebind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebindReport {
    /// Locale of the dictionary bound.
    pub locale: LocaleCode,
    /// Per-section outcomes in rebind order.
    pub sections: Vec<SectionOutcome>,
}

impl RebindReport {
    /// Outcome for one section.
    #[must_use]
    pub fn outcome(&self, section: Section) -> Option<&SectionOutcome> {
        self.sections.iter().find(|outcome| outcome.section == section)
    }

    /// Total hooks written.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.sections.iter().map(|outcome| outcome.writes).sum()
    }

    /// Sections the dictionary did not carry.
    pub fn missing(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections
            .iter()
            .filter(|outcome| !outcome.present)
            .map(|outcome| outcome.section)
    }
}

/// Bind every region in [`Section::ORDER`].
pub fn rebind_all<E: Element>(dictionary: &LocaleDictionary, root: &E) -> RebindReport {
    let sections = Section::ORDER
        .iter()
        .map(|section| bind_section(*section, dictionary, root))
        .collect();
    RebindReport {
        locale: dictionary.locale(),
        sections,
    }
}

/// Bind one region from its dictionary section.
pub fn bind_section<E: Element>(
    section: Section,
    dictionary: &LocaleDictionary,
    root: &E,
) -> SectionOutcome {
    let mut binder = Binder::new(root, dictionary.locale());
    let present = match section {
        Section::Nav => apply(dictionary, section, &mut binder, nav::bind),
        Section::Opening => apply(dictionary, section, &mut binder, opening::bind),
        Section::About => apply(dictionary, section, &mut binder, about::bind),
        Section::News => apply(dictionary, section, &mut binder, news::bind),
        Section::Event => apply(dictionary, section, &mut binder, event::bind),
        Section::Preview => apply(dictionary, section, &mut binder, preview::bind),
        Section::Vi => apply(dictionary, section, &mut binder, vi::bind),
        Section::Participation => apply(dictionary, section, &mut binder, participation::bind),
        Section::Authorization => apply(dictionary, section, &mut binder, authorization::bind),
        Section::Style => apply(dictionary, section, &mut binder, style::bind),
        Section::Contact => apply(dictionary, section, &mut binder, contact::bind),
        Section::Popup => apply(dictionary, section, &mut binder, popup::bind),
    };
    let outcome = SectionOutcome {
        section,
        present,
        writes: binder.writes,
        regenerated: binder.regenerated,
    };
    tracing::debug!(
        section = section.key(),
        present,
        writes = outcome.writes,
        regenerated = outcome.regenerated,
        "section bound"
    );
    outcome
}

fn apply<'a, E, T, F>(
    dictionary: &LocaleDictionary,
    section: Section,
    binder: &mut Binder<'a, E>,
    bind: F,
) -> bool
where
    E: Element,
    T: DeserializeOwned,
    F: FnOnce(&T, &mut Binder<'a, E>),
{
    dictionary.section::<T>(section.key()).is_some_and(|data| {
        bind(&data, binder);
        true
    })
}

/// Write helper handed to each section binder; counts writes and skips absent values.
pub struct Binder<'a, E> {
    root: &'a E,
    locale: LocaleCode,
    writes: usize,
    regenerated: bool,
}

impl<'a, E: Element> Binder<'a, E> {
    /// Binder writing beneath `root` for a dictionary of `locale`.
    pub const fn new(root: &'a E, locale: LocaleCode) -> Self {
        Self {
            root,
            locale,
            writes: 0,
            regenerated: false,
        }
    }

    /// Document root.
    #[must_use]
    pub const fn root(&self) -> &'a E {
        self.root
    }

    /// Locale of the dictionary being bound.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Set markup on `element` when `value` is present.
    pub fn html_on(&mut self, element: &E, value: Option<&str>) {
        if let Some(value) = value {
            element.set_inner_html(value);
            self.writes += 1;
        }
    }

    /// Set markup on the first match of `selector` under `scope`.
    pub fn html(&mut self, scope: &E, selector: &str, value: Option<&str>) {
        if value.is_none() {
            return;
        }
        if let Some(element) = scope.select(selector) {
            self.html_on(&element, value);
        }
    }

    /// Set markup on the `index`th match of `selector` under `scope`.
    pub fn html_nth(&mut self, scope: &E, selector: &str, index: usize, value: Option<&str>) {
        if value.is_none() {
            return;
        }
        if let Some(element) = scope.select_all(selector).get(index) {
            self.html_on(element, value);
        }
    }

    /// Pair every match of `selector` with the list entry at the same index.
    pub fn html_indexed(&mut self, scope: &E, selector: &str, list: Option<&TextList>) {
        let Some(list) = list else {
            return;
        };
        for (index, element) in scope.select_all(selector).iter().enumerate() {
            self.html_on(element, list.get(index));
        }
    }

    /// Set plain text on `element` when `value` is present.
    pub fn text_on(&mut self, element: &E, value: Option<&str>) {
        if let Some(value) = value {
            element.set_text(value);
            self.writes += 1;
        }
    }

    /// Set an attribute on `element` when `value` is present.
    pub fn attr_on(&mut self, element: &E, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            element.set_attribute(name, value);
            self.writes += 1;
        }
    }

    /// Set an attribute on the first match of `selector` under `scope`.
    pub fn attr(&mut self, scope: &E, selector: &str, name: &str, value: Option<&str>) {
        if value.is_none() {
            return;
        }
        if let Some(element) = scope.select(selector) {
            self.attr_on(&element, name, value);
        }
    }

    /// Replace the content of `element` with generated markup.
    pub fn regenerate_on(&mut self, element: &E, markup: &str) {
        element.set_inner_html(markup);
        self.writes += 1;
        self.regenerated = true;
    }

    /// Replace the content of the first match of `selector` with generated markup.
    /// Returns whether the container existed.
    pub fn regenerate(&mut self, scope: &E, selector: &str, markup: &str) -> bool {
        match scope.select(selector) {
            Some(element) => {
                self.regenerate_on(&element, markup);
                true
            }
            None => false,
        }
    }
}
