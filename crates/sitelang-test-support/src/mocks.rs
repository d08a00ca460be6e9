//! Scripted collaborators for the localizer and page.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sitelang_core::{
    CarouselPlan, FetchError, FetchResult, LocaleCode, LocaleDictionary, LocaleSource, PageHost,
};
use tokio::sync::Notify;

use crate::dom::FakeElement;

#[derive(Clone, Debug)]
enum Script {
    Document(Value),
    Status(u16),
    Network(String),
}

/// Locale source answering from scripted documents and failures.
///
/// Unscripted locales answer with HTTP 404. A gate, when installed, holds
/// every fetch until the test releases it.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    scripts: RefCell<HashMap<LocaleCode, Script>>,
    calls: RefCell<Vec<LocaleCode>>,
    gate: RefCell<Option<Rc<Notify>>>,
}

impl ScriptedSource {
    /// Source with nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source serving both fixture dictionaries.
    #[must_use]
    pub fn bilingual() -> Self {
        let source = Self::new();
        source.serve(LocaleCode::Zh, crate::fixtures::zh_dictionary());
        source.serve(LocaleCode::En, crate::fixtures::en_dictionary());
        source
    }

    /// Serve `document` for `locale`.
    pub fn serve(&self, locale: LocaleCode, document: Value) {
        self.scripts
            .borrow_mut()
            .insert(locale, Script::Document(document));
    }

    /// Answer `locale` with an HTTP status failure.
    pub fn fail_status(&self, locale: LocaleCode, status: u16) {
        self.scripts
            .borrow_mut()
            .insert(locale, Script::Status(status));
    }

    /// Answer `locale` with a network failure.
    pub fn fail_network(&self, locale: LocaleCode, detail: &str) {
        self.scripts
            .borrow_mut()
            .insert(locale, Script::Network(detail.to_string()));
    }

    /// Hold every subsequent fetch until the returned gate is notified.
    #[must_use]
    pub fn gate(&self) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        *self.gate.borrow_mut() = Some(Rc::clone(&gate));
        gate
    }

    /// Every fetch in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<LocaleCode> {
        self.calls.borrow().clone()
    }

    /// Fetches issued for `locale`.
    #[must_use]
    pub fn fetches(&self, locale: LocaleCode) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|called| **called == locale)
            .count()
    }
}

#[async_trait(?Send)]
impl LocaleSource for ScriptedSource {
    async fn fetch(&self, locale: LocaleCode) -> FetchResult<LocaleDictionary> {
        self.calls.borrow_mut().push(locale);
        let gate = self.gate.borrow().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let script = self.scripts.borrow().get(&locale).cloned();
        match script {
            Some(Script::Document(document)) => LocaleDictionary::from_value(locale, document),
            Some(Script::Status(status)) => Err(FetchError::Status { locale, status }),
            Some(Script::Network(detail)) => Err(FetchError::Network { locale, detail }),
            None => Err(FetchError::Status {
                locale,
                status: 404,
            }),
        }
    }
}

/// Page host over a [`FakeElement`] document that records its side effects.
#[derive(Debug)]
pub struct FakeHost {
    document: FakeElement,
    viewport_width: Cell<u32>,
    pauses: RefCell<Vec<Duration>>,
    carousels: RefCell<Vec<CarouselPlan>>,
    scrolls: RefCell<Vec<f64>>,
}

impl FakeHost {
    /// Host over `document` with a desktop-width viewport.
    #[must_use]
    pub fn new(document: FakeElement) -> Self {
        Self {
            document,
            viewport_width: Cell::new(1280),
            pauses: RefCell::new(Vec::new()),
            carousels: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
        }
    }

    /// Host over the fixture page.
    #[must_use]
    pub fn with_fixture_page() -> Self {
        Self::new(crate::fixtures::page())
    }

    /// Change the reported viewport width.
    pub fn resize(&self, width: u32) {
        self.viewport_width.set(width);
    }

    /// Pauses requested, in order.
    #[must_use]
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.borrow().clone()
    }

    /// Carousel plans applied, in order.
    #[must_use]
    pub fn carousels(&self) -> Vec<CarouselPlan> {
        self.carousels.borrow().clone()
    }

    /// Forget recorded carousel plans.
    pub fn clear_carousels(&self) {
        self.carousels.borrow_mut().clear();
    }

    /// Scroll offsets requested, in order.
    #[must_use]
    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PageHost for FakeHost {
    type Element = FakeElement;

    fn document(&self) -> FakeElement {
        self.document.clone()
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width.get()
    }

    async fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }

    fn apply_carousel(&self, plan: &CarouselPlan) {
        self.carousels.borrow_mut().push(plan.clone());
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}
