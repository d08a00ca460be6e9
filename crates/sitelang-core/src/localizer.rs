//! Language switch protocol and content rehydration.
//!
//! # Design
//! - `UiState` is owned here and mutated only between awaits.
//! - The busy flag drops concurrent switch requests; nothing is queued or cancelled.
//! - A failed fetch leaves the active locale and the page as they were.
//! - Rebinding is delegated to the per-section binders; list sections that
//!   were regenerated get their carousel rebuilt.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::bind::{RebindReport, Section, rebind_all};
use crate::cache::{LocaleCache, LocaleSource};
use crate::carousel::{CarouselKind, CarouselPlan};
use crate::config::SiteConfig;
use crate::dictionary::LocaleDictionary;
use crate::dom::{Element, PageHost};
use crate::error::FetchResult;
use crate::locale::LocaleCode;

/// Selector of the language trigger control.
pub const TRIGGER: &str = "#langToggleBtn";

/// Active locale and the switch guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Locale currently bound into the page.
    pub current: LocaleCode,
    /// Whether a switch is in flight.
    pub busy: bool,
}

/// Result of a switch request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The page now shows the target locale.
    Switched(LocaleCode),
    /// The target was already active; nothing happened.
    AlreadyActive,
    /// Another switch was in flight; the request was dropped.
    Busy,
    /// The dictionary could not be loaded; the page is unchanged.
    Failed,
}

/// Binds locale dictionaries into the page and runs the switch protocol.
pub struct ContentLocalizer<S, H> {
    cache: LocaleCache<S>,
    host: H,
    state: RefCell<UiState>,
    transition_delay: Duration,
    carousel_min_width: u32,
}

impl<S: LocaleSource, H: PageHost> ContentLocalizer<S, H> {
    /// Localizer idle in the configured default locale; nothing is bound yet.
    pub fn new(source: S, host: H, config: &SiteConfig) -> Self {
        Self {
            cache: LocaleCache::new(source),
            host,
            state: RefCell::new(UiState {
                current: config.default_locale,
                busy: false,
            }),
            transition_delay: config.transition_delay(),
            carousel_min_width: config.carousel_min_width,
        }
    }

    /// Dictionary cache.
    pub const fn cache(&self) -> &LocaleCache<S> {
        &self.cache
    }

    /// Page host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Snapshot of the UI state.
    pub fn state(&self) -> UiState {
        *self.state.borrow()
    }

    /// Locale currently bound.
    pub fn current(&self) -> LocaleCode {
        self.state.borrow().current
    }

    /// Whether a switch is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    /// Load the default locale and bind it into the page.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::FetchError`] when the default dictionary cannot be loaded;
    /// the page keeps its static markup.
    pub async fn start(&self) -> FetchResult<RebindReport> {
        let locale = self.current();
        let dictionary = self.cache.load(locale).await?;
        self.apply_document_state(locale);
        let report = self.rebind(&dictionary);
        tracing::info!(%locale, writes = report.writes(), "page localized");
        Ok(report)
    }

    /// Switch to the other locale.
    pub async fn toggle(&self) -> SwitchOutcome {
        self.request_switch(self.current().other()).await
    }

    /// Switch the page to `target`.
    pub async fn request_switch(&self, target: LocaleCode) -> SwitchOutcome {
        {
            let mut state = self.state.borrow_mut();
            if state.current == target {
                return SwitchOutcome::AlreadyActive;
            }
            if state.busy {
                tracing::debug!(%target, "switch dropped while busy");
                return SwitchOutcome::Busy;
            }
            state.busy = true;
        }
        self.set_trigger_disabled(true);

        let outcome = match self.cache.load(target).await {
            Ok(dictionary) => {
                self.host.pause(self.transition_delay).await;
                let previous = {
                    let mut state = self.state.borrow_mut();
                    std::mem::replace(&mut state.current, target)
                };
                let report = self.rebind(&dictionary);
                self.apply_document_state(target);
                let missing: Vec<&str> = report.missing().map(Section::key).collect();
                tracing::info!(
                    from = %previous,
                    to = %target,
                    writes = report.writes(),
                    ?missing,
                    "locale switched"
                );
                SwitchOutcome::Switched(target)
            }
            Err(err) => {
                tracing::error!(%target, error = %err, "locale switch abandoned");
                SwitchOutcome::Failed
            }
        };

        self.state.borrow_mut().busy = false;
        self.set_trigger_disabled(false);
        outcome
    }

    /// Warm the cache for `locale`. Failures are logged, not retried.
    pub async fn preload(&self, locale: LocaleCode) -> bool {
        match self.cache.load(locale).await {
            Ok(_) => {
                tracing::debug!(%locale, "dictionary preloaded");
                true
            }
            Err(err) => {
                tracing::warn!(%locale, error = %err, "dictionary preload failed");
                false
            }
        }
    }

    /// Rebind every region from `dictionary` and rebuild regenerated carousels.
    pub fn rebind(&self, dictionary: &LocaleDictionary) -> RebindReport {
        let root = self.host.document();
        let report = rebind_all(dictionary, &root);
        for (section, kind) in [
            (Section::News, CarouselKind::News),
            (Section::Event, CarouselKind::Event),
        ] {
            if report
                .outcome(section)
                .is_some_and(|outcome| outcome.regenerated)
            {
                self.refresh_carousel(kind);
            }
        }
        report
    }

    /// Rebuild one carousel for the current viewport.
    pub fn refresh_carousel(&self, kind: CarouselKind) {
        let plan =
            CarouselPlan::for_width(kind, self.host.viewport_width(), self.carousel_min_width);
        self.host.apply_carousel(&plan);
    }

    /// Rebuild both carousels; the debounced resize handler.
    pub fn refresh_carousels(&self) {
        for kind in CarouselKind::all() {
            self.refresh_carousel(kind);
        }
    }

    /// `section.key` from the active dictionary, or an empty string.
    pub fn text(&self, section: &str, key: &str) -> String {
        self.active_dictionary()
            .and_then(|dictionary| dictionary.text(section, key).map(str::to_owned))
            .unwrap_or_default()
    }

    /// Dictionary of the active locale, when loaded.
    pub fn active_dictionary(&self) -> Option<Rc<LocaleDictionary>> {
        self.cache.get(self.current())
    }

    fn apply_document_state(&self, locale: LocaleCode) {
        let root = self.host.document();
        root.set_attribute("lang", locale.html_lang());
        if let Some(body) = root.select("body") {
            for other in LocaleCode::all() {
                body.remove_class(other.body_class());
            }
            body.add_class(locale.body_class());
        }
        if let Some(trigger) = root.select(TRIGGER) {
            trigger.set_text(locale.other().label());
        }
    }

    fn set_trigger_disabled(&self, disabled: bool) {
        let Some(trigger) = self.host.document().select(TRIGGER) else {
            return;
        };
        if disabled {
            trigger.set_attribute("disabled", "");
        } else {
            trigger.remove_attribute("disabled");
        }
    }
}
