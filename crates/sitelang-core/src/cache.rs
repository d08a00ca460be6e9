//! Session cache of locale dictionaries.
//!
//! # Design
//! - Entries are never evicted; the locale set is closed so growth is bounded.
//! - Fetch failures are returned to the caller and never retried here.
//! - No `RefCell` borrow is held across the fetch await.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::dictionary::LocaleDictionary;
use crate::error::FetchResult;
use crate::locale::LocaleCode;

/// Where dictionaries come from.
#[async_trait(?Send)]
pub trait LocaleSource {
    /// Fetch and parse the dictionary for `locale`.
    async fn fetch(&self, locale: LocaleCode) -> FetchResult<LocaleDictionary>;
}

#[async_trait(?Send)]
impl<S: LocaleSource + ?Sized> LocaleSource for Rc<S> {
    async fn fetch(&self, locale: LocaleCode) -> FetchResult<LocaleDictionary> {
        (**self).fetch(locale).await
    }
}

/// Lazily populated locale → dictionary map.
pub struct LocaleCache<S> {
    source: S,
    entries: RefCell<HashMap<LocaleCode, Rc<LocaleDictionary>>>,
    fetches: Cell<usize>,
}

impl<S: LocaleSource> LocaleCache<S> {
    /// Empty cache over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: RefCell::new(HashMap::new()),
            fetches: Cell::new(0),
        }
    }

    /// Cached dictionary for `locale`, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`crate::FetchError`]; nothing is cached on failure.
    pub async fn load(&self, locale: LocaleCode) -> FetchResult<Rc<LocaleDictionary>> {
        if let Some(hit) = self.get(locale) {
            return Ok(hit);
        }
        self.fetches.set(self.fetches.get() + 1);
        tracing::debug!(%locale, "fetching dictionary");
        let dictionary = Rc::new(self.source.fetch(locale).await?);
        // A concurrent load may have finished first; keep the earlier entry.
        let stored = Rc::clone(
            self.entries
                .borrow_mut()
                .entry(locale)
                .or_insert(dictionary),
        );
        Ok(stored)
    }

    /// Cached dictionary without fetching.
    #[must_use]
    pub fn get(&self, locale: LocaleCode) -> Option<Rc<LocaleDictionary>> {
        self.entries.borrow().get(&locale).cloned()
    }

    /// Whether `locale` is cached.
    #[must_use]
    pub fn contains(&self, locale: LocaleCode) -> bool {
        self.entries.borrow().contains_key(&locale)
    }

    /// Number of cached locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Fetches issued so far, failed ones included.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use serde_json::json;

    struct Inline;

    #[async_trait(?Send)]
    impl LocaleSource for Inline {
        async fn fetch(&self, locale: LocaleCode) -> FetchResult<LocaleDictionary> {
            match locale {
                LocaleCode::Zh => {
                    LocaleDictionary::from_value(locale, json!({ "style": { "title": "風格" } }))
                }
                LocaleCode::En => Err(FetchError::Status { locale, status: 404 }),
            }
        }
    }

    #[tokio::test]
    async fn second_load_reuses_entry() -> FetchResult<()> {
        let cache = LocaleCache::new(Inline);
        let first = cache.load(LocaleCode::Zh).await?;
        let second = cache.load(LocaleCode::Zh).await?;
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.fetch_count(), 1);
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = LocaleCache::new(Inline);
        assert!(cache.load(LocaleCode::En).await.is_err());
        assert!(cache.load(LocaleCode::En).await.is_err());
        assert!(!cache.contains(LocaleCode::En));
        assert!(cache.is_empty());
        assert_eq!(cache.fetch_count(), 2);
    }
}
