#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM-free core of the bilingual site: locale dictionaries, the switch
//! protocol, section binders and the page collaborators they drive.
//!
//! Layout: locale.rs (codes), dictionary.rs (document + section views),
//! cache.rs (session cache), bind/ (one binder per region), localizer.rs
//! (switch protocol), popup.rs, carousel.rs, chrome.rs, debounce.rs,
//! dispatch.rs (events → commands), site.rs (composition).

pub mod bind;
pub mod cache;
pub mod carousel;
pub mod chrome;
pub mod config;
pub mod debounce;
pub mod dictionary;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod locale;
pub mod localizer;
pub mod markup;
pub mod popup;
pub mod site;

pub use bind::{RebindReport, Section, SectionOutcome};
pub use cache::{LocaleCache, LocaleSource};
pub use carousel::{CarouselKind, CarouselOptions, CarouselPlan};
pub use config::SiteConfig;
pub use dictionary::LocaleDictionary;
pub use dispatch::{Command, Dispatcher, InputEvent};
pub use dom::{Element, PageHost};
pub use error::{ConfigError, FetchError, FetchResult};
pub use locale::{DEFAULT_LOCALE, LocaleCode};
pub use localizer::{ContentLocalizer, SwitchOutcome, UiState};
pub use popup::{PopupController, PopupId, PopupState};
pub use site::Site;
