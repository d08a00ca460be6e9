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

//! Shared test helpers used across integration suites.
//! Layout: dom.rs (in-memory element tree), mocks.rs (scripted source and
//! host), fixtures.rs (dictionaries and page markup).

pub mod dom;
pub mod fixtures;
pub mod mocks;

pub use dom::FakeElement;
pub use mocks::{FakeHost, ScriptedSource};
