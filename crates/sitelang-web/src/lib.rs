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
//! Browser entry point for the bilingual site.
//! Binds the DOM-free core to the live document: HTTP dictionary source, Swiper
//! bridge, event listeners and console logging.
//! Layout: bootstrap.rs (page config, click targets), swiper.rs (widget calls),
//! layout.rs (CSS lengths), plus wasm-only dom.rs, host.rs, source.rs and app.rs.

pub mod bootstrap;
pub mod layout;
pub mod swiper;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod source;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
