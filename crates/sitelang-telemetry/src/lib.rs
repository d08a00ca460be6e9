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

//! Telemetry primitives shared across the sitelang workspace.
//!
//! Centralises logging setup so the core crate only emits `tracing` events and
//! the entry point decides where they go.
//! Layout: init.rs (subscriber setup), console.rs (browser console writer).

pub mod console;
pub mod init;

pub use console::{ConsoleMakeWriter, ConsoleMethod, ConsoleWriter};
pub use init::{
    DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, app_span, build_sha, init_logging,
};
