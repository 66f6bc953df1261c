#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared fixtures and test doubles for the MagiDesk crates.

pub mod dialogs;
pub mod fixtures;
pub mod telemetry;

pub use dialogs::{DialogEvent, ScriptedDialogs};
pub use telemetry::init_test_logging;
