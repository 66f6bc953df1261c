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

//! Settings retrieval service consumed by the MagiDesk settings pages.
//!
//! Layout: `api.rs` (the `SettingsApi` trait the pages program against),
//! `http.rs` (reqwest-backed client for the settings backend), `memory.rs`
//! (in-memory store used by tests and offline flows).

pub mod api;
pub mod http;
pub mod memory;

pub use api::SettingsApi;
pub use http::{HttpSettingsClient, ProblemDetails};
pub use memory::InMemorySettingsStore;
