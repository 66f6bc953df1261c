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

//! Code-behind layer for the MagiDesk settings surface.
//!
//! Layout: `controls.rs` (form-control state holders), `subpage.rs` (the
//! `SettingsSubPage` contract and category resolution), `pages/` (one
//! implementation per settings category plus the generic fallback),
//! `dialog.rs` (modal confirmation surface), `host.rs` (load/save/reset
//! orchestration against the settings backend).

pub mod controls;
pub mod dialog;
pub mod host;
pub mod pages;
pub mod subpage;

pub use controls::{NumberField, TextField, TimeField, ToggleField};
pub use dialog::DialogSurface;
pub use host::{OpenCategory, SaveOutcome, SettingsHost};
pub use pages::{
    BaseSettingsPage, GeneralSettingsPage, InventorySettingsPage, PaymentsSettingsPage,
    PosSection, PosSettingsPage, SecuritySettingsPage, TaxRateRow,
};
pub use subpage::{SettingsSubPage, resolve_sub_page};
