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

//! Typed settings documents for the MagiDesk point-of-sale client.
//!
//! Layout: `category.rs` (category keys and display metadata), `model.rs`
//! (per-category settings documents and the `SettingsPayload` union),
//! `validate.rs` (pre-persist validation helpers), `error.rs` (structured
//! error type shared with the transport layer).

pub mod category;
pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use category::{CategoryDescriptor, SettingsCategory, describe, split_sub_key};
pub use error::{SettingsError, SettingsResult};
pub use model::{
    CashDrawerSettings, DiscountSettings, GeneralSettings, InventorySettings, PaymentSettings,
    PosSettings, SecuritySettings, SettingsPayload, ShiftSettings, SplitPaymentSettings,
    SurchargeSettings, TableLayoutSettings, TaxRate, TaxSettings, ThemeMode,
};
pub use validate::validate_payload;
