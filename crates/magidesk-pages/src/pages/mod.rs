//! One sub-page per settings category, plus the generic fallback.

mod base;
mod general;
mod inventory;
mod payments;
mod pos;
mod security;

pub use base::BaseSettingsPage;
pub use general::GeneralSettingsPage;
pub use inventory::InventorySettingsPage;
pub use payments::PaymentsSettingsPage;
pub use pos::{PosSection, PosSettingsPage, TaxRateRow};
pub use security::SecuritySettingsPage;
