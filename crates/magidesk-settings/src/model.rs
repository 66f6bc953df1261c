//! Per-category settings documents and change payloads.
//!
//! # Design
//! - Pure data carriers moved between the settings backend and the sub-pages.
//! - Each document is independently owned; nothing is shared across
//!   categories.
//! - `Default` impls encode the values a freshly constructed page displays
//!   before anything is loaded.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::SettingsCategory;

/// Visual theme preference for the client shell.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Render the mode as its lowercase wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a wire representation, ignoring case and whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Parse a wire representation, falling back to [`Self::System`].
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

/// General business and storefront preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Trading name printed on receipts and shown in the shell header.
    pub business_name: String,
    /// BCP 47 locale tag used for formatting (e.g. `es-MX`).
    pub locale: String,
    /// Visual theme preference.
    pub theme: ThemeMode,
    /// Whether a receipt is printed automatically after each sale.
    pub auto_print_receipts: bool,
    /// Number of receipt copies produced per print job.
    pub receipt_copies: i32,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            locale: String::new(),
            theme: ThemeMode::default(),
            auto_print_receipts: false,
            receipt_copies: 1,
        }
    }
}

/// Cash drawer behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CashDrawerSettings {
    /// Pop the drawer automatically when a cash sale completes.
    pub open_on_sale: bool,
    /// Require the operator to record a reason for no-sale opens.
    pub require_reason_on_open: bool,
    /// Maximum float amount kept in the drawer between counts.
    pub max_float: f64,
}

/// Dining table layout behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableLayoutSettings {
    /// Whether table service is enabled at all.
    pub enabled: bool,
    /// Area preselected when the table map opens.
    pub default_area: String,
    /// Number of tables rendered on the map.
    pub table_count: i32,
}

/// Shift scheduling behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShiftSettings {
    /// Require operators to clock in before taking orders.
    pub enforce_clock_in: bool,
    /// Time of day the first shift opens.
    pub opens_at: NaiveTime,
    /// Time of day the last shift closes.
    pub closes_at: NaiveTime,
}

impl Default for ShiftSettings {
    fn default() -> Self {
        Self {
            enforce_clock_in: false,
            opens_at: NaiveTime::MIN,
            closes_at: NaiveTime::MIN,
        }
    }
}

/// A named tax rate applied to sales.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaxRate {
    /// Display name (e.g. `GST`).
    pub name: String,
    /// Percentage rate applied to the taxable subtotal.
    pub rate: f64,
    /// Whether this rate is preselected for new items.
    pub is_default: bool,
}

/// Tax behaviour, including the ordered rate table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaxSettings {
    /// Whether listed prices already include tax.
    pub prices_include_tax: bool,
    /// Tax rates in display order; the default entry carries `is_default`.
    pub rates: Vec<TaxRate>,
}

/// Point-of-sale behaviour document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PosSettings {
    /// Cash drawer behaviour.
    pub cash_drawer: CashDrawerSettings,
    /// Dining table layout behaviour.
    pub table_layout: TableLayoutSettings,
    /// Shift scheduling behaviour.
    pub shifts: ShiftSettings,
    /// Tax behaviour.
    pub tax: TaxSettings,
}

/// Discount policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiscountSettings {
    /// Whether line or ticket discounts may be applied.
    pub enabled: bool,
    /// Largest discount an operator may apply, as a percentage.
    pub max_percent: f64,
    /// Require a manager PIN above the operator threshold.
    pub require_manager_approval: bool,
}

/// Surcharge policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurchargeSettings {
    /// Whether surcharges may be applied.
    pub enabled: bool,
    /// Percentage added to card tenders.
    pub card_percent: f64,
}

/// Split payment policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SplitPaymentSettings {
    /// Whether a ticket may be settled across multiple tenders.
    pub enabled: bool,
    /// Maximum number of tenders a ticket may be split across.
    pub max_ways: i32,
}

/// Payments behaviour document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaymentSettings {
    /// Accept cash tenders.
    pub allow_cash: bool,
    /// Accept card tenders.
    pub allow_card: bool,
    /// Discount policy.
    pub discounts: DiscountSettings,
    /// Surcharge policy.
    pub surcharges: SurchargeSettings,
    /// Split payment policy.
    pub split_payments: SplitPaymentSettings,
}

/// Security behaviour document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SecuritySettings {
    /// Idle minutes before an operator session is closed.
    pub session_timeout_minutes: i32,
    /// Require a PIN to void a line or ticket.
    pub require_pin_on_void: bool,
    /// Minimum operator PIN length.
    pub min_pin_length: i32,
    /// Lock the register when the idle timeout fires.
    pub lock_on_idle: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            session_timeout_minutes: 15,
            require_pin_on_void: false,
            min_pin_length: 4,
            lock_on_idle: false,
        }
    }
}

/// Inventory behaviour document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InventorySettings {
    /// Automatically raise purchase orders at the reorder threshold.
    ///
    /// Nullable on the wire; an absent value displays as disabled and is
    /// persisted back as an explicit `false`.
    pub auto_reorder: Option<bool>,
    /// Stock level at which a reorder is suggested.
    pub reorder_threshold: i32,
    /// Vendor preselected on new purchase orders.
    pub default_vendor: String,
    /// Whether stock levels are tracked at all.
    pub track_stock: bool,
}

/// Settings document routed between the backend and a sub-page.
///
/// The explicit variant per typed category makes the permissive-cast policy
/// of the sub-pages visible: a page matches its own variant and ignores the
/// rest. Categories without a dedicated page travel as raw JSON documents.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsPayload {
    /// General business preferences.
    General(GeneralSettings),
    /// Point-of-sale behaviour.
    Pos(PosSettings),
    /// Payments behaviour.
    Payments(PaymentSettings),
    /// Security behaviour.
    Security(SecuritySettings),
    /// Inventory behaviour.
    Inventory(InventorySettings),
    /// Untyped document for a category without a dedicated page.
    Opaque {
        /// Canonical key of the owning category.
        category_key: String,
        /// Raw JSON document as stored by the backend.
        document: Value,
    },
}

impl SettingsPayload {
    /// Canonical category key used for dispatch and wire routing.
    #[must_use]
    pub fn category_key(&self) -> &str {
        match self {
            Self::General(_) => SettingsCategory::General.as_key(),
            Self::Pos(_) => SettingsCategory::Pos.as_key(),
            Self::Payments(_) => SettingsCategory::Payments.as_key(),
            Self::Security(_) => SettingsCategory::Security.as_key(),
            Self::Inventory(_) => SettingsCategory::Inventory.as_key(),
            Self::Opaque { category_key, .. } => category_key,
        }
    }

    /// Default payload for a category key, used before anything is loaded.
    #[must_use]
    pub fn default_for(category_key: &str) -> Self {
        match SettingsCategory::parse(category_key) {
            Some(SettingsCategory::General) => Self::General(GeneralSettings::default()),
            Some(SettingsCategory::Pos) => Self::Pos(PosSettings::default()),
            Some(SettingsCategory::Payments) => Self::Payments(PaymentSettings::default()),
            Some(SettingsCategory::Security) => Self::Security(SecuritySettings::default()),
            Some(SettingsCategory::Inventory) => Self::Inventory(InventorySettings::default()),
            Some(other) => Self::Opaque {
                category_key: other.as_key().to_string(),
                document: Value::Object(serde_json::Map::new()),
            },
            None => Self::Opaque {
                category_key: category_key.trim().to_ascii_lowercase(),
                document: Value::Object(serde_json::Map::new()),
            },
        }
    }

    /// Serialise the payload into the JSON document sent to the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a typed document cannot be represented as JSON.
    pub fn to_document(&self) -> serde_json::Result<Value> {
        match self {
            Self::General(settings) => serde_json::to_value(settings),
            Self::Pos(settings) => serde_json::to_value(settings),
            Self::Payments(settings) => serde_json::to_value(settings),
            Self::Security(settings) => serde_json::to_value(settings),
            Self::Inventory(settings) => serde_json::to_value(settings),
            Self::Opaque { document, .. } => Ok(document.clone()),
        }
    }

    /// Deserialise a backend document into the payload for a category key.
    ///
    /// Unknown-but-valid keys come back as [`Self::Opaque`]; only malformed
    /// documents for typed categories fail.
    ///
    /// # Errors
    ///
    /// Returns an error when a typed category document does not match its
    /// schema.
    pub fn from_document(category_key: &str, document: Value) -> serde_json::Result<Self> {
        let payload = match SettingsCategory::parse(category_key) {
            Some(SettingsCategory::General) => Self::General(serde_json::from_value(document)?),
            Some(SettingsCategory::Pos) => Self::Pos(serde_json::from_value(document)?),
            Some(SettingsCategory::Payments) => Self::Payments(serde_json::from_value(document)?),
            Some(SettingsCategory::Security) => Self::Security(serde_json::from_value(document)?),
            Some(SettingsCategory::Inventory) => Self::Inventory(serde_json::from_value(document)?),
            Some(other) => Self::Opaque {
                category_key: other.as_key().to_string(),
                document,
            },
            None => Self::Opaque {
                category_key: category_key.trim().to_ascii_lowercase(),
                document,
            },
        };
        Ok(payload)
    }
}
