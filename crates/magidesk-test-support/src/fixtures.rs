//! Populated settings documents used across the test suites.

use chrono::NaiveTime;
use serde_json::{Value, json};

use magidesk_settings::{
    CashDrawerSettings, DiscountSettings, GeneralSettings, InventorySettings, PaymentSettings,
    PosSettings, SecuritySettings, ShiftSettings, SplitPaymentSettings, SurchargeSettings,
    TableLayoutSettings, TaxRate, TaxSettings, ThemeMode,
};

/// A fully populated general settings document.
#[must_use]
pub fn sample_general() -> GeneralSettings {
    GeneralSettings {
        business_name: "La Magia Cantina".to_string(),
        locale: "es-MX".to_string(),
        theme: ThemeMode::Dark,
        auto_print_receipts: true,
        receipt_copies: 2,
    }
}

/// A fully populated POS document with the canonical GST/PST rate table.
#[must_use]
pub fn sample_pos() -> PosSettings {
    PosSettings {
        cash_drawer: CashDrawerSettings {
            open_on_sale: true,
            require_reason_on_open: true,
            max_float: 350.0,
        },
        table_layout: TableLayoutSettings {
            enabled: true,
            default_area: "Terraza".to_string(),
            table_count: 18,
        },
        shifts: ShiftSettings {
            enforce_clock_in: true,
            opens_at: NaiveTime::from_hms_opt(9, 0, 0).expect("valid opening time"),
            closes_at: NaiveTime::from_hms_opt(23, 30, 0).expect("valid closing time"),
        },
        tax: TaxSettings {
            prices_include_tax: false,
            rates: vec![
                TaxRate {
                    name: "GST".to_string(),
                    rate: 5.0,
                    is_default: false,
                },
                TaxRate {
                    name: "PST".to_string(),
                    rate: 7.0,
                    is_default: true,
                },
            ],
        },
    }
}

/// A fully populated payments document.
#[must_use]
pub fn sample_payments() -> PaymentSettings {
    PaymentSettings {
        allow_cash: true,
        allow_card: true,
        discounts: DiscountSettings {
            enabled: true,
            max_percent: 15.0,
            require_manager_approval: true,
        },
        surcharges: SurchargeSettings {
            enabled: true,
            card_percent: 1.8,
        },
        split_payments: SplitPaymentSettings {
            enabled: true,
            max_ways: 4,
        },
    }
}

/// A fully populated security document.
#[must_use]
pub fn sample_security() -> SecuritySettings {
    SecuritySettings {
        session_timeout_minutes: 30,
        require_pin_on_void: true,
        min_pin_length: 6,
        lock_on_idle: true,
    }
}

/// An inventory document with the nullable reorder flag left absent.
#[must_use]
pub fn sample_inventory() -> InventorySettings {
    InventorySettings {
        auto_reorder: None,
        reorder_threshold: 12,
        default_vendor: "Acme Wholesale".to_string(),
        track_stock: true,
    }
}

/// An opaque printers document for fallback-page tests.
#[must_use]
pub fn sample_printers_document() -> Value {
    json!({
        "receipt_printer": "EPSON-TM20",
        "kitchen_printer": "STAR-SP700",
        "cut_after_receipt": true,
    })
}
