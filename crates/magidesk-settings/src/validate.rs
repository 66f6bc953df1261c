//! Pre-persist validation for settings documents.
//!
//! The load/collect cycle on the pages never validates; these checks run in
//! the host's save flow, after collection and before the document is handed
//! to the backend.

use serde_json::Value;

use crate::defaults::{
    MAX_DISCOUNT_PERCENT, MAX_PIN_LENGTH, MAX_RECEIPT_COPIES, MAX_SESSION_TIMEOUT_MINUTES,
    MAX_SPLIT_WAYS, MAX_SURCHARGE_PERCENT, MAX_TAX_RATE_PERCENT, MIN_PIN_LENGTH,
    MIN_RECEIPT_COPIES, MIN_SESSION_TIMEOUT_MINUTES, MIN_SPLIT_WAYS,
};
use crate::error::{SettingsError, SettingsResult};
use crate::model::{
    GeneralSettings, InventorySettings, PaymentSettings, PosSettings, SecuritySettings,
    SettingsPayload,
};

fn invalid(section: &str, field: &str, message: impl Into<String>) -> SettingsError {
    SettingsError::InvalidField {
        section: section.to_string(),
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a collected payload before it is persisted.
///
/// # Errors
///
/// Returns the first [`SettingsError::InvalidField`] encountered.
pub fn validate_payload(payload: &SettingsPayload) -> SettingsResult<()> {
    match payload {
        SettingsPayload::General(settings) => validate_general(settings),
        SettingsPayload::Pos(settings) => validate_pos(settings),
        SettingsPayload::Payments(settings) => validate_payments(settings),
        SettingsPayload::Security(settings) => validate_security(settings),
        SettingsPayload::Inventory(settings) => validate_inventory(settings),
        SettingsPayload::Opaque { document, .. } => {
            if matches!(document, Value::Object(_)) {
                Ok(())
            } else {
                Err(invalid(
                    payload.category_key(),
                    "document",
                    "must be a JSON object",
                ))
            }
        }
    }
}

/// Validate the general settings document.
///
/// # Errors
///
/// Returns an error when the receipt copy count is outside its range.
pub fn validate_general(settings: &GeneralSettings) -> SettingsResult<()> {
    if !(MIN_RECEIPT_COPIES..=MAX_RECEIPT_COPIES).contains(&settings.receipt_copies) {
        return Err(invalid(
            "general",
            "receipt_copies",
            format!("must be between {MIN_RECEIPT_COPIES} and {MAX_RECEIPT_COPIES}"),
        ));
    }
    Ok(())
}

/// Validate the point-of-sale settings document.
///
/// # Errors
///
/// Returns an error for negative amounts or a malformed tax rate table.
pub fn validate_pos(settings: &PosSettings) -> SettingsResult<()> {
    if settings.cash_drawer.max_float < 0.0 {
        return Err(invalid("pos", "cash_drawer.max_float", "must not be negative"));
    }
    if settings.table_layout.table_count < 0 {
        return Err(invalid(
            "pos",
            "table_layout.table_count",
            "must not be negative",
        ));
    }
    let mut defaults = 0;
    for (index, rate) in settings.tax.rates.iter().enumerate() {
        let field = format!("tax.rates[{index}]");
        if rate.name.trim().is_empty() {
            return Err(invalid("pos", &field, "name must not be empty"));
        }
        if !(0.0..=MAX_TAX_RATE_PERCENT).contains(&rate.rate) {
            return Err(invalid(
                "pos",
                &field,
                format!("rate must be between 0 and {MAX_TAX_RATE_PERCENT}"),
            ));
        }
        if rate.is_default {
            defaults += 1;
        }
    }
    if defaults > 1 {
        return Err(invalid(
            "pos",
            "tax.rates",
            "at most one rate may be the default",
        ));
    }
    Ok(())
}

/// Validate the payments settings document.
///
/// # Errors
///
/// Returns an error for out-of-range percentages or split counts.
pub fn validate_payments(settings: &PaymentSettings) -> SettingsResult<()> {
    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&settings.discounts.max_percent) {
        return Err(invalid(
            "payments",
            "discounts.max_percent",
            format!("must be between 0 and {MAX_DISCOUNT_PERCENT}"),
        ));
    }
    if !(0.0..=MAX_SURCHARGE_PERCENT).contains(&settings.surcharges.card_percent) {
        return Err(invalid(
            "payments",
            "surcharges.card_percent",
            format!("must be between 0 and {MAX_SURCHARGE_PERCENT}"),
        ));
    }
    if settings.split_payments.enabled
        && !(MIN_SPLIT_WAYS..=MAX_SPLIT_WAYS).contains(&settings.split_payments.max_ways)
    {
        return Err(invalid(
            "payments",
            "split_payments.max_ways",
            format!("must be between {MIN_SPLIT_WAYS} and {MAX_SPLIT_WAYS}"),
        ));
    }
    Ok(())
}

/// Validate the security settings document.
///
/// # Errors
///
/// Returns an error for out-of-range timeouts or PIN lengths.
pub fn validate_security(settings: &SecuritySettings) -> SettingsResult<()> {
    if !(MIN_SESSION_TIMEOUT_MINUTES..=MAX_SESSION_TIMEOUT_MINUTES)
        .contains(&settings.session_timeout_minutes)
    {
        return Err(invalid(
            "security",
            "session_timeout_minutes",
            format!("must be between {MIN_SESSION_TIMEOUT_MINUTES} and {MAX_SESSION_TIMEOUT_MINUTES}"),
        ));
    }
    if !(MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&settings.min_pin_length) {
        return Err(invalid(
            "security",
            "min_pin_length",
            format!("must be between {MIN_PIN_LENGTH} and {MAX_PIN_LENGTH}"),
        ));
    }
    Ok(())
}

/// Validate the inventory settings document.
///
/// # Errors
///
/// Returns an error for a negative reorder threshold.
pub fn validate_inventory(settings: &InventorySettings) -> SettingsResult<()> {
    if settings.reorder_threshold < 0 {
        return Err(invalid(
            "inventory",
            "reorder_threshold",
            "must not be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaxRate;
    use serde_json::json;

    #[test]
    fn default_documents_validate() {
        for key in ["general", "pos", "payments", "security", "inventory"] {
            let payload = SettingsPayload::default_for(key);
            assert!(validate_payload(&payload).is_ok(), "category {key}");
        }
    }

    #[test]
    fn rejects_out_of_range_receipt_copies() {
        let settings = GeneralSettings {
            receipt_copies: 0,
            ..GeneralSettings::default()
        };
        let err = validate_general(&settings).unwrap_err();
        assert!(err.to_string().contains("receipt_copies"));
    }

    #[test]
    fn rejects_second_default_tax_rate() {
        let mut settings = PosSettings::default();
        settings.tax.rates = vec![
            TaxRate {
                name: "GST".to_string(),
                rate: 5.0,
                is_default: true,
            },
            TaxRate {
                name: "PST".to_string(),
                rate: 7.0,
                is_default: true,
            },
        ];
        let err = validate_pos(&settings).unwrap_err();
        assert!(err.to_string().contains("at most one rate"));
    }

    #[test]
    fn rejects_unnamed_and_oversized_tax_rates() {
        let mut settings = PosSettings::default();
        settings.tax.rates = vec![TaxRate {
            name: "  ".to_string(),
            rate: 5.0,
            is_default: false,
        }];
        assert!(validate_pos(&settings).is_err());

        settings.tax.rates = vec![TaxRate {
            name: "GST".to_string(),
            rate: 120.0,
            is_default: false,
        }];
        assert!(validate_pos(&settings).is_err());
    }

    #[test]
    fn split_ways_checked_only_when_enabled() {
        let mut settings = PaymentSettings::default();
        settings.split_payments.enabled = false;
        settings.split_payments.max_ways = 0;
        assert!(validate_payments(&settings).is_ok());

        settings.split_payments.enabled = true;
        assert!(validate_payments(&settings).is_err());
        settings.split_payments.max_ways = 4;
        assert!(validate_payments(&settings).is_ok());
    }

    #[test]
    fn security_bounds_are_enforced() {
        let settings = SecuritySettings {
            session_timeout_minutes: 30,
            require_pin_on_void: true,
            min_pin_length: 4,
            lock_on_idle: true,
        };
        assert!(validate_security(&settings).is_ok());

        let mut out_of_range = settings.clone();
        out_of_range.session_timeout_minutes = 0;
        assert!(validate_security(&out_of_range).is_err());

        out_of_range = settings;
        out_of_range.min_pin_length = 2;
        assert!(validate_security(&out_of_range).is_err());
    }

    #[test]
    fn opaque_documents_must_be_objects() {
        let payload = SettingsPayload::Opaque {
            category_key: "printers".to_string(),
            document: json!(["not", "an", "object"]),
        };
        assert!(validate_payload(&payload).is_err());

        let payload = SettingsPayload::Opaque {
            category_key: "printers".to_string(),
            document: json!({}),
        };
        assert!(validate_payload(&payload).is_ok());
    }
}
