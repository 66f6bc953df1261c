//! Payments settings sub-page.

use tracing::debug;

use magidesk_settings::{PaymentSettings, SettingsCategory, SettingsPayload};

use crate::controls::{NumberField, ToggleField};
use crate::subpage::SettingsSubPage;

/// Sub-page binding the payments behaviour document.
#[derive(Debug, Default)]
pub struct PaymentsSettingsPage {
    settings: PaymentSettings,
    sub_section: Option<String>,
    /// Cash tender toggle.
    pub allow_cash: ToggleField,
    /// Card tender toggle.
    pub allow_card: ToggleField,
    /// Discounts toggle.
    pub discounts_enabled: ToggleField,
    /// Maximum discount percentage entry.
    pub max_discount_percent: NumberField,
    /// Manager approval toggle.
    pub require_manager_approval: ToggleField,
    /// Surcharges toggle.
    pub surcharges_enabled: ToggleField,
    /// Card surcharge percentage entry.
    pub card_surcharge_percent: NumberField,
    /// Split payments toggle.
    pub split_enabled: ToggleField,
    /// Maximum split ways entry.
    pub max_split_ways: NumberField,
}

impl PaymentsSettingsPage {
    /// Construct the page showing default values.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self::default();
        page.load();
        page
    }

    /// Sub-section recorded from navigation, if any.
    #[must_use]
    pub fn sub_section(&self) -> Option<&str> {
        self.sub_section.as_deref()
    }

    /// Repaint every bound control from the held document.
    fn load(&mut self) {
        self.allow_cash.set(self.settings.allow_cash);
        self.allow_card.set(self.settings.allow_card);

        self.discounts_enabled.set(self.settings.discounts.enabled);
        self.max_discount_percent
            .set_f64(self.settings.discounts.max_percent);
        self.require_manager_approval
            .set(self.settings.discounts.require_manager_approval);

        self.surcharges_enabled.set(self.settings.surcharges.enabled);
        self.card_surcharge_percent
            .set_f64(self.settings.surcharges.card_percent);

        self.split_enabled.set(self.settings.split_payments.enabled);
        self.max_split_ways
            .set_i32(self.settings.split_payments.max_ways);
    }

    /// Copy every control value into a fresh document.
    fn collect(&self) -> PaymentSettings {
        let mut settings = self.settings.clone();

        settings.allow_cash = self.allow_cash.is_on();
        settings.allow_card = self.allow_card.is_on();

        settings.discounts.enabled = self.discounts_enabled.is_on();
        settings.discounts.max_percent = self
            .max_discount_percent
            .parse_f64()
            .unwrap_or(settings.discounts.max_percent);
        settings.discounts.require_manager_approval = self.require_manager_approval.is_on();

        settings.surcharges.enabled = self.surcharges_enabled.is_on();
        settings.surcharges.card_percent = self
            .card_surcharge_percent
            .parse_f64()
            .unwrap_or(settings.surcharges.card_percent);

        settings.split_payments.enabled = self.split_enabled.is_on();
        settings.split_payments.max_ways = self
            .max_split_ways
            .parse_i32()
            .unwrap_or(settings.split_payments.max_ways);

        settings
    }
}

impl SettingsSubPage for PaymentsSettingsPage {
    fn category_key(&self) -> &str {
        SettingsCategory::Payments.as_key()
    }

    fn set_sub_category(&mut self, sub_key: &str) {
        self.sub_section = Some(sub_key.to_string());
    }

    fn set_settings(&mut self, payload: &SettingsPayload) {
        if let SettingsPayload::Payments(settings) = payload {
            self.settings = settings.clone();
            self.load();
        } else {
            debug!(
                expected = %self.category_key(),
                received = %payload.category_key(),
                "ignoring mismatched settings payload"
            );
        }
    }

    fn current_settings(&self) -> SettingsPayload {
        SettingsPayload::Payments(self.collect())
    }
}
