//! Inventory settings sub-page.

use tracing::debug;

use magidesk_settings::{InventorySettings, SettingsCategory, SettingsPayload};

use crate::controls::{NumberField, TextField, ToggleField};
use crate::subpage::SettingsSubPage;

/// Sub-page binding the inventory behaviour document.
#[derive(Debug, Default)]
pub struct InventorySettingsPage {
    settings: InventorySettings,
    sub_section: Option<String>,
    /// Automatic reorder toggle.
    ///
    /// The document field is nullable; an absent value displays as off and
    /// collects back as an explicit `false`.
    pub auto_reorder: ToggleField,
    /// Reorder threshold entry.
    pub reorder_threshold: NumberField,
    /// Default vendor entry.
    pub default_vendor: TextField,
    /// Stock tracking toggle.
    pub track_stock: ToggleField,
}

impl InventorySettingsPage {
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
        self.auto_reorder
            .set(self.settings.auto_reorder.unwrap_or(false));
        self.reorder_threshold
            .set_i32(self.settings.reorder_threshold);
        self.default_vendor.set_text(&self.settings.default_vendor);
        self.track_stock.set(self.settings.track_stock);
    }

    /// Copy every control value into a fresh document.
    fn collect(&self) -> InventorySettings {
        let mut settings = self.settings.clone();
        settings.auto_reorder = Some(self.auto_reorder.is_on());
        settings.reorder_threshold = self
            .reorder_threshold
            .parse_i32()
            .unwrap_or(settings.reorder_threshold);
        settings.default_vendor = self.default_vendor.text().to_string();
        settings.track_stock = self.track_stock.is_on();
        settings
    }
}

impl SettingsSubPage for InventorySettingsPage {
    fn category_key(&self) -> &str {
        SettingsCategory::Inventory.as_key()
    }

    fn set_sub_category(&mut self, sub_key: &str) {
        self.sub_section = Some(sub_key.to_string());
    }

    fn set_settings(&mut self, payload: &SettingsPayload) {
        if let SettingsPayload::Inventory(settings) = payload {
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
        SettingsPayload::Inventory(self.collect())
    }
}
