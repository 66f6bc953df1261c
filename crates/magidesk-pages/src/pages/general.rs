//! General settings sub-page.

use tracing::debug;

use magidesk_settings::{GeneralSettings, SettingsCategory, SettingsPayload, ThemeMode};

use crate::controls::{NumberField, TextField, ToggleField};
use crate::subpage::SettingsSubPage;

/// Sub-page binding the general business preferences.
#[derive(Debug, Default)]
pub struct GeneralSettingsPage {
    settings: GeneralSettings,
    sub_section: Option<String>,
    /// Trading name entry.
    pub business_name: TextField,
    /// Locale tag entry.
    pub locale: TextField,
    /// Theme selector (`light`, `dark`, `system`).
    pub theme: TextField,
    /// Automatic receipt printing toggle.
    pub auto_print_receipts: ToggleField,
    /// Receipt copy count entry.
    pub receipt_copies: NumberField,
}

impl GeneralSettingsPage {
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
        self.business_name.set_text(&self.settings.business_name);
        self.locale.set_text(&self.settings.locale);
        self.theme.set_text(self.settings.theme.as_str());
        self.auto_print_receipts
            .set(self.settings.auto_print_receipts);
        self.receipt_copies.set_i32(self.settings.receipt_copies);
    }

    /// Copy every control value into a fresh document.
    fn collect(&self) -> GeneralSettings {
        let mut settings = self.settings.clone();
        settings.business_name = self.business_name.text().to_string();
        settings.locale = self.locale.text().to_string();
        settings.theme = ThemeMode::parse(self.theme.text()).unwrap_or(settings.theme);
        settings.auto_print_receipts = self.auto_print_receipts.is_on();
        settings.receipt_copies = self
            .receipt_copies
            .parse_i32()
            .unwrap_or(settings.receipt_copies);
        settings
    }
}

impl SettingsSubPage for GeneralSettingsPage {
    fn category_key(&self) -> &str {
        SettingsCategory::General.as_key()
    }

    fn set_sub_category(&mut self, sub_key: &str) {
        self.sub_section = Some(sub_key.to_string());
    }

    fn set_settings(&mut self, payload: &SettingsPayload) {
        if let SettingsPayload::General(settings) = payload {
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
        SettingsPayload::General(self.collect())
    }
}
