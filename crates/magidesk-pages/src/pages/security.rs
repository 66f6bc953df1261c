//! Security settings sub-page.

use tracing::debug;

use magidesk_settings::{SecuritySettings, SettingsCategory, SettingsPayload};

use crate::controls::{NumberField, ToggleField};
use crate::subpage::SettingsSubPage;

/// Sub-page binding the security behaviour document.
#[derive(Debug, Default)]
pub struct SecuritySettingsPage {
    settings: SecuritySettings,
    sub_section: Option<String>,
    /// Idle session timeout entry, in minutes.
    pub session_timeout_minutes: NumberField,
    /// Void PIN requirement toggle.
    pub require_pin_on_void: ToggleField,
    /// Minimum PIN length entry.
    pub min_pin_length: NumberField,
    /// Idle lock toggle.
    pub lock_on_idle: ToggleField,
}

impl SecuritySettingsPage {
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
        self.session_timeout_minutes
            .set_i32(self.settings.session_timeout_minutes);
        self.require_pin_on_void
            .set(self.settings.require_pin_on_void);
        self.min_pin_length.set_i32(self.settings.min_pin_length);
        self.lock_on_idle.set(self.settings.lock_on_idle);
    }

    /// Copy every control value into a fresh document.
    fn collect(&self) -> SecuritySettings {
        let mut settings = self.settings.clone();
        settings.session_timeout_minutes = self
            .session_timeout_minutes
            .parse_i32()
            .unwrap_or(settings.session_timeout_minutes);
        settings.require_pin_on_void = self.require_pin_on_void.is_on();
        settings.min_pin_length = self
            .min_pin_length
            .parse_i32()
            .unwrap_or(settings.min_pin_length);
        settings.lock_on_idle = self.lock_on_idle.is_on();
        settings
    }
}

impl SettingsSubPage for SecuritySettingsPage {
    fn category_key(&self) -> &str {
        SettingsCategory::Security.as_key()
    }

    fn set_sub_category(&mut self, sub_key: &str) {
        self.sub_section = Some(sub_key.to_string());
    }

    fn set_settings(&mut self, payload: &SettingsPayload) {
        if let SettingsPayload::Security(settings) = payload {
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
        SettingsPayload::Security(self.collect())
    }
}
