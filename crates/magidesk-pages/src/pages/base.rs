//! Generic fallback sub-page for categories without dedicated UI.

use serde_json::Value;
use tracing::debug;

use magidesk_settings::{SettingsPayload, describe};

use crate::subpage::SettingsSubPage;

/// Placeholder page shown for categories that have no dedicated sub-page.
///
/// The page holds the category's raw document untouched so a later save
/// cannot corrupt it; its save and reset flows are explicit stubs.
#[derive(Debug)]
pub struct BaseSettingsPage {
    category_key: String,
    document: Value,
    sub_section: Option<String>,
}

impl BaseSettingsPage {
    /// Construct the fallback page for a category key.
    #[must_use]
    pub fn new(category_key: &str) -> Self {
        Self {
            category_key: category_key.trim().to_ascii_lowercase(),
            document: Value::Object(serde_json::Map::new()),
            sub_section: None,
        }
    }

    /// Static placeholder line rendered in place of real controls.
    #[must_use]
    pub fn placeholder(&self) -> String {
        let descriptor = describe(&self.category_key);
        format!(
            "{} settings are not yet available in this build.",
            descriptor.title
        )
    }

    /// Sub-section recorded from navigation, if any.
    #[must_use]
    pub fn sub_section(&self) -> Option<&str> {
        self.sub_section.as_deref()
    }
}

impl SettingsSubPage for BaseSettingsPage {
    fn category_key(&self) -> &str {
        &self.category_key
    }

    fn set_sub_category(&mut self, sub_key: &str) {
        self.sub_section = Some(sub_key.to_string());
    }

    fn set_settings(&mut self, payload: &SettingsPayload) {
        match payload {
            SettingsPayload::Opaque {
                category_key,
                document,
            } if *category_key == self.category_key => {
                self.document = document.clone();
            }
            other => {
                debug!(
                    expected = %self.category_key,
                    received = %other.category_key(),
                    "ignoring mismatched settings payload"
                );
            }
        }
    }

    fn current_settings(&self) -> SettingsPayload {
        SettingsPayload::Opaque {
            category_key: self.category_key.clone(),
            document: self.document.clone(),
        }
    }

    fn is_stub(&self) -> bool {
        true
    }
}
