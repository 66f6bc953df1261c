//! Settings host orchestration.
//!
//! # Design
//! - The host owns the flows the sub-pages stay out of: fetching documents,
//!   confirmation prompts, validation, persistence.
//! - Backend failures surface as dialogs; the page keeps its last-known-good
//!   values either way.
//! - Saves are serialised by an explicit gate; a save arriving while another
//!   is in flight reports [`SaveOutcome::Busy`] instead of racing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use magidesk_client::SettingsApi;
use magidesk_settings::{CategoryDescriptor, describe, split_sub_key, validate_payload};

use crate::dialog::DialogSurface;
use crate::subpage::{SettingsSubPage, resolve_sub_page};

/// Result of a save flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Document persisted (or acknowledged by a placeholder page).
    Saved,
    /// Operator declined the confirmation prompt.
    Cancelled,
    /// Collected document failed validation; nothing was persisted.
    Invalid,
    /// Backend declined or failed; the page keeps its current values.
    Rejected,
    /// Another save was already in flight.
    Busy,
}

/// A category opened for display: its descriptor and driven sub-page.
pub struct OpenCategory {
    /// Display metadata for the host header.
    pub descriptor: CategoryDescriptor,
    /// The resolved, loaded sub-page.
    pub page: Box<dyn SettingsSubPage>,
    /// Whether the initial load succeeded. On failure the page shows its
    /// defaults and a dialog has already reported the cause.
    pub loaded: bool,
}

/// Drives arbitrary settings sub-pages against the settings backend.
pub struct SettingsHost {
    api: Arc<dyn SettingsApi>,
    dialogs: Arc<dyn DialogSurface>,
    save_gate: AtomicBool,
}

impl SettingsHost {
    /// Construct a host over a settings backend and dialog surface.
    #[must_use]
    pub fn new(api: Arc<dyn SettingsApi>, dialogs: Arc<dyn DialogSurface>) -> Self {
        Self {
            api,
            dialogs,
            save_gate: AtomicBool::new(false),
        }
    }

    /// Open a category (or dotted sub-category) for display.
    ///
    /// Resolution is total: unknown keys land on the fallback page under the
    /// generic descriptor. A failed fetch is reported through the dialog
    /// surface and leaves the page at its defaults.
    pub async fn open(&self, key: &str) -> OpenCategory {
        let (category_key, _) = split_sub_key(key);
        let descriptor = describe(category_key);
        let mut page = resolve_sub_page(key);

        let loaded = match self.api.load_settings(page.category_key()).await {
            Ok(payload) => {
                page.set_settings(&payload);
                true
            }
            Err(err) => {
                warn!(category = %page.category_key(), error = %format!("{err:#}"), "settings load failed");
                self.dialogs
                    .show_error("Load failed", &format!("Could not load settings: {err:#}"))
                    .await;
                false
            }
        };

        OpenCategory {
            descriptor,
            page,
            loaded,
        }
    }

    /// Run the save flow for a displayed page.
    pub async fn save(&self, page: &mut dyn SettingsSubPage) -> SaveOutcome {
        if self.save_gate.swap(true, Ordering::SeqCst) {
            return SaveOutcome::Busy;
        }
        let outcome = self.save_inner(page).await;
        self.save_gate.store(false, Ordering::SeqCst);
        outcome
    }

    async fn save_inner(&self, page: &mut dyn SettingsSubPage) -> SaveOutcome {
        let confirmed = self
            .dialogs
            .confirm("Save settings", "Apply these settings?")
            .await;
        if !confirmed {
            return SaveOutcome::Cancelled;
        }

        if page.is_stub() {
            info!(category = %page.category_key(), "placeholder page acknowledged save without persistence");
            return SaveOutcome::Saved;
        }

        let payload = page.current_settings();
        if let Err(err) = validate_payload(&payload) {
            self.dialogs
                .show_error("Invalid settings", &err.to_string())
                .await;
            return SaveOutcome::Invalid;
        }

        match self.api.save_settings(&payload).await {
            Ok(true) => {
                info!(category = %payload.category_key(), "settings saved");
                SaveOutcome::Saved
            }
            Ok(false) => {
                self.dialogs
                    .show_error(
                        "Save rejected",
                        "The settings service declined the document.",
                    )
                    .await;
                SaveOutcome::Rejected
            }
            Err(err) => {
                warn!(category = %payload.category_key(), error = %format!("{err:#}"), "settings save failed");
                self.dialogs
                    .show_error("Save failed", &format!("Could not save settings: {err:#}"))
                    .await;
                SaveOutcome::Rejected
            }
        }
    }

    /// Run the reset flow: confirm, then reload the page from the backend.
    ///
    /// Returns whether the page was reloaded.
    pub async fn reset(&self, page: &mut dyn SettingsSubPage) -> bool {
        let confirmed = self
            .dialogs
            .confirm("Reset settings", "Discard unsaved changes?")
            .await;
        if !confirmed {
            return false;
        }

        match self.api.load_settings(page.category_key()).await {
            Ok(payload) => {
                page.set_settings(&payload);
                true
            }
            Err(err) => {
                warn!(category = %page.category_key(), error = %format!("{err:#}"), "settings reload failed");
                self.dialogs
                    .show_error("Reset failed", &format!("Could not reload settings: {err:#}"))
                    .await;
                false
            }
        }
    }
}
