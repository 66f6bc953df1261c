//! Abstraction over settings backends used by the settings host.

use anyhow::Result;
use async_trait::async_trait;

use magidesk_settings::SettingsPayload;

/// Abstraction over the settings backend consumed by the settings host.
///
/// Implementations own transport and persistence; callers only see typed
/// payloads keyed by category.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Fetch the current settings document for a category key.
    ///
    /// Unknown-but-valid keys resolve to an opaque payload with an empty
    /// document rather than an error.
    async fn load_settings(&self, category_key: &str) -> Result<SettingsPayload>;

    /// Persist a settings document.
    ///
    /// Returns `Ok(false)` when the backend rejects the document cleanly
    /// (for example a revision conflict); transport failures are errors.
    async fn save_settings(&self, payload: &SettingsPayload) -> Result<bool>;
}
