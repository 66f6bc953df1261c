//! In-memory settings store for tests and offline flows.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use magidesk_settings::SettingsPayload;

use crate::api::SettingsApi;

/// Settings backend held entirely in memory.
///
/// Load of an unseeded category yields that category's default payload, the
/// same contract the HTTP backend honours for unknown documents.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    documents: RwLock<HashMap<String, SettingsPayload>>,
    fail_next_load: AtomicBool,
    fail_next_save: AtomicBool,
    decline_next_save: AtomicBool,
}

impl InMemorySettingsStore {
    /// Construct an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a payload, keyed by its category.
    #[must_use]
    pub fn with_payload(mut self, payload: SettingsPayload) -> Self {
        self.documents
            .get_mut()
            .insert(payload.category_key().to_string(), payload);
        self
    }

    /// Make the next load fail as if the backend were unreachable.
    pub fn fail_next_load(&self) {
        self.fail_next_load.store(true, Ordering::SeqCst);
    }

    /// Make the next save fail as if the backend were unreachable.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// Make the next save report a clean backend rejection.
    pub fn decline_next_save(&self) {
        self.decline_next_save.store(true, Ordering::SeqCst);
    }

    /// Read back the stored payload for a category key, if any.
    pub async fn stored(&self, category_key: &str) -> Option<SettingsPayload> {
        self.documents.read().await.get(category_key).cloned()
    }
}

#[async_trait]
impl SettingsApi for InMemorySettingsStore {
    async fn load_settings(&self, category_key: &str) -> Result<SettingsPayload> {
        if self.fail_next_load.swap(false, Ordering::SeqCst) {
            return Err(anyhow!("settings backend unavailable"));
        }
        let key = category_key.trim().to_ascii_lowercase();
        let documents = self.documents.read().await;
        let payload = documents
            .get(&key)
            .cloned()
            .unwrap_or_else(|| SettingsPayload::default_for(&key));
        Ok(payload)
    }

    async fn save_settings(&self, payload: &SettingsPayload) -> Result<bool> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(anyhow!("settings backend unavailable"));
        }
        if self.decline_next_save.swap(false, Ordering::SeqCst) {
            return Ok(false);
        }

        let key = payload.category_key().to_string();
        debug!(category = %key, "storing settings document in memory");
        self.documents.write().await.insert(key, payload.clone());
        Ok(true)
    }
}
