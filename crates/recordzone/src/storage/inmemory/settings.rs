//! In-memory settings store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use recordzone_core::storage::{Result, SettingsStore};

/// In-memory settings store.
///
/// Clones share the same map, so two clients built from clones of one store
/// see each other's flags, like two processes sharing a settings file.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    flags: Arc<RwLock<HashMap<String, bool>>>,
}

impl InMemorySettingsStore {
    /// Creates an empty settings store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_flag(&self, key: &str) -> Result<bool> {
        let flags = self.flags.read().await;
        Ok(flags.get(key).copied().unwrap_or(false))
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        let mut flags = self.flags.write().await;
        flags.insert(key.to_string(), value);
        Ok(())
    }
}
