//! Key-value storage abstraction and typed JSON helpers.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::types::StorageKey;
use platelog_core::Result;

/// Durable string key-value storage. Values are JSON text.
///
/// `set` must be durable when it returns; callers never batch writes.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load and decode a stored collection.
///
/// Missing keys yield `None`. A value that no longer parses is logged and
/// treated as missing so a corrupt record never blocks the rest of the app.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: StorageKey) -> Result<Option<T>> {
    let raw = match store.get(key.as_str())? {
        Some(raw) => raw,
        None => return Ok(None),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Discarding unreadable value under {}: {}", key, e);
            Ok(None)
        }
    }
}

/// Encode and store a collection.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: StorageKey, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key.as_str(), &raw)
}
