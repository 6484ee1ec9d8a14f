//! Persistent document store.
//!
//! Loads and saves the whole board under one fixed key. Loading never fails:
//! a missing, unreadable or malformed value falls back to the defaults.

use serde_json::Value;

use super::kv::{KeyValueStore, StorageError};
use crate::board::Document;

/// Fixed key the board document is stored under.
pub const STORAGE_KEY: &str = "clubboard.document";

/// Load/save contract the shell is built on.
pub trait DocumentStore {
    /// Load the stored document merged over `defaults`.
    fn load(&self, defaults: Document) -> Document;

    /// Persist the full document.
    fn save(&mut self, document: &Document) -> Result<(), StorageError>;
}

/// Document store backed by any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct PersistentStore<K> {
    backend: K,
}

impl<K: KeyValueStore> PersistentStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }
}

impl<K: KeyValueStore> DocumentStore for PersistentStore<K> {
    fn load(&self, defaults: Document) -> Document {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored document, starting empty");
                return defaults;
            }
            Err(e) => {
                tracing::warn!("Failed to read stored document, starting empty: {}", e);
                return defaults;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => {
                let document = Document::merged_over(defaults, &value);
                tracing::debug!("Loaded document with {} entries", document.len());
                document
            }
            Err(e) => {
                tracing::warn!("Stored document is not valid JSON, starting empty: {}", e);
                defaults
            }
        }
    }

    fn save(&mut self, document: &Document) -> Result<(), StorageError> {
        let content = serde_json::to_string(document)
            .map_err(|e| StorageError::SerializeError(e.to_string()))?;

        self.backend.set(STORAGE_KEY, &content)?;
        tracing::debug!("Saved document with {} entries", document.len());
        Ok(())
    }
}
