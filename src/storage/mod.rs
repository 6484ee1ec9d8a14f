//! Storage module for the board document and configuration.

pub mod config;
pub mod kv;
pub mod store;

pub use config::{AppConfig, ClubSettings, ConfigError, UiSettings, WindowSettings};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use store::{DocumentStore, PersistentStore, STORAGE_KEY};
