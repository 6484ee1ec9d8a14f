//! ClubBoard - training schedules, members and news for a sports club
//!
//! A single-user, offline desktop board. All state is one JSON document kept
//! in a local key-value store; the egui front end lives in the binary.

pub mod board;
pub mod shell;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use board::{Document, Entry, MemberEntry, NewsEntry, TrainingEntry};
pub use shell::{SaveStatus, Shell};
pub use storage::config::AppConfig;
pub use storage::{DocumentStore, FileKeyValueStore, MemoryKeyValueStore, PersistentStore};
pub use ui::screens::View;
