//! Club board data model and collection operations.

pub mod collection;
pub mod document;
pub mod entry;

pub use collection::{add_entry, generate_id, remove_entry};
pub use document::Document;
pub use entry::{Entry, KindLabels, MemberEntry, NewsEntry, TrainingEntry};
