//! Pure operations on an entry collection.
//!
//! Collections are never edited in place: every operation returns the
//! replacement list, which the shell stores and persists.

use chrono::Utc;
use uuid::Uuid;

use super::entry::Entry;

/// Generate an id not used by any entry in `existing`.
pub fn generate_id<E: Entry>(existing: &[E]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !existing.iter().any(|entry| entry.id() == id) {
            return id;
        }
    }
}

/// Prepend a new entry built from `draft`.
///
/// Returns `None` when the trimmed draft is empty, leaving the collection
/// untouched.
pub fn add_entry<E: Entry>(collection: &[E], draft: &str) -> Option<Vec<E>> {
    let text = draft.trim();
    if text.is_empty() {
        return None;
    }

    let entry = E::create(generate_id(collection), text.to_string(), Utc::now());

    let mut updated = Vec::with_capacity(collection.len() + 1);
    updated.push(entry);
    updated.extend_from_slice(collection);
    Some(updated)
}

/// Every entry whose id is not `id`. Unknown ids leave the list as it was.
pub fn remove_entry<E: Entry>(collection: &[E], id: Uuid) -> Vec<E> {
    collection
        .iter()
        .filter(|entry| entry.id() != id)
        .cloned()
        .collect()
}
