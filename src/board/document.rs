//! The persisted document: every collection the board keeps.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entry::{Entry, MemberEntry, NewsEntry, TrainingEntry};

/// The whole persisted state of the club board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Training sessions, newest first
    pub trainings: Vec<TrainingEntry>,
    /// Club members, newest first
    pub members: Vec<MemberEntry>,
    /// News posts, newest first
    pub news: Vec<NewsEntry>,
}

impl Document {
    /// Total number of entries across all collections.
    pub fn len(&self) -> usize {
        self.trainings.len() + self.members.len() + self.news.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shallow-merge the top-level fields of `value` over `defaults`.
    ///
    /// A field is taken from `value` only when it is present and parses as a
    /// list of the right entry kind. Anything else keeps the default for that
    /// field, and a non-object `value` yields `defaults` unchanged. Entries
    /// repeating an earlier id in the same list are dropped.
    pub fn merged_over(defaults: Document, value: &Value) -> Document {
        let Some(fields) = value.as_object() else {
            tracing::warn!("Stored document is not a JSON object, using defaults");
            return defaults;
        };

        let mut document = defaults;
        merge_field::<TrainingEntry>(&mut document, fields);
        merge_field::<MemberEntry>(&mut document, fields);
        merge_field::<NewsEntry>(&mut document, fields);
        document
    }
}

fn merge_field<E: Entry>(document: &mut Document, fields: &serde_json::Map<String, Value>) {
    let Some(raw) = fields.get(E::FIELD) else {
        return;
    };

    match serde_json::from_value::<Vec<E>>(raw.clone()) {
        Ok(mut entries) => {
            let mut seen = HashSet::with_capacity(entries.len());
            let before = entries.len();
            entries.retain(|entry| seen.insert(entry.id()));

            if entries.len() < before {
                tracing::warn!(
                    "Dropped {} '{}' entries with duplicate ids from stored document",
                    before - entries.len(),
                    E::FIELD
                );
            }
            *E::collection_mut(document) = entries;
        }
        Err(e) => {
            tracing::warn!("Ignoring malformed '{}' field in stored document: {}", E::FIELD, e);
        }
    }
}
