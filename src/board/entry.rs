//! Entry kinds recorded by the club board.
//!
//! Each kind is a plain record (id, primary text, timestamp). The [`Entry`]
//! trait is the kind descriptor the generic list view and the shell work
//! against, so the three collections share one implementation.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::Document;

/// Label strings shown by a list view for one entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindLabels {
    /// Heading above the list
    pub heading: &'static str,
    /// Placeholder text in the add-form input
    pub input_hint: &'static str,
    /// Submit button text
    pub submit: &'static str,
    /// Bold line shown when the collection is empty
    pub empty_title: &'static str,
    /// Hint under the empty title pointing at the add-form
    pub empty_prompt: &'static str,
    /// Caption in front of the entry timestamp
    pub timestamp_caption: &'static str,
}

/// A record in one of the document's collections.
pub trait Entry: Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    /// JSON field of the document holding this kind's collection.
    const FIELD: &'static str;

    /// UI copy for this kind.
    const LABELS: KindLabels;

    /// Build a new entry. `text` is expected to be trimmed and non-empty.
    fn create(id: Uuid, text: String, timestamp: DateTime<Utc>) -> Self;

    fn id(&self) -> Uuid;

    /// The primary free-text field (text or name).
    fn text(&self) -> &str;

    /// Creation or join time.
    fn timestamp(&self) -> DateTime<Utc>;

    /// This kind's collection inside a document.
    fn collection(document: &Document) -> &Vec<Self>;

    fn collection_mut(document: &mut Document) -> &mut Vec<Self>;
}

/// A scheduled training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEntry {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Entry for TrainingEntry {
    const FIELD: &'static str = "trainings";

    const LABELS: KindLabels = KindLabels {
        heading: "Trainings",
        input_hint: "e.g. Futsal - Monday 18:00",
        submit: "Add training",
        empty_title: "No trainings yet",
        empty_prompt: "Add the club's training sessions above 👆",
        timestamp_caption: "Added",
    };

    fn create(id: Uuid, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            created_at: timestamp,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection(document: &Document) -> &Vec<Self> {
        &document.trainings
    }

    fn collection_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.trainings
    }
}

/// A club member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEntry {
    pub id: Uuid,
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

impl Entry for MemberEntry {
    const FIELD: &'static str = "members";

    const LABELS: KindLabels = KindLabels {
        heading: "Members",
        input_hint: "Member name",
        submit: "Add member",
        empty_title: "No members yet",
        empty_prompt: "Register the club's members above 👆",
        timestamp_caption: "Joined",
    };

    fn create(id: Uuid, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            name: text,
            joined_at: timestamp,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn text(&self) -> &str {
        &self.name
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.joined_at
    }

    fn collection(document: &Document) -> &Vec<Self> {
        &document.members
    }

    fn collection_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.members
    }
}

/// A news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEntry {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Entry for NewsEntry {
    const FIELD: &'static str = "news";

    const LABELS: KindLabels = KindLabels {
        heading: "News",
        input_hint: "Write a news post",
        submit: "Publish",
        empty_title: "No news yet",
        empty_prompt: "Publish the club's updates above 👆",
        timestamp_caption: "Posted",
    };

    fn create(id: Uuid, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            created_at: timestamp,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection(document: &Document) -> &Vec<Self> {
        &document.news
    }

    fn collection_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.news
    }
}
