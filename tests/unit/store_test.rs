//! Unit tests for loading and saving the board document.

use clubboard::board::{add_entry, Document, MemberEntry, NewsEntry, TrainingEntry};
use clubboard::storage::{DocumentStore, MemoryKeyValueStore, PersistentStore, STORAGE_KEY};
use serde_json::json;

fn sample_document() -> Document {
    Document {
        trainings: add_entry::<TrainingEntry>(&[], "Futsal – Mandag kl 18").unwrap(),
        members: add_entry(&add_entry::<MemberEntry>(&[], "Kari").unwrap(), "Ola").unwrap(),
        news: add_entry::<NewsEntry>(&[], "New kits have arrived").unwrap(),
    }
}

fn store_with(raw: &str) -> PersistentStore<MemoryKeyValueStore> {
    PersistentStore::new(MemoryKeyValueStore::with_value(STORAGE_KEY, raw))
}

#[test]
fn test_round_trip_preserves_document() {
    let document = sample_document();
    let mut store = PersistentStore::new(MemoryKeyValueStore::new());

    store.save(&document).unwrap();
    assert_eq!(store.load(document.clone()), document);
    assert_eq!(store.load(Document::default()), document);
}

#[test]
fn test_round_trip_of_empty_document() {
    let mut store = PersistentStore::new(MemoryKeyValueStore::new());
    store.save(&Document::default()).unwrap();
    assert_eq!(store.load(sample_document()), Document::default());
}

#[test]
fn test_invalid_json_returns_defaults() {
    for raw in ["{not json", "", "undefined", "[1, 2"] {
        assert_eq!(store_with(raw).load(Document::default()), Document::default());
    }
}

#[test]
fn test_non_object_json_returns_defaults() {
    let defaults = sample_document();
    for raw in ["null", "42", "\"text\"", "[]"] {
        assert_eq!(store_with(raw).load(defaults.clone()), defaults);
    }
}

#[test]
fn test_missing_fields_fall_back_individually() {
    let saved = sample_document();
    let raw = json!({ "members": saved.members }).to_string();

    let loaded = store_with(&raw).load(Document::default());
    assert_eq!(loaded.members, saved.members);
    assert!(loaded.trainings.is_empty());
    assert!(loaded.news.is_empty());
}

#[test]
fn test_malformed_field_falls_back_individually() {
    let saved = sample_document();
    let raw = json!({
        "trainings": saved.trainings,
        "members": { "oops": true },
        "news": [{ "text": "missing id and timestamp" }],
    })
    .to_string();

    let loaded = store_with(&raw).load(Document::default());
    assert_eq!(loaded.trainings, saved.trainings);
    assert!(loaded.members.is_empty());
    assert!(loaded.news.is_empty());
}

#[test]
fn test_stored_json_uses_camel_case_fields() {
    let mut store = PersistentStore::new(MemoryKeyValueStore::new());
    store.save(&sample_document()).unwrap();

    let raw = store.backend().raw(STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 3);
    assert!(value["trainings"][0].get("createdAt").is_some());
    assert!(value["members"][0].get("joinedAt").is_some());
    assert!(value["news"][0].get("createdAt").is_some());
}

#[test]
fn test_duplicate_ids_loaded_once() {
    let saved = sample_document();
    let training = &saved.trainings[0];
    let raw = json!({ "trainings": [training, training] }).to_string();

    let loaded = store_with(&raw).load(Document::default());
    assert_eq!(loaded.trainings, saved.trainings);
    assert!(clubboard::board::remove_entry(&loaded.trainings, training.id).is_empty());
}
