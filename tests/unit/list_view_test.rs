//! Unit tests for the generic list view logic.

use clubboard::board::{Entry, MemberEntry, NewsEntry, TrainingEntry};
use clubboard::ui::screens::list_view::{ListAction, ListContent, ListView};

#[test]
fn test_each_kind_has_distinct_copy() {
    let labels = [TrainingEntry::LABELS, MemberEntry::LABELS, NewsEntry::LABELS];
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            assert_ne!(a.empty_title, b.empty_title);
            assert_ne!(a.empty_prompt, b.empty_prompt);
        }
    }

    assert_eq!(TrainingEntry::FIELD, "trainings");
    assert_eq!(MemberEntry::FIELD, "members");
    assert_eq!(NewsEntry::FIELD, "news");
}

#[test]
fn test_submit_then_remove_cycle() {
    let mut view = ListView::<NewsEntry>::new();
    view.set_draft("Annual meeting in March");

    let entries = match view.submit(&[]) {
        Some(ListAction::Added(entries)) => entries,
        other => panic!("expected Added, got {:?}", other),
    };
    assert_eq!(view.draft(), "");

    let id = entries[0].id;
    match view.remove(&entries, id) {
        Some(ListAction::Removed { id: removed, entries }) => {
            assert_eq!(removed, id);
            assert!(entries.is_empty());
        }
        other => panic!("expected Removed, got {:?}", other),
    }
}

#[test]
fn test_rejected_draft_is_not_cleared() {
    let mut view = ListView::<TrainingEntry>::new();
    view.set_draft("\t ");

    let existing = {
        let mut seed = ListView::<TrainingEntry>::new();
        seed.set_draft("Futsal");
        seed.submit(&[]).unwrap().into_entries()
    };

    assert!(view.submit(&existing).is_none());
    assert_eq!(view.draft(), "\t ");
}

#[test]
fn test_content_rows_carry_text_and_timestamp() {
    let mut view = ListView::<MemberEntry>::new();
    view.set_draft("Kari Nordmann");
    let entries = view.submit(&[]).unwrap().into_entries();

    match ListView::content(&entries) {
        ListContent::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].text, "Kari Nordmann");
            // "%Y-%m-%d %H:%M"
            assert_eq!(rows[0].timestamp.len(), 16);
        }
        ListContent::Empty { .. } => panic!("expected rows"),
    }
}

#[test]
fn test_empty_content_carries_title_and_prompt() {
    match ListView::<NewsEntry>::content(&[]) {
        ListContent::Empty { title, prompt } => {
            assert_eq!(title, NewsEntry::LABELS.empty_title);
            assert_eq!(prompt, NewsEntry::LABELS.empty_prompt);
        }
        ListContent::Rows(_) => panic!("expected empty state"),
    }
}
