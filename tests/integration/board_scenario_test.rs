//! End-to-end board scenarios through the shell, list views and file store.

use clubboard::board::{Entry, MemberEntry, NewsEntry, TrainingEntry};
use clubboard::shell::{SaveStatus, Shell};
use clubboard::storage::{FileKeyValueStore, PersistentStore, STORAGE_KEY};
use clubboard::ui::screens::list_view::{ListContent, ListView};
use clubboard::ui::screens::View;
use tempfile::TempDir;

type FileShell = Shell<PersistentStore<FileKeyValueStore>>;

fn open_shell(dir: &TempDir) -> FileShell {
    Shell::load(PersistentStore::new(FileKeyValueStore::new(dir.path())))
}

#[test]
fn test_first_run_add_and_remove_training() {
    let dir = TempDir::new().unwrap();
    let mut shell = open_shell(&dir);
    let mut view = ListView::<TrainingEntry>::new();

    assert_eq!(shell.active_view(), View::Trainings);
    assert_eq!(
        ListView::content(shell.collection::<TrainingEntry>()),
        ListContent::Empty {
            title: TrainingEntry::LABELS.empty_title,
            prompt: TrainingEntry::LABELS.empty_prompt,
        }
    );

    view.set_draft("Futsal – Mandag kl 18");
    let action = view.submit(shell.collection::<TrainingEntry>()).unwrap();
    shell.set_collection(action.into_entries());

    let ListContent::Rows(rows) = ListView::content(shell.collection::<TrainingEntry>()) else {
        panic!("expected one row");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text, "Futsal – Mandag kl 18");

    let action = view
        .remove(shell.collection::<TrainingEntry>(), rows[0].id)
        .unwrap();
    shell.set_collection(action.into_entries());

    assert!(matches!(
        ListView::content(shell.collection::<TrainingEntry>()),
        ListContent::Empty { .. }
    ));
}

#[test]
fn test_changes_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut shell = open_shell(&dir);
        let mut members = ListView::<MemberEntry>::new();
        let mut news = ListView::<NewsEntry>::new();

        for name in ["Kari", "Ola", "Nora"] {
            members.set_draft(name);
            let action = members.submit(shell.collection::<MemberEntry>()).unwrap();
            shell.set_collection(action.into_entries());
        }

        news.set_draft("Training moves indoors from November");
        let action = news.submit(shell.collection::<NewsEntry>()).unwrap();
        shell.set_collection(action.into_entries());
        assert!(!shell.last_save_failed());
    }

    let shell = open_shell(&dir);
    let names: Vec<&str> = shell
        .collection::<MemberEntry>()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["Nora", "Ola", "Kari"]);
    assert_eq!(shell.collection::<NewsEntry>().len(), 1);
    assert!(shell.collection::<TrainingEntry>().is_empty());
}

#[test]
fn test_malformed_stored_document_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(format!("{}.json", STORAGE_KEY)),
        "this is not { json",
    )
    .unwrap();

    let mut shell = open_shell(&dir);
    assert!(shell.document().is_empty());
    assert_eq!(shell.save_status(), SaveStatus::Idle);

    // The next change overwrites the corrupt value
    let mut view = ListView::<NewsEntry>::new();
    view.set_draft("Fresh start");
    let action = view.submit(shell.collection::<NewsEntry>()).unwrap();
    shell.set_collection(action.into_entries());
    assert_eq!(shell.save_status(), SaveStatus::Saved);

    let reopened = open_shell(&dir);
    assert_eq!(reopened.collection::<NewsEntry>()[0].text, "Fresh start");
}

#[test]
fn test_view_switching_keeps_collections() {
    let dir = TempDir::new().unwrap();
    let mut shell = open_shell(&dir);
    let mut view = ListView::<TrainingEntry>::new();

    for text in ["Monday futsal", "Wednesday handball", "Friday running"] {
        view.set_draft(text);
        let action = view.submit(shell.collection::<TrainingEntry>()).unwrap();
        shell.set_collection(action.into_entries());
    }
    let before = shell.document().clone();

    for next in [View::News, View::Members, View::Trainings, View::Members] {
        shell.set_active_view(next);
        assert_eq!(shell.document(), &before);
    }
}
