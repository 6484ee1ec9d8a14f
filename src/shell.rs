//! Application shell: the live document, the active view and the store.
//!
//! The shell performs no validation. List views validate drafts before they
//! hand a replacement collection to [`Shell::set_collection`].

use crate::board::{Document, Entry};
use crate::storage::DocumentStore;
use crate::ui::screens::View;

/// Outcome of the most recent write this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    /// Nothing has been written since startup
    #[default]
    Idle,
    Saved,
    Failed,
}

/// Holds the board state and persists every collection change.
pub struct Shell<S> {
    document: Document,
    active_view: View,
    store: S,
    save_status: SaveStatus,
}

impl<S: DocumentStore> Shell<S> {
    /// Load the stored document once, starting empty when nothing usable is stored.
    pub fn load(store: S) -> Self {
        let document = store.load(Document::default());
        tracing::info!(
            "Loaded board: {} trainings, {} members, {} news",
            document.trainings.len(),
            document.members.len(),
            document.news.len()
        );

        Self {
            document,
            active_view: View::default(),
            store,
            save_status: SaveStatus::Idle,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Read access to one collection.
    pub fn collection<E: Entry>(&self) -> &[E] {
        E::collection(&self.document)
    }

    /// Replace one collection and persist the whole document.
    pub fn set_collection<E: Entry>(&mut self, entries: Vec<E>) {
        *E::collection_mut(&mut self.document) = entries;
        self.persist();
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Switch the visible view. Never touches the document.
    pub fn set_active_view(&mut self, view: View) {
        if self.active_view != view {
            tracing::debug!("Navigating from {:?} to {:?}", self.active_view, view);
            self.active_view = view;
        }
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    /// Whether the most recent save failed.
    pub fn last_save_failed(&self) -> bool {
        self.save_status == SaveStatus::Failed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist(&mut self) {
        match self.store.save(&self.document) {
            Ok(()) => self.save_status = SaveStatus::Saved,
            Err(e) => {
                // The in-memory change stands; the failed write is dropped.
                tracing::warn!("Failed to save board document: {}", e);
                self.save_status = SaveStatus::Failed;
            }
        }
    }
}
