//! Generic list view.
//!
//! One add-form plus a deletable list for a single entry kind. Trainings,
//! members and news all use this screen, parameterized by their [`Entry`]
//! descriptor.

use std::marker::PhantomData;

use chrono::Local;
use egui::{Align, Layout, RichText, Ui};
use uuid::Uuid;

use crate::board::{add_entry, remove_entry, Entry};
use crate::ui::theme::Theme;

/// Collection change produced by a list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<E> {
    /// A new entry was prepended.
    Added(Vec<E>),
    /// The entry with `id` was removed.
    Removed { id: Uuid, entries: Vec<E> },
}

impl<E> ListAction<E> {
    /// The replacement collection to hand to the shell.
    pub fn into_entries(self) -> Vec<E> {
        match self {
            ListAction::Added(entries) => entries,
            ListAction::Removed { entries, .. } => entries,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: Uuid,
    pub text: String,
    /// Timestamp in local time, `%Y-%m-%d %H:%M`
    pub timestamp: String,
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Empty collection, with the kind's title and prompt.
    Empty {
        title: &'static str,
        prompt: &'static str,
    },
    /// Rows in collection order.
    Rows(Vec<ListRow>),
}

/// List view state: just the draft in the add-form.
pub struct ListView<E> {
    draft: String,
    _kind: PhantomData<E>,
}

impl<E: Entry> Default for ListView<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> ListView<E> {
    /// Create a list view with an empty draft.
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            _kind: PhantomData,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Submit the draft against `entries`.
    ///
    /// A blank draft changes nothing and is kept in the form. Otherwise the
    /// draft is cleared and the new collection returned.
    pub fn submit(&mut self, entries: &[E]) -> Option<ListAction<E>> {
        let updated = add_entry(entries, &self.draft)?;
        tracing::debug!("Added {} entry {}", E::FIELD, updated[0].id());
        self.draft.clear();
        Some(ListAction::Added(updated))
    }

    /// Remove the entry with `id`. Unknown ids produce no action.
    pub fn remove(&self, entries: &[E], id: Uuid) -> Option<ListAction<E>> {
        if !entries.iter().any(|entry| entry.id() == id) {
            return None;
        }

        tracing::debug!("Removed {} entry {}", E::FIELD, id);
        Some(ListAction::Removed {
            id,
            entries: remove_entry(entries, id),
        })
    }

    /// Rows to render for `entries`, without re-sorting.
    pub fn content(entries: &[E]) -> ListContent {
        if entries.is_empty() {
            return ListContent::Empty {
                title: E::LABELS.empty_title,
                prompt: E::LABELS.empty_prompt,
            };
        }

        ListContent::Rows(
            entries
                .iter()
                .map(|entry| ListRow {
                    id: entry.id(),
                    text: entry.text().to_string(),
                    timestamp: entry
                        .timestamp()
                        .with_timezone(&Local)
                        .format("%Y-%m-%d %H:%M")
                        .to_string(),
                })
                .collect(),
        )
    }

    /// Render the view and return the collection change, if any.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        entries: &[E],
        theme: Theme,
        show_timestamps: bool,
    ) -> Option<ListAction<E>> {
        let labels = E::LABELS;
        let mut action = None;

        ui.heading(labels.heading);
        ui.add_space(10.0);

        // Add-form
        ui.horizontal(|ui| {
            let input_width = (ui.available_width() - 140.0).max(120.0);
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.draft)
                    .desired_width(input_width)
                    .hint_text(labels.input_hint),
            );
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button(labels.submit).clicked() || enter_pressed {
                action = self.submit(entries);
                if enter_pressed {
                    response.request_focus();
                }
            }
        });

        ui.add_space(15.0);

        match Self::content(entries) {
            ListContent::Empty { title, prompt } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(4.0);
                    ui.label(RichText::new(prompt).color(theme.text_muted()));
                });
            }
            ListContent::Rows(rows) => {
                let mut delete_id = None;

                egui::ScrollArea::vertical()
                    .id_salt(E::FIELD)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for row in &rows {
                            if Self::show_row(ui, row, labels.timestamp_caption, theme, show_timestamps) {
                                delete_id = Some(row.id);
                            }
                        }
                    });

                // Applied after drawing so the list is not changed mid-frame
                if let Some(id) = delete_id {
                    action = self.remove(entries, id);
                }
            }
        }

        action
    }

    /// Render one row; returns true when its delete button was clicked.
    fn show_row(
        ui: &mut Ui,
        row: &ListRow,
        caption: &str,
        theme: Theme,
        show_timestamps: bool,
    ) -> bool {
        let mut clicked = false;

        egui::Frame::new()
            .fill(theme.card_bg())
            .inner_margin(10.0)
            .outer_margin(3.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&row.text).size(15.0));
                        if show_timestamps {
                            ui.label(
                                RichText::new(format!("{} {}", caption, row.timestamp))
                                    .small()
                                    .color(theme.text_muted()),
                            );
                        }
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Delete").color(theme.error()))
                            .clicked()
                        {
                            clicked = true;
                        }
                    });
                });
            });

        clicked
    }
}
