//! Tab bar switching between the list views.

use egui::{RichText, Ui};

use crate::board::Document;
use crate::ui::screens::View;

/// Navigation tabs with per-view entry counts.
pub struct NavTabs<'a> {
    current: View,
    document: &'a Document,
}

impl<'a> NavTabs<'a> {
    pub fn new(current: View, document: &'a Document) -> Self {
        Self { current, document }
    }

    /// Render the tabs and return the newly selected view, if it changed.
    pub fn show(self, ui: &mut Ui) -> Option<View> {
        let mut selected = self.current;

        ui.horizontal(|ui| {
            for view in View::ALL {
                let label = tab_label(view, self.document);
                ui.selectable_value(&mut selected, view, RichText::new(label).size(16.0));
            }
        });

        (selected != self.current).then_some(selected)
    }
}

/// Tab text, e.g. "Members (12)".
pub fn tab_label(view: View, document: &Document) -> String {
    let count = match view {
        View::Trainings => document.trainings.len(),
        View::Members => document.members.len(),
        View::News => document.news.len(),
    };
    format!("{} ({})", view.label(), count)
}
