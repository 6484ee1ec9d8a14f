//! Status bar indicator for the last save.

use egui::{RichText, Ui};

use crate::shell::SaveStatus;
use crate::ui::theme::Theme;

/// Notice shown while the most recent write failed.
pub const SAVE_FAILED_NOTICE: &str = "⚠ Changes could not be saved";

/// Status bar text for `status`. Nothing is shown before the first write.
pub fn save_status_label(status: SaveStatus) -> Option<&'static str> {
    match status {
        SaveStatus::Idle => None,
        SaveStatus::Saved => Some("Saved locally"),
        SaveStatus::Failed => Some(SAVE_FAILED_NOTICE),
    }
}

/// Compact save status for the status bar. Never blocks input.
pub struct SaveStatusIndicator {
    status: SaveStatus,
    theme: Theme,
}

impl SaveStatusIndicator {
    pub fn new(status: SaveStatus, theme: Theme) -> Self {
        Self { status, theme }
    }

    /// Render the label; returns false when there was nothing to show.
    pub fn show(self, ui: &mut Ui) -> bool {
        let Some(text) = save_status_label(self.status) else {
            return false;
        };

        if self.status == SaveStatus::Failed {
            ui.label(RichText::new(text).color(self.theme.warning()))
                .on_hover_text("The board is kept in memory. The next change will try to save again.");
        } else {
            ui.label(RichText::new(text).weak());
        }
        true
    }
}
