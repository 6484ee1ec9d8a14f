//! Club header: badge, name and subtitle above the tabs.

use egui::{Align, Layout, RichText, Ui};

use crate::storage::ClubSettings;
use crate::ui::theme::Theme;

/// Header block naming the club.
pub struct ClubHeader<'a> {
    club: &'a ClubSettings,
    theme: Theme,
}

impl<'a> ClubHeader<'a> {
    pub fn new(club: &'a ClubSettings, theme: Theme) -> Self {
        Self { club, theme }
    }

    /// Render the header. `trailing` draws right-aligned controls on the same row.
    pub fn show(self, ui: &mut Ui, trailing: impl FnOnce(&mut Ui)) {
        ui.horizontal(|ui| {
            egui::Frame::new()
                .fill(self.theme.accent())
                .inner_margin(egui::Margin::symmetric(8, 6))
                .corner_radius(8.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(self.club.badge_text())
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });

            ui.vertical(|ui| {
                ui.heading(&self.club.name);
                if !self.club.subtitle.is_empty() {
                    ui.label(RichText::new(&self.club.subtitle).color(self.theme.text_muted()));
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), trailing);
        });
    }
}

/// Centered credit line under the list.
pub fn show_footer(ui: &mut Ui, club: &ClubSettings, theme: Theme) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(club.footer_credit())
                .small()
                .color(theme.text_muted()),
        );
    });
}
