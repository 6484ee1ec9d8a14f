//! Main application state and egui integration.

use eframe::egui;

use clubboard::board::{Entry, MemberEntry, NewsEntry, TrainingEntry};
use clubboard::shell::Shell;
use clubboard::storage::config::{save_config, AppConfig};
use clubboard::storage::{DocumentStore, FileKeyValueStore, PersistentStore};
use clubboard::ui::screens::{ListView, View};
use clubboard::ui::theme::Theme;
use clubboard::ui::widgets::{show_footer, ClubHeader, NavTabs, SaveStatusIndicator};

type BoardShell = Shell<PersistentStore<FileKeyValueStore>>;

/// Main application state.
pub struct ClubBoardApp {
    /// Document, active view and store
    shell: BoardShell,
    /// Application configuration
    config: AppConfig,
    /// UI theme
    theme: Theme,
    trainings_view: ListView<TrainingEntry>,
    members_view: ListView<MemberEntry>,
    news_view: ListView<NewsEntry>,
}

impl ClubBoardApp {
    /// Create a new application instance around an already loaded shell.
    pub fn new(cc: &eframe::CreationContext<'_>, shell: BoardShell, config: AppConfig) -> Self {
        let theme = config.theme;
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        Self {
            shell,
            config,
            theme,
            trainings_view: ListView::new(),
            members_view: ListView::new(),
            news_view: ListView::new(),
        }
    }

    /// Toggle the theme between dark and light and remember the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.config.theme = self.theme;
        if let Err(e) = save_config(&self.config) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    /// Ctrl/Cmd+1..3 jump straight to a tab.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let shortcuts = [
            (egui::Key::Num1, View::Trainings),
            (egui::Key::Num2, View::Members),
            (egui::Key::Num3, View::News),
        ];

        for (key, view) in shortcuts {
            if ctx.input(|i| i.modifiers.command && i.key_pressed(key)) {
                self.shell.set_active_view(view);
            }
        }
    }
}

/// Render one list view and hand any change back to the shell.
fn show_list<E: Entry, S: DocumentStore>(
    ui: &mut egui::Ui,
    view: &mut ListView<E>,
    shell: &mut Shell<S>,
    theme: Theme,
    show_timestamps: bool,
) {
    if let Some(action) = view.show(ui, shell.collection::<E>(), theme, show_timestamps) {
        shell.set_collection(action.into_entries());
    }
}

impl eframe::App for ClubBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // Top panel with club header and navigation
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            let mut toggle = false;
            ClubHeader::new(&self.config.club, self.theme).show(ui, |ui| {
                toggle = ui
                    .button(self.theme.icon())
                    .on_hover_text(format!("Switch to {} theme", self.theme.toggled()))
                    .clicked();
            });
            if toggle {
                self.toggle_theme(ctx);
            }

            ui.add_space(4.0);
            let selected = NavTabs::new(self.shell.active_view(), self.shell.document()).show(ui);
            if let Some(view) = selected {
                self.shell.set_active_view(view);
            }
            ui.add_space(4.0);
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                if SaveStatusIndicator::new(self.shell.save_status(), self.theme).show(ui) {
                    ui.separator();
                }
                ui.label(
                    egui::RichText::new(self.shell.store().backend().dir().display().to_string())
                        .small()
                        .weak(),
                );
            });
        });

        // Credit line above the status bar
        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                show_footer(ui, &self.config.club, self.theme);
            });

        // Main content area
        let show_timestamps = self.config.ui.show_timestamps;
        egui::CentralPanel::default().show(ctx, |ui| match self.shell.active_view() {
            View::Trainings => show_list(
                ui,
                &mut self.trainings_view,
                &mut self.shell,
                self.theme,
                show_timestamps,
            ),
            View::Members => show_list(
                ui,
                &mut self.members_view,
                &mut self.shell,
                self.theme,
                show_timestamps,
            ),
            View::News => show_list(
                ui,
                &mut self.news_view,
                &mut self.shell,
                self.theme,
                show_timestamps,
            ),
        });
    }
}
