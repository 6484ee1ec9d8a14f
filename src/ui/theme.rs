//! UI theme definitions.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => board_visuals(Visuals::dark(), &DARK),
            Theme::Light => board_visuals(Visuals::light(), &LIGHT),
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }

    /// Board colors for this theme.
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Background for entry cards.
    pub fn card_bg(&self) -> Color32 {
        self.palette().card_bg
    }

    /// Muted text for timestamps and empty states.
    pub fn text_muted(&self) -> Color32 {
        self.palette().text_muted
    }

    /// Club accent, used for the badge and selected tab.
    pub fn accent(&self) -> Color32 {
        self.palette().accent
    }

    pub fn warning(&self) -> Color32 {
        self.palette().warning
    }

    pub fn error(&self) -> Color32 {
        self.palette().error
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Colors the board draws with on top of egui's stock visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub card_bg: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub warning: Color32,
    pub error: Color32,
}

const DARK: Palette = Palette {
    card_bg: Color32::from_rgb(36, 44, 40),
    text_muted: Color32::from_rgb(110, 120, 115),
    accent: Color32::from_rgb(46, 160, 90),
    warning: Color32::from_rgb(251, 188, 4),
    error: Color32::from_rgb(234, 67, 53),
};

const LIGHT: Palette = Palette {
    card_bg: Color32::from_rgb(240, 245, 242),
    text_muted: Color32::from_rgb(140, 150, 145),
    accent: Color32::from_rgb(24, 128, 64),
    warning: Color32::from_rgb(200, 130, 0),
    error: Color32::from_rgb(200, 50, 40),
};

/// Stock visuals with the club accent on selections.
fn board_visuals(mut visuals: Visuals, palette: &Palette) -> Visuals {
    visuals.selection.bg_fill = palette.accent;
    visuals.selection.stroke.color = Color32::WHITE;
    visuals.hyperlink_color = palette.accent;
    visuals
}
