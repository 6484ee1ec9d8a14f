//! UI screens for the application.

pub mod list_view;

pub use list_view::{ListAction, ListView};

/// Which list view is visible. Kept in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Training schedule
    #[default]
    Trainings,
    /// Member list
    Members,
    /// News posts
    News,
}

impl View {
    /// All views in tab order.
    pub const ALL: [View; 3] = [View::Trainings, View::Members, View::News];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Trainings => "Trainings",
            View::Members => "Members",
            View::News => "News",
        }
    }
}
