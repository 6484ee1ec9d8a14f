//! UI widgets for reusable components.

pub mod club_header;
pub mod nav_tabs;
pub mod save_status;

pub use club_header::{show_footer, ClubHeader};
pub use nav_tabs::{tab_label, NavTabs};
pub use save_status::{save_status_label, SaveStatusIndicator};
