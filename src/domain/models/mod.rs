// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod icon;
pub mod menu;
pub mod stats;

pub use icon::Icon;
pub use menu::{MenuNode, MAIN_MENU};
pub use stats::{
    dashboard_stats, quick_actions, recent_activities, ActivityEntry, QuickAction, StatCard, Trend,
};
