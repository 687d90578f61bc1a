// Custom Dioxus hooks
pub mod use_mobile;
pub mod use_prefs;

pub use use_mobile::use_mobile;
pub use use_prefs::{persist_ui_prefs, use_ui_prefs};
