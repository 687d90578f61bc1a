//! UI preference state hook with localStorage persistence

use dioxus::prelude::*;

use crate::shared::logging;
use crate::shared::prefs::{self, UiPrefs};

/// Preference state, hydrated from localStorage on mount. Persistence errors
/// are logged and the shell falls back to defaults.
pub fn use_ui_prefs() -> Signal<UiPrefs> {
    let mut ui_prefs = use_signal(UiPrefs::default);

    use_effect(move || match prefs::load() {
        Ok(Some(saved)) => ui_prefs.set(saved),
        Ok(None) => {}
        Err(err) => logging::log_prefs_error("load", &err),
    });

    ui_prefs
}

/// Write preferences back to storage. Failures degrade to in-memory state.
pub fn persist_ui_prefs(ui_prefs: &UiPrefs) {
    if let Err(err) = prefs::save(ui_prefs) {
        logging::log_prefs_error("save", &err);
    }
}
