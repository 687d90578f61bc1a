//! UI preferences persisted to browser localStorage
//!
//! Only cosmetic shell state lives here (sidebar collapse, locale); all
//! navigation state is session-scoped and derived by the menu tree engine.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use super::constants::PREFS_STORAGE_KEY;
#[cfg(target_arch = "wasm32")]
use super::errors::AppError;
use super::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPrefs {
    pub sidebar_collapsed: bool,
    pub locale: String,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            locale: "en".to_string(),
        }
    }
}

/// Load persisted preferences, `Ok(None)` when nothing was saved yet.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<Option<UiPrefs>> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(PREFS_STORAGE_KEY)
        .map_err(|_| AppError::StorageError("failed to read preferences".to_string()))?;
    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save(prefs: &UiPrefs) -> Result<()> {
    let storage = local_storage()?;
    let json = serde_json::to_string(prefs)?;
    storage
        .set_item(PREFS_STORAGE_KEY, &json)
        .map_err(|_| AppError::StorageError("failed to write preferences".to_string()))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| AppError::StorageError("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|_| AppError::StorageError("local storage unavailable".to_string()))?
        .ok_or_else(|| AppError::StorageError("local storage disabled".to_string()))
}

// No-ops outside the browser
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<Option<UiPrefs>> {
    Ok(None)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_prefs: &UiPrefs) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_default() {
        let prefs = UiPrefs::default();
        assert!(!prefs.sidebar_collapsed);
        assert_eq!(prefs.locale, "en");
    }

    #[test]
    fn test_prefs_round_trip_json() {
        let prefs = UiPrefs {
            sidebar_collapsed: true,
            locale: "fr".to_string(),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: UiPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
