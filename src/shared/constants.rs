// Shared UI constants

/// Viewports narrower than this behave as mobile (sidebar becomes a drawer).
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// localStorage key for persisted UI preferences.
pub const PREFS_STORAGE_KEY: &str = "togeta_ui_prefs";

/// Mock unread-notification count shown on the navbar bell.
pub const NOTIFICATION_BADGE_COUNT: u32 = 3;

/// One selectable UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Languages offered by the navbar locale menu.
pub const LANGUAGES: [Language; 6] = [
    Language { code: "en", name: "English", flag: "🇺🇸" },
    Language { code: "es", name: "Español", flag: "🇪🇸" },
    Language { code: "fr", name: "Français", flag: "🇫🇷" },
    Language { code: "de", name: "Deutsch", flag: "🇩🇪" },
    Language { code: "zh", name: "中文", flag: "🇨🇳" },
    Language { code: "ja", name: "日本語", flag: "🇯🇵" },
];

/// Look up a language by its code, falling back to the first entry.
pub fn language_by_code(code: &str) -> Language {
    LANGUAGES
        .iter()
        .copied()
        .find(|lang| lang.code == code)
        .unwrap_or(LANGUAGES[0])
}
