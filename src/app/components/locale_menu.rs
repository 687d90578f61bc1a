use dioxus::prelude::*;

use crate::domain::models::Icon;
use crate::shared::constants::{language_by_code, LANGUAGES};
use crate::shared::hooks::persist_ui_prefs;
use crate::shared::prefs::UiPrefs;

/// Language switcher dropdown. The selection is cosmetic shell state and is
/// persisted with the rest of the UI preferences.
#[component]
pub fn LocaleMenu(prefs: Signal<UiPrefs>) -> Element {
    let mut open = use_signal(|| false);
    let selected = language_by_code(&prefs().locale);

    rsx! {
        div { class: "c-dropdown",
            button {
                class: "c-btn c-btn--ghost",
                onclick: move |_| open.set(!open()),
                span { "{Icon::Globe.glyph()}" }
                span { class: "c-dropdown__current", "{selected.flag}" }
                span { class: "c-dropdown__chevron", "▾" }
            }
            if open() {
                div { class: "c-dropdown__menu",
                    p { class: "c-dropdown__label", "Select Language" }
                    for lang in LANGUAGES {
                        button {
                            key: "{lang.code}",
                            class: if lang.code == selected.code {
                                "c-dropdown__item c-dropdown__item--active"
                            } else {
                                "c-dropdown__item"
                            },
                            onclick: move |_| {
                                open.set(false);
                                let mut prefs = prefs;
                                prefs.with_mut(|p| p.locale = lang.code.to_string());
                                persist_ui_prefs(&prefs.peek());
                            },
                            span { class: "c-dropdown__flag", "{lang.flag}" }
                            span { "{lang.name}" }
                        }
                    }
                }
            }
        }
    }
}
