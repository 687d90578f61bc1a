use dioxus::prelude::*;

use crate::domain::models::Icon;

/// Account dropdown. Entries are presentational; there is no auth backing.
#[component]
pub fn UserMenu() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "c-dropdown",
            button {
                class: "c-btn c-btn--ghost c-user",
                onclick: move |_| open.set(!open()),
                span { class: "c-user__avatar", "JD" }
                span { class: "c-user__name", "John Doe" }
                span { class: "c-dropdown__chevron", "▾" }
            }
            if open() {
                div { class: "c-dropdown__menu",
                    p { class: "c-dropdown__label", "My Account" }
                    button { class: "c-dropdown__item", onclick: move |_| open.set(false),
                        span { "{Icon::User.glyph()}" }
                        span { "Profile" }
                    }
                    button { class: "c-dropdown__item", onclick: move |_| open.set(false),
                        span { "{Icon::Settings.glyph()}" }
                        span { "Settings" }
                    }
                    hr { class: "c-dropdown__separator" }
                    button {
                        class: "c-dropdown__item c-dropdown__item--danger",
                        onclick: move |_| open.set(false),
                        span { "{Icon::LogOut.glyph()}" }
                        span { "Sign Out" }
                    }
                }
            }
        }
    }
}
