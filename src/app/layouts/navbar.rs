//! Top navigation bar
//!
//! Shows the title of the menu entry matching the current location (via the
//! menu tree engine's active resolver), the live search input, and the
//! locale / notification / user menus.

use dioxus::prelude::*;

use crate::app::components::{LocaleMenu, SearchBar, UserMenu};
use crate::app::pages::routes::Route;
use crate::config::ShellConfig;
use crate::domain::models::menu::MAIN_MENU;
use crate::domain::models::Icon;
use crate::domain::services::menu_tree;
use crate::shared::constants::NOTIFICATION_BADGE_COUNT;
use crate::shared::logging;
use crate::shared::prefs::UiPrefs;

#[component]
pub fn AppNavbar(
    query: Signal<String>,
    prefs: Signal<UiPrefs>,
    on_toggle: EventHandler<()>,
) -> Element {
    let config = use_context::<ShellConfig>();
    let route = use_route::<Route>();
    let current_path = route.to_string();

    let active = menu_tree::resolve_active(&MAIN_MENU, &current_path, &config.fallback_title);

    let fallback = config.fallback_title.clone();
    use_effect(use_reactive((&current_path,), move |(path,)| {
        let resolved = menu_tree::resolve_active(&MAIN_MENU, &path, &fallback);
        logging::log_active_resolved(&path, resolved.node_id.as_deref(), &resolved.title);
    }));

    rsx! {
        header { class: "c-navbar",
            div { class: "c-navbar__left",
                button {
                    class: "c-btn c-btn--ghost c-navbar__toggle",
                    onclick: move |_| on_toggle.call(()),
                    "{Icon::Menu.glyph()}"
                }
                div { class: "c-navbar__context",
                    h1 { class: "c-navbar__title", "{active.title}" }
                    p { class: "c-navbar__customer", "{config.customer_name}" }
                }
            }
            div { class: "c-navbar__center",
                SearchBar { query }
            }
            div { class: "c-navbar__right",
                LocaleMenu { prefs }
                button { class: "c-btn c-btn--ghost c-navbar__bell",
                    "{Icon::Bell.glyph()}"
                    span { class: "c-navbar__badge", "{NOTIFICATION_BADGE_COUNT}" }
                }
                UserMenu {}
            }
        }
    }
}
