//! Generic pages for menu leaves and unknown locations.

use dioxus::prelude::*;

use crate::app::components::Card;
use crate::app::pages::routes::Route;
use crate::config::ShellConfig;
use crate::domain::models::menu::MAIN_MENU;
use crate::domain::services::menu_tree;

/// Landing page for every sidebar leaf. The heading comes from the active
/// resolver so the page and the navbar always agree on the title.
#[component]
pub fn MenuPage(section: String, page: String) -> Element {
    let config = use_context::<ShellConfig>();
    let path = format!("/{section}/{page}");
    let active = menu_tree::resolve_active(&MAIN_MENU, &path, &config.fallback_title);

    rsx! {
        div { class: "p-page",
            if active.node_id.is_some() {
                Card {
                    title: active.title.clone(),
                    description: format!("Module path: {path}"),
                    p { class: "p-page__placeholder", "This module is under construction." }
                }
            } else {
                Card { title: "Not found",
                    p { "No menu entry matches {path}." }
                    Link {
                        to: Route::Dashboard {},
                        class: "c-btn c-btn--primary",
                        "Back to dashboard"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "p-page p-page--notfound",
            Card { title: "Page not found",
                p { "The location {path} does not exist." }
                Link {
                    to: Route::Dashboard {},
                    class: "c-btn c-btn--primary",
                    "Back to dashboard"
                }
            }
        }
    }
}
