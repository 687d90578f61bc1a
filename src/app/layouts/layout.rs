//! Application shell layout
//!
//! Owns the cross-cutting UI state: sidebar collapse (persisted), the mobile
//! drawer, and the live search query shared between navbar and sidebar.

use dioxus::prelude::*;

use crate::app::layouts::{AppFooter, AppNavbar, AppSidebar};
use crate::app::pages::routes::Route;
use crate::shared::hooks::{persist_ui_prefs, use_mobile, use_ui_prefs};
use crate::shared::logging;

#[component]
pub fn AppLayout() -> Element {
    let is_mobile = use_mobile();
    let mut mobile_open = use_signal(|| false);
    let query = use_signal(String::new);
    let mut prefs = use_ui_prefs();

    let route = use_route::<Route>();
    let current_path = route.to_string();

    // Navigating closes the mobile drawer
    use_effect(use_reactive((&current_path,), move |(path,)| {
        logging::log_navigation(&path);
        let open = *mobile_open.peek();
        if open {
            mobile_open.set(false);
        }
    }));

    use_effect(move || {
        if is_mobile() {
            mobile_open.set(false);
        }
    });

    let collapsed = prefs().sidebar_collapsed;

    rsx! {
        div { class: "c-layout",
            if !is_mobile() {
                AppSidebar { collapsed, query }
            }
            if is_mobile() && mobile_open() {
                div {
                    class: "c-layout__scrim",
                    onclick: move |_| mobile_open.set(false),
                }
                div { class: "c-layout__drawer",
                    AppSidebar { collapsed: false, query }
                    button {
                        class: "c-btn c-btn--ghost c-layout__drawer-close",
                        onclick: move |_| mobile_open.set(false),
                        "✕"
                    }
                }
            }
            div { class: "c-layout__body",
                AppNavbar {
                    query,
                    prefs,
                    on_toggle: move |_| {
                        if is_mobile() {
                            let open = *mobile_open.peek();
                            mobile_open.set(!open);
                        } else {
                            prefs.with_mut(|p| p.sidebar_collapsed = !p.sidebar_collapsed);
                            persist_ui_prefs(&prefs.peek());
                        }
                    },
                }
                main { class: "c-layout__main", Outlet::<Route> {} }
                AppFooter {}
            }
        }
    }
}
