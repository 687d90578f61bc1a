//! Collapsible navigation sidebar
//!
//! All menu logic (filtering, active detection, expansion) is delegated to
//! `domain::services::menu_tree`; this component only owns the
//! `ExpansionState` signal and renders the engine's output.
//!
//! The filtered tree is memoized on the query, and the two auto-expansion
//! passes are invoked explicitly: on route change and on query change.

use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::config::ShellConfig;
use crate::domain::models::menu::{MenuNode, MAIN_MENU};
use crate::domain::services::menu_tree::{self, ExpansionState};
use crate::shared::logging;

#[component]
pub fn AppSidebar(collapsed: bool, query: Signal<String>) -> Element {
    let config = use_context::<ShellConfig>();
    let route = use_route::<Route>();
    let current_path = route.to_string();

    let defaults = config.default_open.clone();
    let mut expansion = use_signal(move || ExpansionState::with_defaults(defaults.clone()));

    let filtered = use_memo(move || {
        let q = query();
        let result = menu_tree::filter_tree(&MAIN_MENU, &q);
        logging::log_filter_result(
            &q,
            menu_tree::count_nodes(&MAIN_MENU),
            menu_tree::count_nodes(&result),
        );
        result
    });

    // Opening the groups the active page lives in, on every route change
    use_effect(use_reactive((&current_path,), move |(path,)| {
        expansion.with_mut(|state| state.auto_expand_for_route(&MAIN_MENU, &path));
        logging::log_auto_expand("route", expansion.peek().open_count());
    }));

    // Live search opens every group that still holds a match. Clearing the
    // query never closes anything; only explicit toggles do.
    use_effect(move || {
        let snapshot = filtered();
        if !query.peek().trim().is_empty() {
            expansion.with_mut(|state| state.auto_expand_for_search(&snapshot));
            logging::log_auto_expand("search", expansion.peek().open_count());
        }
    });

    let nodes = filtered();
    let sidebar_class = if collapsed {
        "c-sidebar c-sidebar--collapsed"
    } else {
        "c-sidebar"
    };

    rsx! {
        aside { class: "{sidebar_class}",
            div { class: "c-sidebar__header",
                if !collapsed {
                    div { class: "c-sidebar__brand",
                        h1 { "{config.app_name}" }
                        p { "{config.app_subtitle}" }
                    }
                }
            }
            nav { class: "c-sidebar__nav",
                if nodes.is_empty() {
                    p { class: "c-sidebar__empty", "No menus match \"{query}\"" }
                }
                for item in nodes {
                    if item.is_group() {
                        SidebarGroup {
                            key: "{item.id}",
                            node: item.clone(),
                            collapsed,
                            current_path: current_path.clone(),
                            query,
                            expansion,
                        }
                    } else {
                        SidebarLeaf {
                            key: "{item.id}",
                            node: item.clone(),
                            collapsed,
                            current_path: current_path.clone(),
                            query,
                            nested: false,
                        }
                    }
                }
            }
        }
    }
}

/// Expandable group row plus its children when open.
#[component]
fn SidebarGroup(
    node: MenuNode,
    collapsed: bool,
    current_path: String,
    query: Signal<String>,
    expansion: Signal<ExpansionState>,
) -> Element {
    let open = expansion().is_open(&node.id);
    let active = menu_tree::is_active_group(&node, &current_path);

    let mut toggle_class = String::from("c-sidebar__group-toggle");
    if active {
        toggle_class.push_str(" is-active");
    }
    let chevron = if open { "▾" } else { "▸" };
    let id = node.id.clone();

    rsx! {
        div { class: "c-sidebar__group",
            button {
                class: "{toggle_class}",
                onclick: move |_| {
                    let mut expansion = expansion;
                    expansion.with_mut(|state| state.toggle(&id));
                    logging::log_group_toggled(&id, expansion.peek().is_open(&id));
                },
                span { class: "c-sidebar__icon", "{node.icon.glyph()}" }
                if !collapsed {
                    span { class: "c-sidebar__title",
                        HighlightedTitle { title: node.title.clone(), query }
                    }
                    span { class: "c-sidebar__chevron", "{chevron}" }
                }
            }
            if open && !collapsed {
                ul { class: "c-sidebar__children",
                    for child in node.children.clone() {
                        li { key: "{child.id}",
                            SidebarLeaf {
                                node: child,
                                collapsed,
                                current_path: current_path.clone(),
                                query,
                                nested: true,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Actionable link row. Active iff its route equals the current path exactly.
#[component]
fn SidebarLeaf(
    node: MenuNode,
    collapsed: bool,
    current_path: String,
    query: Signal<String>,
    nested: bool,
) -> Element {
    let active = node.route.as_deref() == Some(current_path.as_str());
    let target = node.route.clone().unwrap_or_else(|| "/".to_string());

    let mut link_class = String::from("c-sidebar__link");
    if nested {
        link_class.push_str(" c-sidebar__link--nested");
    }
    if active {
        link_class.push_str(" is-active");
    }

    rsx! {
        Link { to: target, class: "{link_class}",
            span { class: "c-sidebar__icon", "{node.icon.glyph()}" }
            if !collapsed {
                span { class: "c-sidebar__title",
                    HighlightedTitle { title: node.title.clone(), query }
                }
            }
        }
    }
}

/// Title text with query matches wrapped in `<mark>`.
#[component]
fn HighlightedTitle(title: String, query: Signal<String>) -> Element {
    let segments = menu_tree::highlight_title(&title, &query());

    rsx! {
        for (index, segment) in segments.into_iter().enumerate() {
            if segment.matched {
                mark { key: "{index}", class: "c-sidebar__match", "{segment.text}" }
            } else {
                span { key: "{index}", "{segment.text}" }
            }
        }
    }
}
