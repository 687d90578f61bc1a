//! Navbar menu-search input
//!
//! Feeds the shared query signal on every keystroke; the sidebar derives its
//! filtered tree from that signal. Escape clears the query.

use dioxus::prelude::*;
use keyboard_types::Key;

use crate::domain::models::Icon;

#[component]
pub fn SearchBar(mut query: Signal<String>) -> Element {
    rsx! {
        div { class: "c-search",
            span { class: "c-search__icon", "{Icon::Search.glyph()}" }
            input {
                r#type: "search",
                class: "c-search__input",
                placeholder: "Search menus, features...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        query.set(String::new());
                    }
                },
            }
        }
    }
}
