use dioxus::prelude::*;

use crate::domain::models::ActivityEntry;

/// Recent-activity list for the dashboard page.
#[component]
pub fn ActivityFeed(entries: Vec<ActivityEntry>) -> Element {
    rsx! {
        div { class: "c-activity",
            for entry in entries {
                div { key: "{entry.id}", class: "c-activity__row",
                    span { class: "c-activity__dot" }
                    div { class: "c-activity__detail",
                        p { class: "c-activity__action", "{entry.action}" }
                        p { class: "c-activity__meta", "{entry.user} • {entry.time}" }
                    }
                }
            }
        }
    }
}
