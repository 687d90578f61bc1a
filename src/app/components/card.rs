use dioxus::prelude::*;

use crate::domain::models::Icon;

/// Generic content card used across the dashboard page.
#[component]
pub fn Card(
    title: Option<String>,
    description: Option<String>,
    icon: Option<Icon>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "c-card",
            if title.is_some() || description.is_some() {
                div { class: "c-card__header",
                    if let Some(title) = title {
                        h3 { class: "c-card__title",
                            if let Some(icon) = icon {
                                span { class: "c-card__icon", "{icon.glyph()}" }
                            }
                            "{title}"
                        }
                    }
                    if let Some(description) = description {
                        p { class: "c-card__description", "{description}" }
                    }
                }
            }
            div { class: "c-card__body", {children} }
        }
    }
}
