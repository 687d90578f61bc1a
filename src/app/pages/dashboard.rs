//! Dashboard landing page with static mock data.

use dioxus::prelude::*;

use crate::app::components::{ActivityFeed, Card, StatCardView};
use crate::domain::models::{dashboard_stats, quick_actions, recent_activities, Icon};

#[component]
pub fn Dashboard() -> Element {
    let stats = dashboard_stats();
    let activities = recent_activities();
    let actions = quick_actions();

    rsx! {
        div { class: "p-dashboard",
            section { class: "p-dashboard__welcome",
                h1 { "Welcome back, John! 👋" }
                p { "Here's what's happening with your business today." }
            }

            section { class: "p-dashboard__stats",
                for stat in stats {
                    StatCardView { key: "{stat.title}", stat: stat.clone() }
                }
            }

            div { class: "p-dashboard__grid",
                div { class: "p-dashboard__grid-main",
                    Card {
                        title: "Analytics Overview",
                        description: "Your business performance over the last 30 days",
                        icon: Icon::BarChart,
                        div { class: "p-dashboard__chart-placeholder",
                            span { class: "p-dashboard__chart-glyph", "{Icon::BarChart.glyph()}" }
                            p { class: "p-dashboard__chart-label", "Chart Component" }
                            p { "Analytics chart would be displayed here" }
                        }
                    }
                }
                div { class: "p-dashboard__grid-side",
                    Card {
                        title: "Recent Activity",
                        description: "Latest updates from your system",
                        icon: Icon::Activity,
                        ActivityFeed { entries: activities }
                    }
                }
            }

            Card {
                title: "Quick Actions",
                description: "Common tasks to help you manage your business",
                div { class: "p-dashboard__actions",
                    for action in actions {
                        button { key: "{action.label}", class: "c-btn c-btn--outline",
                            span { "{action.icon.glyph()}" }
                            "{action.label}"
                        }
                    }
                }
            }
        }
    }
}
