use dioxus::prelude::*;

use crate::domain::models::{Icon, StatCard, Trend};

/// One mock statistic tile in the dashboard grid.
#[component]
pub fn StatCardView(stat: StatCard) -> Element {
    let trend_class = match stat.trend {
        Trend::Up => "c-stat__change--up",
        Trend::Down => "c-stat__change--down",
    };
    let trend_glyph = match stat.trend {
        Trend::Up => Icon::TrendingUp.glyph(),
        Trend::Down => Icon::Activity.glyph(),
    };

    rsx! {
        div { class: "c-stat",
            div { class: "c-stat__header",
                span { class: "c-stat__title", "{stat.title}" }
                span { class: "c-stat__icon", "{stat.icon.glyph()}" }
            }
            div { class: "c-stat__value", "{stat.value}" }
            p { class: "c-stat__change {trend_class}",
                span { "{trend_glyph}" }
                "{stat.change} from last month"
            }
        }
    }
}
