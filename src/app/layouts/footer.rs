use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[component]
pub fn AppFooter() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "c-footer",
            p { class: "c-footer__copyright",
                "© {year} Powered 💎 by eTraveling TT Techno Park Co.,Ltd."
            }
        }
    }
}
