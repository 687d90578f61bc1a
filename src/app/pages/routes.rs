use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::AppLayout;
use crate::app::pages::{Dashboard, MenuPage, NotFound};
use crate::config::ShellConfig;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    // Dashboard landing page
    #[route("/")]
    Dashboard {},

    // Every sidebar leaf routes as /:section/:page
    #[route("/:section/:page")]
    MenuPage { section: String, page: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_context_provider(ShellConfig::default);

    use_effect(|| {
        tracing::info!("Togeta dashboard shell initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
    }
}
