//! Viewport breakpoint hook
//!
//! Mirrors a `matchMedia` query into a signal so the layout can switch the
//! sidebar between inline and drawer modes.

use dioxus::document;
use dioxus::prelude::*;

use crate::shared::constants::MOBILE_BREAKPOINT_PX;

/// True when the viewport is below the mobile breakpoint. Evaluated on mount
/// and after that on every browser resize.
pub fn use_mobile() -> Signal<bool> {
    let mut is_mobile = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let script = format!(
                r#"
                const query = window.matchMedia('(max-width: {}px)');
                dioxus.send(query.matches);
                query.addEventListener('change', (event) => dioxus.send(event.matches));
                "#,
                MOBILE_BREAKPOINT_PX - 1
            );
            let mut eval = document::eval(&script);
            while let Ok(matches) = eval.recv::<bool>().await {
                if is_mobile() != matches {
                    is_mobile.set(matches);
                }
            }
        });
    });

    is_mobile
}
