//! Togeta Dashboard - entry point
//!
//! Client-side rendered shell; there is no server component.

use togeta_dashboard::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Togeta dashboard initialized".into());
    dioxus::launch(App);
}

// Native preview (dx serve tooling)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    dioxus::launch(App);
}
