//! # activity-board
//!
//! Leptos + WASM front-end for the activity signup service. Lists the
//! activity catalog, filters it by a live search query, and lets an
//! authenticated user register or unregister participants by email.
//!
//! Browser-only code (HTTP, `localStorage`, timers, dialogs) is gated behind
//! the `csr` feature. Everything else is plain Rust tested on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
