//! # client
//!
//! Leptos + WASM frontend for The Architect: marketing pages, account
//! sign-up/sign-in, and the design studio where prompts (and, in
//! sketch-guided mode, a rasterized drawing) are sent to the remote
//! generation backend.
//!
//! All orchestration logic lives in the `chat` crate; this crate provides the
//! browser adapters for its ports — localStorage credentials, the HTTP
//! gateway, the canvas exporter — and the pages and components around them.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the application to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
