//! # client
//!
//! Leptos + WASM frontend shell for First Cabs.
//!
//! Pages render behind the session-gated [`components::surface::Surface`],
//! which asks the `shell` core what each navigation may show. The slide-in
//! [`components::sidebar::Sidebar`] drives `shell`'s overlay controller with
//! DOM-backed listeners and the fullscreen capability detector.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
