//! # client
//!
//! Leptos + WASM frontend for the floor-plan playground.
//!
//! This crate contains pages, components, page state, the REST client and the
//! realtime project socket. Rendering and hit-testing of plans are delegated to
//! the `canvas` crate through the `PlanCanvas` component; socket framing comes
//! from `packets`.
//!
//! Built with `hydrate` for the browser bundle and with `ssr` when linked into
//! the server host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("hydrating floor-plan playground");
    leptos::mount::hydrate_body(app::App);
}
