//! # landing
//!
//! Leptos + WASM frontend for the TruthLens marketing page.
//!
//! The page is server-rendered by the `truthlens` binary and hydrated in the
//! browser. This crate contains the page, its components, the per-feature
//! state models, and the simulated demo rules behind the four demo widgets.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
