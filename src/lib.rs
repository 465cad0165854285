//! # clearspace
//!
//! Leptos + WASM client for the Clearspace digital-decluttering application.
//!
//! This crate contains pages, components, application state, the REST
//! boundary, and the session access gate. The session core
//! (`state::identity`, `state::session`, `state::gate`) is framework-free
//! and natively testable; browser integration lives behind the `hydrate`
//! feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
