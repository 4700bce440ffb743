//! # userboard
//!
//! Leptos + WASM admin dashboard for managing user accounts against a
//! cookie-session REST backend. Replaces the React admin console with a
//! Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the session store consumed by route guards. The backend
//! itself is an external service; everything here is browser-side.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
