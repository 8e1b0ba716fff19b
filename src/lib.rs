//! # atrium-client
//!
//! Leptos + WASM frontend implementing the client side of the Atrium
//! account flow: login, registration, password change, and profile viewing.
//!
//! The session (token + user) lives in a single context-provided handle,
//! persists to `localStorage` as one serialized record, and is re-verified
//! against the auth API on a 15-minute timer plus whenever the token
//! changes. See `state::session` and `net::validator`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
