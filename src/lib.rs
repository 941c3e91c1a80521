//! # petclinic-client
//!
//! Leptos + WASM admin frontend for the veterinary clinic backend.
//!
//! Three roles (user, admin, superadmin) are decoded client-side from the
//! issued credential and gate both routing and per-page affordances. The
//! role gating here is a UX convenience only — the backend independently
//! enforces permissions on every request.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
