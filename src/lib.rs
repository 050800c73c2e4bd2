//! # tasks-client
//!
//! Leptos + WASM single-page client for the task-management API.
//! Email-based login, a task list with create/edit/delete/toggle-complete,
//! and a session layer that owns the bearer token lifecycle: persisting it,
//! attaching it to outgoing requests, reacting to 401 responses, and gating
//! navigation between the login and task views.
//!
//! Browser-only code (fetch, localStorage, timers) is gated behind the
//! `hydrate` feature with native stubs, so the session and network logic
//! stays unit-testable on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point that mounts the application in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
