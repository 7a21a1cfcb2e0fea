//! # message-board
//!
//! Leptos + WASM client for a minimal authenticated message board.
//! Two pages: a login form that exchanges credentials for a tab-scoped
//! session flag, and a board page that posts and lists short messages
//! against a small JSON API.
//!
//! The crate builds two ways: natively without features (pure logic only,
//! which is how the unit tests run) and for the browser with the `csr`
//! feature, which turns on real DOM mounting, `sessionStorage`, and
//! `gloo-net` HTTP calls.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
