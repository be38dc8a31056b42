//! # client
//!
//! Leptos + WASM frontend for MiniBill.
//!
//! The crate holds the session state and route guard, the REST client for
//! the billing backend, and the pages built on them. It is server-rendered by
//! the `minibill` host binary (`ssr` feature) and hydrated in the browser
//! (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
