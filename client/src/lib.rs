//! # fractal-client
//!
//! Leptos + WASM frontend that fetches a precomputed Newton fractal image and
//! draws it as an image plot.
//!
//! This crate contains the root app, the viewer component, its state machine,
//! network access to the fractal endpoint and failure diagnostics. The
//! `server` crate links it with the `ssr` feature to render the page shell;
//! the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
