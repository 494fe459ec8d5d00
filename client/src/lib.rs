//! # client
//!
//! Leptos + WASM single-page client for the Drive file service.
//!
//! This crate contains the pages, components, browser transport, and
//! `localStorage` session store. Request building, route guarding, and
//! dashboard state transitions come from the `drive` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
