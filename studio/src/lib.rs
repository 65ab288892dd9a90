//! # studio
//!
//! Leptos + WASM frontend for the livestream overlay studio. Replaces the
//! original React single-file editor with a Rust-native UI layer on top of
//! the `overlay` state engine.
//!
//! This crate contains the page, components, application state, the REST
//! boundary to the overlay backend, and the Hls.js bindings for the live
//! stream. Everything browser-bound sits behind the `csr` feature so the
//! default build compiles and tests natively.

pub mod app;
pub mod components;
pub mod consts;
pub mod media;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: mount the studio into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
