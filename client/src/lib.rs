//! # client
//!
//! Leptos + WASM frontend for the RAG SaaS marketing site and dashboard
//! shell. Compiled to WASM for the browser (`hydrate` feature) and natively
//! by the server for SSR (`ssr` feature).
//!
//! This crate contains pages, components, the global session store, and the
//! auth-provider client that bridges the external identity service into the
//! reactive state layer.

#![recursion_limit = "256"]

pub mod app;
pub mod auth;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
