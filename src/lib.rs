//! # openfeast-client
//!
//! Leptos + WASM frontend for the Open Feast free-food sharing service.
//!
//! This crate is presentation and form-submission glue: it lists food
//! spots, posts new ones with a photo and a captured GPS location, and
//! forwards "finished" votes. All business rules (proximity validation,
//! vote counting, status transitions, image storage) live in a separate
//! backend reached over REST; see `net::api` for the contract.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
