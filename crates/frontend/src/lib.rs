//! Applicant "My Saved Jobs" screen, a Leptos client-side app.

pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Set up console logging and panic reporting, then mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Starting saved jobs client");

    leptos::mount::mount_to_body(app::App);
}
