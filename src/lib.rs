//! Browser client for StreamLance: a single-page app that signs freelancers
//! in, stores up to three category preferences and shows gig recommendations.
//!
//! Everything below `app`/`pages`/`components` is plain Rust and runs under
//! native `cargo test`; the Leptos layer only projects [`state::AppModel`]
//! into the DOM.

pub mod api;
mod app;
mod components;
pub mod config;
pub mod error;
mod logging;
pub mod models;
mod pages;
pub mod selection;
pub mod state;
pub mod view;

#[cfg(test)]
mod testing;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EnvConfig::from_window();
    logging::init(config.level_filter());
    log::info!("streamlance: api at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
