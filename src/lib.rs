use leptos::*;
use wasm_bindgen::prelude::*;

pub mod alerts;
pub mod api;
mod app;
pub mod charts;
mod components;
pub mod config;
pub mod controller;
pub mod export;
pub mod kpi;
pub mod models;
pub mod state;
pub mod view;

#[cfg(test)]
mod testing;

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Energy Monitor");

    mount_to_body(|| view! { <app::App /> });
}
