#![allow(warnings)]
//! Todo Board Frontend Entry Point

mod models;
mod item_store;
mod containers;
mod drag;
mod persistence;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::default();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    tracing::info!("[APP] starting, storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
