//! Todo App Frontend Entry Point

mod app;
mod components;
mod config;
mod edit_state;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let level = loaded
        .as_ref()
        .map(AppConfig::level_filter)
        .unwrap_or(log::LevelFilter::Info);
    logging::init(level);

    let config = loaded.unwrap_or_else(|err| {
        log::error!("[CONFIG] {}; using defaults", err);
        AppConfig::default()
    });
    log::info!("[APP] starting with {} todos", config.seed.len());

    mount_to_body(move || view! { <App config=config /> });
}
