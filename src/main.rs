//! Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = AppConfig::load();
    let level = console_logger::parse_level(&config.log_level);
    if let Err(err) = console_logger::init(level, config.log_capacity) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    if let Some(problem) = problem {
        log::warn!("[CONFIG] using defaults: {problem}");
    }
    log::info!("[APP] starting, storage key {:?}", config.persist.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
