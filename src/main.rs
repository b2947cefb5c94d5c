//! Activity List Frontend Entry Point

mod models;
mod activity_list;
mod form;
mod config;
mod persistence;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] console logger not installed: {}", err).into());
    }
    log::info!("starting, log level {}", config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
