//! Task Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod format;
mod models;
mod services;
mod session;
mod shell;
mod storage;
mod store;
mod theme;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    if !console_logger::init(config.log_level) {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
    mount_to_body(move || view! { <App config=config /> });
}
