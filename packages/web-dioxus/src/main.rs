//! Daily Tech Job Update - Dioxus web frontend
//!
//! A single page listing the latest tech job postings, read straight from the
//! Supabase project and loaded ten at a time as the reader scrolls.
//!
//! ## Running
//!
//! Development:
//! ```bash
//! SUPABASE_URL=... SUPABASE_ANON_KEY=... dx serve --features web
//! ```
//!
//! Production build (served from the `[web.app] base_path` in `Dioxus.toml`,
//! override with `--base-path`):
//! ```bash
//! SUPABASE_URL=... SUPABASE_ANON_KEY=... dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod pages;
mod routes;
mod state;

#[cfg(test)]
mod testing;

use config::AppConfig;

fn main() {
    init_logging();

    let loaded = AppConfig::load();
    match &loaded {
        Ok(config) => tracing::info!(
            supabase_url = %config.supabase_url,
            base_path = config.base_path.as_str(),
            "Configuration loaded"
        ),
        Err(err) => tracing::error!(error = %format!("{err:#}"), "Failed to load configuration"),
    }
    config::init(loaded.map_err(|err| format!("{err:#}")));

    // The router picks up the base path from the build config on its own.
    dioxus::launch(app::App);
}

#[cfg(feature = "web")]
fn init_logging() {
    dioxus::logger::initialize_default();
}

#[cfg(not(feature = "web"))]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,web_dioxus=debug,jobs_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
