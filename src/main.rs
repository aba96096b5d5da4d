#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tokensmith_core::{ApiConfig, DEFAULT_API_BASE};

/// Global API configuration, set from command line
static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Get the API configuration (set from command line or default)
pub fn get_api_config() -> ApiConfig {
    API_CONFIG.get().cloned().unwrap_or_default()
}

/// Tokensmith - custom MTG token creator
#[derive(Parser, Debug)]
#[command(name = "tokensmith-desktop")]
#[command(about = "Tokensmith - forge custom MTG tokens from any card")]
struct Args {
    /// Base URL of the token service
    #[arg(short, long, default_value = DEFAULT_API_BASE)]
    api_base: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let api_config = ApiConfig::new(&args.api_base);

    tracing::info!("Starting with token service at {}", api_config.base_url);
    let _ = API_CONFIG.set(api_config);

    // Tall window, card-table proportions
    let window_width = 760.0;
    let window_height = 920.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tokensmith")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
