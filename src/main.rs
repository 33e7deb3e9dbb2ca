//! Product Search: desktop product catalog search viewer
//!
//! Loads a static product catalog once at startup, then filters it by
//! case-insensitive name substring on explicit search.
//!
//! Usage:
//!   product-search              - Run against ./products.json
//!   product-search <CATALOG>    - Run against a catalog path or URL
//!   product-search help         - Show help

mod app;
mod catalog;
mod search;
mod ui;

use std::env;

use app::App;
use catalog::loader::CatalogSource;
use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Catalog location used when none is given on the command line.
const DEFAULT_CATALOG: &str = "products.json";

fn main() -> iced::Result {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("help" | "--help" | "-h") => {
            print_help();
            Ok(())
        }
        location => run(CatalogSource::parse(location.unwrap_or(DEFAULT_CATALOG))),
    }
}

fn print_help() {
    println!("Product Search - product catalog search viewer\n");
    println!("Usage: product-search [catalog]\n");
    println!("Arguments:");
    println!("  (none)      Load ./{DEFAULT_CATALOG}");
    println!("  <catalog>   Load a catalog from a file path or http(s) URL");
    println!("  help        Show this help message");
    println!("\nSet RUST_LOG=product_search=debug for diagnostics.");
}

fn run(source: CatalogSource) -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    tracing::info!("loading product catalog from {source}");

    iced::application("Product Search", App::update, App::view)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(520.0, 680.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || App::boot(source))
}
