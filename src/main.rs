//! Reel - serve a short-video SPA and its mock data API from one binary.

mod asset;
mod cli;
mod config;
mod core;
mod dataset;
mod logger;
mod media;
mod page;
mod server;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ServerConfig;
use dataset::Dataset;
use server::AppState;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ServerConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("serve"; "config {}", path.display());
    }

    match &cli.command {
        Some(Commands::Scan { pretty }) => cli::scan::run_scan(&config.media.root, *pretty),
        Some(Commands::Serve { .. }) | None => serve(config),
    }
}

/// Resolve assets, load data once, then serve until Ctrl+C.
fn serve(config: ServerConfig) -> Result<()> {
    let assets = match asset::resolve(&config.assets.static_dir) {
        Ok(assets) => assets,
        Err(e) => {
            log!("error"; "{}", e);
            std::process::exit(1);
        }
    };
    log!("serve"; "static: {}", assets.describe());
    log!("media"; "root: {}", config.media.root.display());

    let dataset = Dataset::load(assets.as_ref());

    let bound = server::bind_server(&config)?;
    let state = Arc::new(AppState::new(config, assets, dataset));
    bound.run(state)
}
