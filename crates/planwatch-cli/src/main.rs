//! Planwatch CLI Application
//!
//! Command-line interface showing the latest execution status of
//! orchestration plans for one environment.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use planwatch_core::{MonitorBuilder, MonitorConfig};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = MonitorConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    args.apply_to(&mut config);

    let monitor = MonitorBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to initialize monitor")?;

    let renderer = TerminalRenderer::new(!args.no_color);

    info!("Planwatch started");

    let cli = Cli::new(monitor, renderer);
    match args.command {
        Some(Commands::Status) | None => cli.status().await,
        Some(Commands::Plans) => cli.plans().await,
        Some(Commands::Watch(watch)) => cli.watch(watch.interval()).await,
    }
}
