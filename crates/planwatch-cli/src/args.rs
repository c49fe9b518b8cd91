use std::{path::PathBuf, time::Duration};

use clap::{value_parser, Args as ClapArgs, Parser, Subcommand};
use planwatch_core::MonitorConfig;

/// Latest execution status of orchestration plans, per environment
///
/// Planwatch fetches the plan catalog and the recent execution history of
/// the orchestration platform, keeps the most recent execution of every
/// plan and shows the statuses of one environment. Settings come from an
/// optional JSON config file; flags given here take precedence.
#[derive(Parser)]
#[command(version, about, name = "planwatch")]
pub struct Args {
    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/planwatch/config.json when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Platform region used to derive the API host (e.g. eu, us, ap)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Explicit API base URL, overrides the region
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API bearer token
    #[arg(long, global = true, env = "PLANWATCH_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Environment whose plan statuses are shown
    #[arg(short, long, global = true)]
    pub environment: Option<String>,

    /// Days of execution history to consider
    #[arg(long, global = true, value_parser = value_parser!(u32).range(1..))]
    pub window_days: Option<u32>,

    /// Execution history page size
    #[arg(long, global = true, value_parser = value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Overlays the flags that were given onto a loaded configuration.
    pub fn apply_to(&self, config: &mut MonitorConfig) {
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(token) = &self.token {
            config.api_token = Some(token.clone());
        }
        if let Some(environment) = &self.environment {
            config.target_environment = environment.clone();
        }
        if let Some(window_days) = self.window_days {
            config.window_days = window_days;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
    }
}

/// Available commands for the Planwatch CLI
///
/// Without a command, `status` is run.
#[derive(Subcommand)]
pub enum Commands {
    /// Refresh once and show the latest status of every plan
    #[command(alias = "s")]
    Status,
    /// List the plan catalog with each plan's environment
    #[command(aliases = ["p", "ls"])]
    Plans,
    /// Refresh periodically until interrupted
    #[command(alias = "w")]
    Watch(WatchArgs),
}

/// Refresh periodically, keeping the last good table on failures
#[derive(ClapArgs)]
pub struct WatchArgs {
    /// Seconds between refreshes
    #[arg(
        short,
        long,
        default_value_t = 60,
        value_parser = value_parser!(u64).range(1..)
    )]
    pub interval: u64,
}

impl WatchArgs {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}
