//! CLI command definitions and dispatch.

pub mod activity;
pub mod config;
pub mod notifications;
pub mod watch;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use canopy_core::config::AppConfig;
use canopy_core::result::AppResult;

/// Canopy: notification feed and admin activity log
///
/// Every invocation is a fresh session seeded with demo data.
#[derive(Debug, Parser)]
#[command(name = "canopy", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Notification feed
    Notifications(notifications::NotificationsArgs),
    /// Admin activity log
    Activity(activity::ActivityArgs),
    /// Mount a live feed session and print toasts as they arrive
    Watch(watch::WatchArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> AppResult<()> {
        tracing::debug!(config = %self.config, "Executing command");

        match &self.command {
            Commands::Notifications(args) => {
                notifications::execute(args, &self.config, self.format).await
            }
            Commands::Activity(args) => activity::execute(args, &self.config, self.format).await,
            Commands::Watch(args) => watch::execute(args, &self.config).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> AppResult<AppConfig> {
    AppConfig::load_file(config_path)
}
