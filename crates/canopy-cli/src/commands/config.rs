//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use canopy_core::result::AppResult;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file and environment overrides
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv(
                    "Logging",
                    &format!("{} ({})", config.logging.level, config.logging.format),
                );
                output::print_kv(
                    "Generator",
                    &if config.generator.enabled {
                        format!(
                            "every {}s, p={}",
                            config.generator.interval_seconds, config.generator.probability
                        )
                    } else {
                        "disabled".to_string()
                    },
                );
                output::print_kv(
                    "Seed notifications",
                    &config.notifications.seed_demo_data.to_string(),
                );
                output::print_kv("Seed activities", &config.activity.seed_demo_data.to_string());
                output::print_kv(
                    "Export delimiter",
                    &format!("{:?}", config.activity.export_delimiter),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
