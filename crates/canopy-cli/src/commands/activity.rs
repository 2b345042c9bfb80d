//! Admin activity log CLI commands.

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use canopy_core::error::{AppError, ErrorKind};
use canopy_core::result::AppResult;
use canopy_entity::activity::{Activity, ActivityCategory};
use canopy_service::{ActivityLogStore, ExportFormat};

use crate::output::{self, OutputFormat};

/// Arguments for activity commands
#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Activity subcommand
    #[command(subcommand)]
    pub command: ActivityCommand,
}

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// Comma-separated values with a header row
    Csv,
    /// JSON array
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => Self::Csv,
            ExportFormatArg::Json => Self::Json,
        }
    }
}

/// Activity subcommands
#[derive(Debug, Subcommand)]
pub enum ActivityCommand {
    /// List the activity log
    List {
        /// Only this category (tree, donation, user, contact, admin)
        #[arg(short, long)]
        category: Option<ActivityCategory>,
        /// Case-insensitive text search over action, user and details
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show today's count and the per-category breakdown
    Stats,
    /// Export the activity log
    Export {
        /// File format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormatArg,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Clear the activity log
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Activity display row
#[derive(Debug, Serialize, Tabled)]
struct ActivityRow {
    /// Local time
    time: String,
    /// Category
    category: String,
    /// Action
    action: String,
    /// User
    user: String,
    /// Details
    details: String,
}

impl From<&Activity> for ActivityRow {
    fn from(a: &Activity) -> Self {
        Self {
            time: output::local_time(a.timestamp()),
            category: a.category().to_string(),
            action: a.action().to_string(),
            user: a.user().to_string(),
            details: a.details().to_string(),
        }
    }
}

/// Per-category count row
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Category
    category: String,
    /// Records
    count: usize,
}

/// Execute activity commands
pub async fn execute(
    args: &ActivityArgs,
    config_path: &str,
    format: OutputFormat,
) -> AppResult<()> {
    let config = super::load_config(config_path)?;
    let store = ActivityLogStore::new(&config.activity);

    match &args.command {
        ActivityCommand::List { category, search } => {
            let mut entries = match search {
                Some(query) => store.search(query),
                None => store.activities(),
            };
            if let Some(c) = category {
                entries.retain(|a| a.category() == *c);
            }

            let rows: Vec<ActivityRow> = entries.iter().map(ActivityRow::from).collect();
            output::print_list(&rows, format);
        }
        ActivityCommand::Stats => {
            let stats = store.stats();
            match format {
                OutputFormat::Json => output::print_item(&stats, format),
                OutputFormat::Table => {
                    output::print_kv("Total", &stats.total.to_string());
                    output::print_kv("Today", &stats.today.to_string());

                    let rows: Vec<CategoryRow> = stats
                        .by_category
                        .iter()
                        .map(|(category, count)| CategoryRow {
                            category: category.to_string(),
                            count: *count,
                        })
                        .collect();
                    output::print_list(&rows, format);
                }
            }
        }
        ActivityCommand::Export {
            format: export_format,
            output: out_path,
        } => {
            let export_format = ExportFormat::from(*export_format);
            match out_path {
                Some(path) => {
                    let written = store.export_to(path, export_format).await?;
                    output::print_success(&format!(
                        "Exported {written} activities to '{path}'"
                    ));
                }
                None => print!("{}", store.export(export_format)?),
            }
        }
        ActivityCommand::Clear { yes } => {
            let confirmed = *yes
                || dialoguer::Confirm::new()
                    .with_prompt(format!("Delete all {} activity log entries?", store.len()))
                    .default(false)
                    .interact()
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Io, format!("Input error: {e}"), e)
                    })?;

            if !confirmed {
                output::print_warning("Aborted, activity log left unchanged");
                return Ok(());
            }

            let removed = store.clear_activities();
            output::print_success(&format!("Cleared {removed} activities"));
        }
    }

    Ok(())
}
