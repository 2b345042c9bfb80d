//! Live feed session command.

use std::time::Duration;

use clap::Args;
use tokio::sync::broadcast::error::RecvError;

use canopy_core::error::AppError;
use canopy_core::result::AppResult;
use canopy_realtime::FeedSession;

use crate::output;

/// Arguments for the watch command
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// How long to keep the session mounted
    #[arg(short, long, default_value = "120")]
    pub seconds: u64,
    /// Override the generator tick interval in seconds
    #[arg(short, long)]
    pub interval: Option<u64>,
    /// Override the per-tick probability
    #[arg(short, long)]
    pub probability: Option<f64>,
}

/// Execute the watch command
pub async fn execute(args: &WatchArgs, config_path: &str) -> AppResult<()> {
    let mut config = super::load_config(config_path)?;
    config.generator.enabled = true;
    if let Some(interval) = args.interval {
        config.generator.interval_seconds = interval.max(1);
    }
    if let Some(probability) = args.probability {
        if !(0.0..=1.0).contains(&probability) {
            return Err(AppError::validation(format!(
                "Probability must be within [0, 1], got {probability}"
            )));
        }
        config.generator.probability = probability;
    }

    let session = FeedSession::start(&config);
    let mut toasts = session.notifications().subscribe_toasts();

    output::print_success(&format!(
        "Watching for {}s (tick every {}s, p={}). Press Ctrl-C to stop.",
        args.seconds, config.generator.interval_seconds, config.generator.probability
    ));

    let deadline = tokio::time::sleep(Duration::from_secs(args.seconds));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = tokio::signal::ctrl_c() => break,
            toast = toasts.recv() => match toast {
                Ok(toast) => println!(
                    "[{}] {}: {}  (unread: {})",
                    output::local_time(toast.created_at),
                    toast.title,
                    toast.message,
                    session.notifications().unread_count()
                ),
                Err(RecvError::Lagged(skipped)) => {
                    output::print_warning(&format!("Missed {skipped} toasts"));
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    let delivered = session.shutdown().await?;
    output::print_success(&format!("Session closed, {delivered} notifications generated"));
    Ok(())
}
