//! Canopy session host.
//!
//! Mounts one feed session (both stores, the event bridge, and the
//! synthetic generator) and logs every toast until Ctrl-C.

use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{EnvFilter, fmt};

use canopy_core::config::AppConfig;
use canopy_core::result::AppResult;
use canopy_realtime::FeedSession;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Session error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment
fn load_configuration() -> AppResult<AppConfig> {
    match std::env::var("CANOPY_CONFIG") {
        Ok(path) => AppConfig::load_file(&path),
        Err(_) => {
            let env = std::env::var("CANOPY_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Mount the session and wait for Ctrl-C
async fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Canopy session");

    let session = FeedSession::start(&config);
    let mut toasts = session.notifications().subscribe_toasts();
    let mut unread = session.notifications().subscribe_unread();

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
                }
                break;
            }
            toast = toasts.recv() => match toast {
                Ok(toast) => tracing::info!(
                    category = %toast.category,
                    actor = toast.actor.as_deref().unwrap_or("-"),
                    "{}: {}",
                    toast.title,
                    toast.message
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Toast subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },
            changed = unread.changed() => {
                if changed.is_err() {
                    break;
                }
                let count = *unread.borrow_and_update();
                tracing::debug!(unread = count, "Unread count changed");
            }
        }
    }

    let delivered = session.shutdown().await?;
    tracing::info!(delivered, "Canopy session stopped");
    Ok(())
}
