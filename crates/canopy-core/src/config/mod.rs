//! Application configuration schemas.
//!
//! Configuration is merged from optional TOML files and `CANOPY__`
//! environment variables via the `config` crate. Every field carries a
//! default, so an empty source set yields [`AppConfig::default`].

pub mod feed;
pub mod logging;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

pub use self::feed::{ActivityConfig, GeneratorConfig, NotificationsConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CANOPY";

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Notification feed settings.
    #[serde(default)]
    #[validate(nested)]
    pub notifications: NotificationsConfig,
    /// Synthetic notification generator settings.
    #[serde(default)]
    #[validate(nested)]
    pub generator: GeneratorConfig,
    /// Admin activity log settings.
    #[serde(default)]
    #[validate(nested)]
    pub activity: ActivityConfig,
}

impl AppConfig {
    /// Load configuration for an environment.
    ///
    /// Merges `config/default`, then `config/{env}`, then environment
    /// variables prefixed with `CANOPY__`. Missing files are skipped.
    pub fn load(env: &str) -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        Self::finish(builder)
    }

    /// Load configuration from a single file plus environment overrides.
    pub fn load_file(path: &str) -> AppResult<Self> {
        let builder =
            config::Config::builder().add_source(config::File::with_name(path).required(false));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> AppResult<Self> {
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;

        debug!(
            generator_enabled = parsed.generator.enabled,
            interval_seconds = parsed.generator.interval_seconds,
            "Configuration loaded"
        );
        Ok(parsed)
    }
}
