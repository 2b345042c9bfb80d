//! Shared test helpers for integration tests.

use canopy_core::config::{AppConfig, GeneratorConfig};

/// Configuration with the generator switched off.
pub fn quiet_config() -> AppConfig {
    AppConfig {
        generator: GeneratorConfig {
            enabled: false,
            ..GeneratorConfig::default()
        },
        ..AppConfig::default()
    }
}

/// Configuration with empty stores and a generator that fires every tick.
#[allow(dead_code)]
pub fn eager_generator_config(interval_seconds: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.notifications.seed_demo_data = false;
    config.activity.seed_demo_data = false;
    config.generator.interval_seconds = interval_seconds;
    config.generator.probability = 1.0;
    config
}
