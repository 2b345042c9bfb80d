//! Timer-driven synthetic notification generator.

use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::trace;

use canopy_core::config::GeneratorConfig;

use super::{IncomingNotification, NotificationSource};
use crate::formatter::{CANNED_EVENTS, CannedEvent};

/// Stand-in for a real push channel.
///
/// Every tick of a fixed interval runs an independent Bernoulli trial and,
/// on success, yields one entry drawn from a fixed pool. The first tick
/// fires one full period after construction.
#[derive(Debug)]
pub struct DemoSource {
    interval: Interval,
    probability: f64,
    pool: &'static [CannedEvent],
    rng: StdRng,
}

impl DemoSource {
    /// Create a generator seeded from the thread RNG.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a generator with a fixed seed.
    pub fn seeded(config: &GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GeneratorConfig, rng: StdRng) -> Self {
        let period = Duration::from_secs(config.interval_seconds.max(1));
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let probability = if config.probability.is_finite() {
            config.probability.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            interval,
            probability,
            pool: CANNED_EVENTS,
            rng,
        }
    }

    /// Replace the canned pool.
    pub fn with_pool(mut self, pool: &'static [CannedEvent]) -> Self {
        self.pool = pool;
        self
    }
}

#[async_trait]
impl NotificationSource for DemoSource {
    fn name(&self) -> &str {
        "demo"
    }

    /// Never exhausted unless the pool is empty.
    async fn next(&mut self) -> Option<IncomingNotification> {
        if self.pool.is_empty() {
            return None;
        }

        loop {
            self.interval.tick().await;

            if !self.rng.random_bool(self.probability) {
                trace!("Generator tick produced nothing");
                continue;
            }

            if let Some(event) = self.pool.choose(&mut self.rng) {
                return Some(event.to_incoming());
            }
        }
    }
}
