//! Admin activity log store.

use std::path::Path;

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

use canopy_core::AppResult;
use canopy_core::config::ActivityConfig;
use canopy_entity::activity::{Activity, ActivityCategory};

use crate::log::{EventLog, RecordStats};

use super::export::{ActivityExporter, ExportFormat};
use super::seed;

/// Aggregates shown above the admin activity table.
pub type ActivityStats = RecordStats<ActivityCategory>;

/// In-memory administrative audit trail for one session.
#[derive(Debug)]
pub struct ActivityLogStore {
    /// Activities, newest first.
    log: EventLog<Activity>,
    /// Export settings.
    exporter: ActivityExporter,
}

impl ActivityLogStore {
    /// Create a store from configuration, seeding demo data if enabled.
    pub fn new(config: &ActivityConfig) -> Self {
        let records = if config.seed_demo_data {
            seed::demo_activities(&Local::now())
        } else {
            Vec::new()
        };

        Self {
            log: EventLog::with_records(records),
            exporter: ActivityExporter::new(config.export_delimiter),
        }
    }

    /// Create a store holding `records` (newest first).
    pub fn with_activities(records: Vec<Activity>) -> Self {
        Self {
            log: EventLog::with_records(records),
            exporter: ActivityExporter::default(),
        }
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::with_activities(Vec::new())
    }

    /// Record an activity at the head of the log.
    pub fn add_activity(
        &self,
        category: ActivityCategory,
        action: impl Into<String>,
        user: impl Into<String>,
        details: impl Into<String>,
    ) -> Activity {
        let activity = Activity::new(category, action, user, details);
        self.log.prepend(activity.clone());

        debug!(
            id = %activity.id(),
            category = %category,
            action = activity.action(),
            "Activity recorded"
        );
        activity
    }

    /// Remove every activity. Returns how many were removed.
    ///
    /// Callers are expected to confirm with the operator first.
    pub fn clear_activities(&self) -> usize {
        let removed = self.log.clear();
        info!(removed, "Activity log cleared");
        removed
    }

    /// Every activity, newest first.
    pub fn activities(&self) -> Vec<Activity> {
        self.log.snapshot()
    }

    /// Activities of one category, newest first.
    pub fn by_category(&self, category: ActivityCategory) -> Vec<Activity> {
        self.log.filter(|a| a.category() == category)
    }

    /// Case-insensitive search across action, user, and details.
    pub fn search(&self, query: &str) -> Vec<Activity> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.activities();
        }
        self.log.filter(|a| {
            a.action().to_lowercase().contains(&needle)
                || a.user().to_lowercase().contains(&needle)
                || a.details().to_lowercase().contains(&needle)
        })
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Aggregates for the local calendar day.
    pub fn stats(&self) -> ActivityStats {
        self.stats_at(&Local::now())
    }

    /// Aggregates as seen at `now`.
    pub fn stats_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ActivityStats {
        self.log.read(|entries| RecordStats::compute(entries, now))
    }

    /// Render the whole log for download.
    pub fn export(&self, format: ExportFormat) -> AppResult<String> {
        self.exporter.render(format, &self.activities())
    }

    /// Write the whole log to `path`. Returns the number of records written.
    pub async fn export_to(
        &self,
        path: impl AsRef<Path>,
        format: ExportFormat,
    ) -> AppResult<usize> {
        let records = self.activities();
        self.exporter.write_to(path, format, &records).await
    }
}
