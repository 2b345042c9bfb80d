//! Derived aggregates over an event log.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use canopy_entity::record::{EventRecord, RecordCategory};

/// Counts derived from a set of records. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordStats<C: RecordCategory> {
    /// Total number of records.
    pub total: usize,
    /// Records whose timestamp falls on the current calendar day.
    pub today: usize,
    /// Records per category. Every category is present, zero-filled.
    pub by_category: BTreeMap<C, usize>,
}

impl<C: RecordCategory> RecordStats<C> {
    /// Compute the aggregates for `records` as seen at `now`.
    ///
    /// "Today" is the calendar date of `now` in `now`'s time zone.
    pub fn compute<'a, R, Tz>(records: impl IntoIterator<Item = &'a R>, now: &DateTime<Tz>) -> Self
    where
        R: EventRecord<Category = C> + 'a,
        Tz: TimeZone,
    {
        let tz = now.timezone();
        let today_date = now.date_naive();

        let mut by_category: BTreeMap<C, usize> = C::ALL.iter().map(|c| (*c, 0)).collect();
        let mut total = 0;
        let mut today = 0;

        for record in records {
            total += 1;
            if record.timestamp().with_timezone(&tz).date_naive() == today_date {
                today += 1;
            }
            *by_category.entry(record.category()).or_insert(0) += 1;
        }

        Self {
            total,
            today,
            by_category,
        }
    }

    /// Count for a single category.
    pub fn count_for(&self, category: C) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_entity::activity::{Activity, ActivityCategory};
    use chrono::{Duration, Utc};

    #[test]
    fn test_today_count_ignores_order() {
        let now = Utc::now();
        let yesterday = now - Duration::days(1);

        let records = vec![
            Activity::at(ActivityCategory::Tree, "a", "u", "", yesterday),
            Activity::at(ActivityCategory::Tree, "b", "u", "", now),
            Activity::at(ActivityCategory::User, "c", "u", "", yesterday),
            Activity::at(ActivityCategory::Admin, "d", "u", "", now),
            Activity::at(ActivityCategory::Admin, "e", "u", "", now),
        ];

        let stats = RecordStats::compute(&records, &now);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.today, 3);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(RecordStats::compute(&reversed, &now).today, 3);
    }

    #[test]
    fn test_breakdown_zero_fills_and_sums_to_total() {
        let now = Utc::now();
        let records = vec![
            Activity::at(ActivityCategory::Donation, "a", "u", "", now),
            Activity::at(ActivityCategory::Donation, "b", "u", "", now),
        ];

        let stats = RecordStats::compute(&records, &now);
        assert_eq!(stats.by_category.len(), ActivityCategory::ALL.len());
        assert_eq!(stats.count_for(ActivityCategory::Donation), 2);
        assert_eq!(stats.count_for(ActivityCategory::Contact), 0);
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<Activity> = Vec::new();
        let stats = RecordStats::compute(&records, &Utc::now());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.today, 0);
    }
}
