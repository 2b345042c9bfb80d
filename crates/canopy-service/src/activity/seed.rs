//! Fixed demo activities loaded at session start.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Timelike, Utc};

use canopy_entity::activity::{Activity, ActivityCategory};

/// Five demo activities, newest first: two on the calendar day of `now`
/// and three on the day before, both in `now`'s time zone.
pub fn demo_activities<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<Activity> {
    let utc_now = now.with_timezone(&Utc);

    // Stay on today's date however close to midnight `now` is.
    let since_midnight = i64::from(now.time().num_seconds_from_midnight());
    let earlier_today = utc_now - Duration::seconds(since_midnight.min(2 * 3600) / 2);

    let yesterday_at = |hour: u32, minute: u32| -> DateTime<Utc> {
        let fallback = utc_now - Duration::days(1);
        let Some(date) = now.date_naive().pred_opt() else {
            return fallback;
        };
        let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
            return fallback;
        };
        now.timezone()
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(fallback)
    };

    vec![
        Activity::at(
            ActivityCategory::Tree,
            "Tree Planted",
            "Emma Wilson",
            "Registered 3 Oak trees at Riverside Park",
            utc_now,
        ),
        Activity::at(
            ActivityCategory::Donation,
            "Donation Received",
            "James Miller",
            "250.00 USD sponsorship paid by card",
            earlier_today,
        ),
        Activity::at(
            ActivityCategory::User,
            "User Registered",
            "Liam Chen",
            "New volunteer account created",
            yesterday_at(17, 30),
        ),
        Activity::at(
            ActivityCategory::Contact,
            "Contact Message",
            "Olivia Brown",
            "Sponsor inquiry from GreenCorp",
            yesterday_at(14, 0),
        ),
        Activity::at(
            ActivityCategory::Admin,
            "Project Updated",
            "Admin",
            "Raised the Riverside Park planting goal to 500 trees",
            yesterday_at(9, 0),
        ),
    ]
}
