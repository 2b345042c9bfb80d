//! Fixed demo notifications loaded at session start.

use chrono::{DateTime, Duration, Utc};

use canopy_entity::actor::Actor;
use canopy_entity::notification::{Notification, NotificationCategory};

/// Demo notifications relative to `now`, newest first.
///
/// The two most recent are unread, the rest are read.
pub fn demo_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification::at(
            NotificationCategory::Tree,
            "Emma Wilson planted 3 Oak trees in Riverside Park",
            Some(Actor::named("Emma Wilson").with_avatar("/avatars/emma.png")),
            now - Duration::minutes(5),
        ),
        Notification::at(
            NotificationCategory::Signup,
            "Liam Chen joined the community",
            Some(Actor::named("Liam Chen")),
            now - Duration::hours(1),
        ),
        Notification::at(
            NotificationCategory::Comment,
            "Sofia Garcia commented on your Maple tree",
            Some(Actor::named("Sofia Garcia").with_avatar("/avatars/sofia.png")),
            now - Duration::hours(3),
        )
        .into_read(),
        Notification::at(
            NotificationCategory::Profile,
            "Your profile was updated",
            None,
            now - Duration::days(1),
        )
        .into_read(),
        Notification::at(
            NotificationCategory::Login,
            "New sign-in to your account",
            None,
            now - Duration::days(2),
        )
        .into_read(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_newest_first() {
        let seed = demo_notifications(Utc::now());
        assert!(seed.windows(2).all(|w| w[0].timestamp() >= w[1].timestamp()));
    }

    #[test]
    fn test_seed_unread_count() {
        let seed = demo_notifications(Utc::now());
        assert_eq!(seed.iter().filter(|n| n.is_unread()).count(), 2);
    }
}
