//! Message text for generated and bridged entries.

use canopy_entity::actor::Actor;
use canopy_entity::notification::NotificationCategory;

use crate::source::IncomingNotification;

/// One entry of the synthetic generator's fixed pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedEvent {
    /// Notification category.
    pub category: NotificationCategory,
    /// Actor display name.
    pub actor: &'static str,
    /// Actor avatar URL.
    pub avatar: Option<&'static str>,
    /// Display text.
    pub message: &'static str,
}

impl CannedEvent {
    /// Turn the canned entry into an incoming notification.
    pub fn to_incoming(&self) -> IncomingNotification {
        let mut actor = Actor::named(self.actor);
        if let Some(avatar) = self.avatar {
            actor = actor.with_avatar(avatar);
        }
        IncomingNotification::new(self.category, self.message, Some(actor))
    }
}

/// Pool the demo generator draws from.
pub const CANNED_EVENTS: &[CannedEvent] = &[
    CannedEvent {
        category: NotificationCategory::Tree,
        actor: "Noah Patel",
        avatar: Some("/avatars/noah.png"),
        message: "Noah Patel planted a Maple tree in Cedar Grove",
    },
    CannedEvent {
        category: NotificationCategory::Signup,
        actor: "Ava Johnson",
        avatar: None,
        message: "Ava Johnson joined the community",
    },
    CannedEvent {
        category: NotificationCategory::Comment,
        actor: "Lucas Martin",
        avatar: Some("/avatars/lucas.png"),
        message: "Lucas Martin commented on your Oak tree",
    },
    CannedEvent {
        category: NotificationCategory::Login,
        actor: "Mia Rossi",
        avatar: None,
        message: "Mia Rossi is back and planting",
    },
    CannedEvent {
        category: NotificationCategory::Profile,
        actor: "Ethan Kim",
        avatar: None,
        message: "Ethan Kim updated their profile",
    },
];

/// Builds message text for bridged domain events.
pub struct FeedFormatter;

impl FeedFormatter {
    /// Someone created an account.
    pub fn signed_up(name: &str) -> String {
        format!("{name} joined the community")
    }

    /// Someone signed in.
    pub fn logged_in(name: &str) -> String {
        format!("{name} signed in")
    }

    /// A tree was registered.
    pub fn tree_registered(planter: &str, species: &str, location: &str) -> String {
        format!("{planter} planted a new {species} tree in {location}")
    }

    /// A profile was edited.
    pub fn profile_updated(name: &str, changed_fields: &[String]) -> String {
        if changed_fields.is_empty() {
            format!("{name} updated their profile")
        } else {
            format!(
                "{name} updated their profile ({})",
                changed_fields.join(", ")
            )
        }
    }

    /// A comment was posted.
    pub fn comment_posted(name: &str, subject: &str) -> String {
        format!("{name} commented on {subject}")
    }

    /// Activity details for a tree registration.
    pub fn tree_details(species: &str, location: &str) -> String {
        format!("Registered a new {species} tree at {location}")
    }

    /// Activity details for a donation.
    pub fn donation_details(amount: f64, currency: &str) -> String {
        format!("{amount:.2} {}", currency.to_uppercase())
    }

    /// Activity details for a contact form submission.
    pub fn contact_details(name: &str, contact_type: &str) -> String {
        format!("New {contact_type} inquiry from {name}")
    }

    /// Activity details for a newly published resource.
    pub fn resource_details(title: &str, resource_type: &str) -> String {
        format!("Published {resource_type} '{title}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_covers_every_category() {
        use canopy_entity::record::RecordCategory;
        for category in NotificationCategory::ALL {
            assert!(CANNED_EVENTS.iter().any(|e| e.category == *category));
        }
    }

    #[test]
    fn test_profile_fields_listed() {
        let msg = FeedFormatter::profile_updated("Emma", &["bio".to_string(), "avatar".to_string()]);
        assert_eq!(msg, "Emma updated their profile (bio, avatar)");
    }

    #[test]
    fn test_donation_details() {
        assert_eq!(FeedFormatter::donation_details(25.0, "usd"), "25.00 USD");
    }
}
