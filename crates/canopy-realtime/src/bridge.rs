//! Domain event → notification and activity mapping.
//!
//! Sibling components report what happened either as a [`DomainEvent`] or
//! by handing over the backend record they just wrote. The bridge is the
//! only place that decides which store hears about what.

use std::sync::Arc;

use tracing::debug;
use validator::Validate;

use canopy_core::result::AppResult;
use canopy_core::events::{AdminEvent, DomainEvent, EventPayload, PlantingEvent, UserEvent};
use canopy_entity::activity::ActivityCategory;
use canopy_entity::actor::Actor;
use canopy_entity::backend::{ContactMessage, EducationalResource, Sponsorship, Tree};
use canopy_entity::notification::NotificationCategory;
use canopy_service::{ActivityLogStore, NotificationStore};

use crate::formatter::FeedFormatter;

/// Bridges domain events into the two stores.
#[derive(Debug, Clone)]
pub struct EventBridge {
    /// User-facing feed.
    notifications: Arc<NotificationStore>,
    /// Admin audit trail.
    activity: Arc<ActivityLogStore>,
}

fn actor(name: &str, avatar: Option<&String>) -> Actor {
    let actor = Actor::named(name);
    match avatar {
        Some(url) => actor.with_avatar(url.as_str()),
        None => actor,
    }
}

impl EventBridge {
    /// Create a new event bridge
    pub fn new(notifications: Arc<NotificationStore>, activity: Arc<ActivityLogStore>) -> Self {
        Self {
            notifications,
            activity,
        }
    }

    /// Route a domain event to the stores that record it.
    pub fn on_event(&self, event: &DomainEvent) {
        debug!(event_id = %event.id, kind = event.kind(), "Bridging domain event");

        match &event.payload {
            EventPayload::User(user) => self.on_user_event(user),
            EventPayload::Planting(planting) => self.on_planting_event(planting),
            EventPayload::Admin(admin) => self.on_admin_event(admin),
        }
    }

    fn on_user_event(&self, event: &UserEvent) {
        match event {
            UserEvent::SignedUp { name, avatar } => {
                self.notifications.add_notification(
                    NotificationCategory::Signup,
                    FeedFormatter::signed_up(name),
                    Some(actor(name, avatar.as_ref())),
                );
                self.activity.add_activity(
                    ActivityCategory::User,
                    "User Registered",
                    name.as_str(),
                    "New account created",
                );
            }
            UserEvent::LoggedIn { name, avatar } => {
                self.notifications.add_notification(
                    NotificationCategory::Login,
                    FeedFormatter::logged_in(name),
                    Some(actor(name, avatar.as_ref())),
                );
            }
            UserEvent::ProfileUpdated {
                name,
                avatar,
                changed_fields,
            } => {
                self.notifications.add_notification(
                    NotificationCategory::Profile,
                    FeedFormatter::profile_updated(name, changed_fields),
                    Some(actor(name, avatar.as_ref())),
                );
            }
            UserEvent::CommentPosted {
                name,
                avatar,
                subject,
            } => {
                self.notifications.add_notification(
                    NotificationCategory::Comment,
                    FeedFormatter::comment_posted(name, subject),
                    Some(actor(name, avatar.as_ref())),
                );
            }
        }
    }

    fn on_planting_event(&self, event: &PlantingEvent) {
        match event {
            PlantingEvent::TreeRegistered {
                planter,
                avatar,
                species,
                location,
                ..
            } => {
                self.notifications.add_notification(
                    NotificationCategory::Tree,
                    FeedFormatter::tree_registered(planter, species, location),
                    Some(actor(planter, avatar.as_ref())),
                );
                self.activity.add_activity(
                    ActivityCategory::Tree,
                    "Tree Planted",
                    planter.as_str(),
                    FeedFormatter::tree_details(species, location),
                );
            }
            PlantingEvent::DonationReceived {
                donor,
                amount,
                currency,
            } => {
                self.activity.add_activity(
                    ActivityCategory::Donation,
                    "Donation Received",
                    donor.as_str(),
                    FeedFormatter::donation_details(*amount, currency),
                );
            }
        }
    }

    fn on_admin_event(&self, event: &AdminEvent) {
        match event {
            AdminEvent::ContactReceived { name, contact_type } => {
                self.activity.add_activity(
                    ActivityCategory::Contact,
                    "Contact Message",
                    name.as_str(),
                    FeedFormatter::contact_details(name, contact_type),
                );
            }
            AdminEvent::ActionTaken {
                admin,
                action,
                details,
            } => {
                self.activity.add_activity(
                    ActivityCategory::Admin,
                    action.as_str(),
                    admin.as_str(),
                    details.as_str(),
                );
            }
        }
    }

    /// Handle a tree registered through the planting form.
    pub fn on_tree_registered(&self, tree: &Tree, planter: &Actor) -> AppResult<()> {
        tree.validate()?;

        self.on_planting_event(&PlantingEvent::TreeRegistered {
            planter: planter.name.clone(),
            avatar: planter.avatar.clone(),
            species: tree.species.clone(),
            location: tree.location.clone(),
            planted_on: tree.planted_on,
        });
        Ok(())
    }

    /// Handle a sponsorship update from the payment flow.
    ///
    /// Only completed sponsorships are logged. Returns whether an entry
    /// was recorded.
    pub fn on_sponsorship(&self, sponsorship: &Sponsorship) -> AppResult<bool> {
        sponsorship.validate()?;

        if !sponsorship.is_completed() {
            debug!(
                id = %sponsorship.id,
                status = ?sponsorship.status,
                "Sponsorship not completed, skipping"
            );
            return Ok(false);
        }

        self.on_planting_event(&PlantingEvent::DonationReceived {
            donor: sponsorship.donor_name.clone(),
            amount: sponsorship.amount,
            currency: sponsorship.currency.clone(),
        });
        Ok(true)
    }

    /// Handle a submitted contact form.
    pub fn on_contact_message(&self, message: &ContactMessage) -> AppResult<()> {
        message.validate()?;

        self.on_admin_event(&AdminEvent::ContactReceived {
            name: message.name.clone(),
            contact_type: message.contact_type.as_str().to_string(),
        });
        Ok(())
    }

    /// Handle an educational resource published from the back-office.
    pub fn on_resource_published(
        &self,
        resource: &EducationalResource,
        admin: &str,
    ) -> AppResult<()> {
        resource.validate()?;

        self.on_admin_event(&AdminEvent::ActionTaken {
            admin: admin.to_string(),
            action: "Resource Published".to_string(),
            details: FeedFormatter::resource_details(&resource.title, resource.resource_type().as_str()),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::types::id::{ContactMessageId, ResourceId, SponsorshipId, TreeId, UserId};
    use canopy_entity::backend::{
        ContactStatus, ContactType, PaymentMethod, ResourceContent, SponsorshipStatus,
    };
    use chrono::{NaiveDate, Utc};

    fn bridge() -> (EventBridge, Arc<NotificationStore>, Arc<ActivityLogStore>) {
        let notifications = Arc::new(NotificationStore::empty(8));
        let activity = Arc::new(ActivityLogStore::empty());
        (
            EventBridge::new(notifications.clone(), activity.clone()),
            notifications,
            activity,
        )
    }

    fn sponsorship(status: SponsorshipStatus, amount: f64) -> Sponsorship {
        Sponsorship {
            id: SponsorshipId::new(),
            amount,
            currency: "USD".to_string(),
            donor_name: "James Miller".to_string(),
            donor_email: "james@example.org".to_string(),
            payment_method: PaymentMethod::Card,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_signup_writes_both_stores() {
        let (bridge, notifications, activity) = bridge();
        bridge.on_event(&DomainEvent::new(
            Some(UserId::new()),
            UserEvent::SignedUp {
                name: "Liam".to_string(),
                avatar: None,
            }
            .into(),
        ));

        assert_eq!(notifications.unread_count(), 1);
        assert_eq!(
            notifications.notifications()[0].category(),
            NotificationCategory::Signup
        );
        assert_eq!(activity.activities()[0].category(), ActivityCategory::User);
    }

    #[test]
    fn test_login_is_notification_only() {
        let (bridge, notifications, activity) = bridge();
        bridge.on_event(&DomainEvent::new(
            None,
            UserEvent::LoggedIn {
                name: "Mia".to_string(),
                avatar: Some("/avatars/mia.png".to_string()),
            }
            .into(),
        ));

        assert_eq!(notifications.len(), 1);
        assert!(activity.is_empty());
        let n = &notifications.notifications()[0];
        assert_eq!(n.actor().and_then(|a| a.avatar.as_deref()), Some("/avatars/mia.png"));
    }

    #[test]
    fn test_admin_action_is_activity_only() {
        let (bridge, notifications, activity) = bridge();
        bridge.on_event(&DomainEvent::new(
            None,
            AdminEvent::ActionTaken {
                admin: "Admin".to_string(),
                action: "Project Updated".to_string(),
                details: "Raised goal".to_string(),
            }
            .into(),
        ));

        assert!(notifications.is_empty());
        let a = &activity.activities()[0];
        assert_eq!(a.action(), "Project Updated");
        assert_eq!(a.user(), "Admin");
    }

    #[test]
    fn test_tree_registered() {
        let (bridge, notifications, activity) = bridge();
        let tree = Tree {
            id: TreeId::new(),
            owner_id: UserId::new(),
            species: "Oak".to_string(),
            location: "Riverside Park".to_string(),
            planted_on: NaiveDate::from_ymd_opt(2026, 4, 22).expect("date"),
            description: None,
            image_url: None,
            coordinates: None,
        };

        bridge
            .on_tree_registered(&tree, &Actor::named("Emma"))
            .expect("valid tree");
        assert_eq!(
            notifications.notifications()[0].message(),
            "Emma planted a new Oak tree in Riverside Park"
        );
        assert_eq!(activity.activities()[0].action(), "Tree Planted");
    }

    #[test]
    fn test_pending_sponsorship_skipped() {
        let (bridge, _, activity) = bridge();
        let recorded = bridge
            .on_sponsorship(&sponsorship(SponsorshipStatus::Pending, 25.0))
            .expect("valid");
        assert!(!recorded);
        assert!(activity.is_empty());
    }

    #[test]
    fn test_completed_sponsorship_logged() {
        let (bridge, _, activity) = bridge();
        assert!(
            bridge
                .on_sponsorship(&sponsorship(SponsorshipStatus::Completed, 25.0))
                .expect("valid")
        );
        assert_eq!(activity.activities()[0].details(), "25.00 USD");
    }

    #[test]
    fn test_invalid_sponsorship_rejected_without_write() {
        let (bridge, _, activity) = bridge();
        let err = bridge
            .on_sponsorship(&sponsorship(SponsorshipStatus::Completed, 0.0))
            .unwrap_err();
        assert_eq!(err.kind, canopy_core::error::ErrorKind::Validation);
        assert!(activity.is_empty());
    }

    #[test]
    fn test_contact_message() {
        let (bridge, _, activity) = bridge();
        let message = ContactMessage {
            id: ContactMessageId::new(),
            name: "Olivia".to_string(),
            email: "olivia@greencorp.example".to_string(),
            phone: None,
            message: "We would like to sponsor 200 trees.".to_string(),
            contact_type: ContactType::Sponsor,
            status: ContactStatus::Pending,
            created_at: Utc::now(),
        };

        bridge.on_contact_message(&message).expect("valid");
        let a = &activity.activities()[0];
        assert_eq!(a.category(), ActivityCategory::Contact);
        assert_eq!(a.details(), "New sponsor inquiry from Olivia");
    }

    fn resource(content: ResourceContent) -> EducationalResource {
        EducationalResource {
            id: ResourceId::new(),
            title: "Urban Forests".to_string(),
            description: "Why city trees matter".to_string(),
            category: "climate".to_string(),
            content,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_resource_published_is_activity_only() {
        let (bridge, notifications, activity) = bridge();
        let video = resource(ResourceContent::Video {
            video_url: "https://videos.example.org/urban-forests.mp4".to_string(),
        });

        bridge.on_resource_published(&video, "Admin").expect("valid");
        assert!(notifications.is_empty());
        let a = &activity.activities()[0];
        assert_eq!(a.category(), ActivityCategory::Admin);
        assert_eq!(a.action(), "Resource Published");
        assert_eq!(a.user(), "Admin");
        assert_eq!(a.details(), "Published video 'Urban Forests'");
    }

    #[test]
    fn test_resource_with_bad_url_rejected_without_write() {
        let (bridge, _, activity) = bridge();
        let guide = resource(ResourceContent::Guide {
            page_count: 8,
            file_url: "guide.pdf".to_string(),
        });

        let err = bridge.on_resource_published(&guide, "Admin").unwrap_err();
        assert_eq!(err.kind, canopy_core::error::ErrorKind::Validation);
        assert!(activity.is_empty());
    }
}
