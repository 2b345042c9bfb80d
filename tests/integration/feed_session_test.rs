//! Integration tests for a mounted feed session.

mod helpers;

use std::time::Duration;

use canopy_core::events::{DomainEvent, PlantingEvent, UserEvent};
use canopy_entity::actor::Actor;
use canopy_entity::notification::NotificationCategory;
use canopy_realtime::{ChannelSource, FeedSession, IncomingNotification};

#[tokio::test]
async fn test_notification_scenario_on_empty_store() {
    let mut config = helpers::quiet_config();
    config.notifications.seed_demo_data = false;
    let session = FeedSession::start(&config);
    let store = session.notifications();

    assert!(store.is_empty());

    store.add_notification(
        NotificationCategory::Tree,
        "Emma planted an Oak tree",
        Some(Actor::named("Emma")),
    );
    assert_eq!(store.unread_count(), 1);

    store.mark_all_as_read();
    assert_eq!(store.unread_count(), 0);

    store.clear_notifications();
    assert_eq!(store.len(), 0);

    session.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn test_unread_count_tracks_mixed_operations() {
    let session = FeedSession::start(&helpers::quiet_config());
    let store = session.notifications();

    let seeded = store.len();
    let first = store.add_notification(NotificationCategory::Login, "a", None);
    store.add_notification(NotificationCategory::Comment, "b", None);
    store.mark_as_read(first.id());

    assert_eq!(store.len(), seeded + 2);
    assert_eq!(store.unread_count(), store.unread().len());

    session.shutdown().await.expect("shutdown");
}

#[tokio::test(start_paused = true)]
async fn test_generator_stops_at_teardown() {
    let session = FeedSession::start(&helpers::eager_generator_config(30));
    let store = session.notifications().clone();
    let mut toasts = store.subscribe_toasts();

    tokio::time::sleep(Duration::from_secs(95)).await;
    let delivered = session.shutdown().await.expect("shutdown");
    assert_eq!(delivered, 3);

    let mut received = 0;
    while toasts.try_recv().is_ok() {
        received += 1;
    }
    assert_eq!(received, 3);

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(store.len(), 3);
    assert_eq!(store.unread_count(), 3);
}

#[tokio::test]
async fn test_push_source_and_bridge_feed_the_same_store() {
    let mut config = helpers::quiet_config();
    config.notifications.seed_demo_data = false;
    config.activity.seed_demo_data = false;
    let mut session = FeedSession::start(&config);

    let (tx, source) = ChannelSource::new("push", 8);
    session.mount(source);

    tx.send(IncomingNotification::new(
        NotificationCategory::Comment,
        "Sofia commented on your Maple tree",
        Some(Actor::named("Sofia")),
    ))
    .await
    .expect("send");
    drop(tx);

    session.bridge().on_event(&DomainEvent::new(
        None,
        UserEvent::SignedUp {
            name: "Liam".to_string(),
            avatar: None,
        }
        .into(),
    ));
    session.bridge().on_event(&DomainEvent::new(
        None,
        PlantingEvent::DonationReceived {
            donor: "James".to_string(),
            amount: 50.0,
            currency: "usd".to_string(),
        }
        .into(),
    ));

    let notifications = session.notifications().clone();
    let activity = session.activity().clone();
    tokio::time::timeout(Duration::from_secs(5), async {
        while notifications.len() < 2 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("pushed notification delivered");

    assert_eq!(session.shutdown().await.expect("shutdown"), 1);

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications.unread_count(), 2);
    assert_eq!(activity.len(), 2);
    assert_eq!(activity.activities()[0].details(), "50.00 USD");
}
