//! Notification store with read/unread bookkeeping.

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, trace};

use canopy_core::config::NotificationsConfig;
use canopy_core::types::id::NotificationId;
use canopy_entity::actor::Actor;
use canopy_entity::notification::{Notification, NotificationCategory};

use crate::log::{EventLog, RecordStats};

use super::seed;
use super::toast::Toast;

/// In-memory notification feed for one client session.
///
/// `unread_count` is published through a watch channel after every
/// mutation, and every addition emits a [`Toast`] on a broadcast channel.
/// Neither channel needs a subscriber.
#[derive(Debug)]
pub struct NotificationStore {
    /// Notifications, newest first.
    log: EventLog<Notification>,
    /// Derived unread count.
    unread_tx: watch::Sender<usize>,
    /// Toast fan-out.
    toast_tx: broadcast::Sender<Toast>,
}

impl NotificationStore {
    /// Create a store from configuration, seeding demo data if enabled.
    pub fn new(config: &NotificationsConfig) -> Self {
        let records = if config.seed_demo_data {
            seed::demo_notifications(Utc::now())
        } else {
            Vec::new()
        };
        Self::with_notifications(records, config.toast_buffer_size)
    }

    /// Create an empty store.
    pub fn empty(toast_buffer_size: usize) -> Self {
        Self::with_notifications(Vec::new(), toast_buffer_size)
    }

    /// Create a store holding `records` (newest first).
    pub fn with_notifications(records: Vec<Notification>, toast_buffer_size: usize) -> Self {
        let unread = records.iter().filter(|n| n.is_unread()).count();
        let (unread_tx, _) = watch::channel(unread);
        let (toast_tx, _) = broadcast::channel(toast_buffer_size.max(1));

        Self {
            log: EventLog::with_records(records),
            unread_tx,
            toast_tx,
        }
    }

    /// Add an unread notification at the head of the feed and raise a toast.
    pub fn add_notification(
        &self,
        category: NotificationCategory,
        message: impl Into<String>,
        actor: Option<Actor>,
    ) -> Notification {
        let notification = Notification::new(category, message, actor);
        let toast = Toast::from(&notification);

        self.log.write(|entries| {
            entries.push_front(notification.clone());
            self.unread_tx.send_modify(|count| *count += 1);
        });

        debug!(
            id = %notification.id(),
            category = %category,
            "Notification added"
        );

        if self.toast_tx.send(toast).is_err() {
            trace!(id = %notification.id(), "No toast subscribers");
        }

        notification
    }

    /// Mark every notification as read. Returns how many changed.
    pub fn mark_all_as_read(&self) -> usize {
        let changed = self.log.write(|entries| {
            let changed = entries
                .iter_mut()
                .map(Notification::mark_read)
                .filter(|flipped| *flipped)
                .count();
            self.unread_tx.send_if_modified(reset_count);
            changed
        });

        debug!(changed, "Marked all notifications as read");
        changed
    }

    /// Mark one notification as read.
    ///
    /// Returns `true` if it existed and was unread. An unknown id is a no-op.
    pub fn mark_as_read(&self, id: NotificationId) -> bool {
        let changed = self.log.write(|entries| {
            let changed = entries
                .iter_mut()
                .find(|n| n.id() == id)
                .is_some_and(|n| n.mark_read());
            if changed {
                self.unread_tx.send_modify(|count| *count = count.saturating_sub(1));
            }
            changed
        });

        if changed {
            debug!(id = %id, "Notification marked as read");
        } else {
            trace!(id = %id, "mark_as_read had no effect");
        }
        changed
    }

    /// Remove every notification. Returns how many were removed.
    pub fn clear_notifications(&self) -> usize {
        let removed = self.log.write(|entries| {
            let removed = entries.len();
            entries.clear();
            self.unread_tx.send_if_modified(reset_count);
            removed
        });

        debug!(removed, "Notifications cleared");
        removed
    }

    /// Current number of unread notifications.
    pub fn unread_count(&self) -> usize {
        *self.unread_tx.borrow()
    }

    /// Receiver that observes every change of the unread count.
    pub fn subscribe_unread(&self) -> watch::Receiver<usize> {
        self.unread_tx.subscribe()
    }

    /// Receiver for toasts raised from now on.
    pub fn subscribe_toasts(&self) -> broadcast::Receiver<Toast> {
        self.toast_tx.subscribe()
    }

    /// Every notification, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.snapshot()
    }

    /// Notifications of one category, newest first.
    pub fn by_category(&self, category: NotificationCategory) -> Vec<Notification> {
        self.log.filter(|n| n.category() == category)
    }

    /// Unread notifications, newest first.
    pub fn unread(&self) -> Vec<Notification> {
        self.log.filter(Notification::is_unread)
    }

    /// Look up a notification by id.
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.log.find(id)
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Category and "today" counts as seen at `now`.
    pub fn stats_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RecordStats<NotificationCategory> {
        self.log.read(|entries| RecordStats::compute(entries, now))
    }
}

/// Zero the unread count, notifying watchers only if it was non-zero.
fn reset_count(count: &mut usize) -> bool {
    std::mem::replace(count, 0) != 0
}
