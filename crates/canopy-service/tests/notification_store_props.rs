use canopy_core::types::id::NotificationId;
use canopy_entity::notification::NotificationCategory;
use canopy_entity::record::RecordCategory;
use canopy_service::NotificationStore;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    MarkRead(usize),
    MarkUnknown,
    MarkAll,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..NotificationCategory::ALL.len()).prop_map(Op::Add),
        3 => any::<usize>().prop_map(Op::MarkRead),
        1 => Just(Op::MarkUnknown),
        1 => Just(Op::MarkAll),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_unread_count_and_length_track_operations(
        ops in proptest::collection::vec(op(), 0..60)
    ) {
        let store = NotificationStore::empty(8);
        let mut unread_rx = store.subscribe_unread();
        let mut expected_len = 0usize;
        let mut last_seen = 0usize;

        for op in ops {
            match op {
                Op::Add(i) => {
                    store.add_notification(NotificationCategory::ALL[i], "msg", None);
                    expected_len += 1;
                }
                Op::MarkRead(i) => {
                    let current = store.notifications();
                    if !current.is_empty() {
                        let target = &current[i % current.len()];
                        let flipped = store.mark_as_read(target.id());
                        prop_assert_eq!(flipped, target.is_unread());
                    }
                }
                Op::MarkUnknown => {
                    let before = store.notifications();
                    prop_assert!(!store.mark_as_read(NotificationId::new()));
                    prop_assert_eq!(store.notifications(), before);
                }
                Op::MarkAll => {
                    store.mark_all_as_read();
                    prop_assert!(store.unread().is_empty());
                }
                Op::Clear => {
                    store.clear_notifications();
                    expected_len = 0;
                }
            }

            let unread_records = store.notifications().iter().filter(|n| n.is_unread()).count();
            prop_assert_eq!(store.unread_count(), unread_records);
            prop_assert_eq!(store.len(), expected_len);

            let count = store.unread_count();
            prop_assert_eq!(unread_rx.has_changed().unwrap(), count != last_seen);
            prop_assert_eq!(*unread_rx.borrow_and_update(), count);
            last_seen = count;
        }

        prop_assert_eq!(*store.subscribe_unread().borrow(), store.unread_count());
    }
}

#[test]
fn test_interleaved_sequence_keeps_counts() {
    let store = NotificationStore::empty(8);
    let a = store.add_notification(NotificationCategory::Tree, "a", None);
    store.add_notification(NotificationCategory::Login, "b", None);
    store.mark_as_read(a.id());
    store.clear_notifications();
    store.add_notification(NotificationCategory::Comment, "c", None);

    assert_eq!(store.len(), 1);
    assert_eq!(store.unread_count(), 1);
}
