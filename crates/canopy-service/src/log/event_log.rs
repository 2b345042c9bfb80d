//! Ordered in-memory log shared by both stores.

use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use canopy_entity::record::EventRecord;

/// An in-memory, most-recent-first list of event records.
///
/// Records are only ever prepended or removed all at once. Interior
/// mutability lets a store hand out `&self` operations from an `Arc`.
#[derive(Debug)]
pub struct EventLog<R> {
    entries: RwLock<VecDeque<R>>,
}

impl<R: EventRecord> EventLog<R> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
        }
    }

    /// Create a log holding `records`, given in display order (newest first).
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        Self {
            entries: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Insert a record at the head. Returns the new length.
    pub fn prepend(&self, record: R) -> usize {
        self.write(|entries| {
            entries.push_front(record);
            entries.len()
        })
    }

    /// Remove every record. Returns how many were removed.
    pub fn clear(&self) -> usize {
        self.write(|entries| {
            let removed = entries.len();
            entries.clear();
            removed
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Copy of every record in display order.
    pub fn snapshot(&self) -> Vec<R> {
        self.read_guard().iter().cloned().collect()
    }

    /// Copy of the record with the given id.
    pub fn find(&self, id: R::Id) -> Option<R> {
        self.read_guard().iter().find(|r| r.id() == id).cloned()
    }

    /// Copies of the records matching `predicate`, in display order.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.read_guard()
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Number of records matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&R) -> bool) -> usize {
        self.read_guard().iter().filter(|r| predicate(r)).count()
    }

    /// Run `f` with shared access to the records.
    pub fn read<T>(&self, f: impl FnOnce(&VecDeque<R>) -> T) -> T {
        f(&self.read_guard())
    }

    /// Run `f` with exclusive access to the records.
    ///
    /// The lock is held for the whole closure, so anything derived from
    /// the records inside `f` is consistent with the mutation.
    pub fn write<T>(&self, f: impl FnOnce(&mut VecDeque<R>) -> T) -> T {
        f(&mut self.write_guard())
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, VecDeque<R>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, VecDeque<R>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<R: EventRecord> Default for EventLog<R> {
    fn default() -> Self {
        Self::new()
    }
}
