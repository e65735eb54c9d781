//! Ordered snapshot history with a movable cursor
//!
//! The store is never empty: it starts with the initial snapshot at index 0
//! and the cursor always points at an existing entry. Jumping around never
//! discards anything; the "future" past the cursor is only dropped by the next
//! [`HistoryStore::append`].

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory<T>")]
pub struct HistoryStore<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

/// Wire shape of a history before the invariants are checked
#[derive(Deserialize)]
struct RawHistory<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T> TryFrom<RawHistory<T>> for HistoryStore<T> {
    type Error = Error;

    fn try_from(raw: RawHistory<T>) -> Result<Self> {
        if raw.snapshots.is_empty() {
            return Err(Error::InvalidHistory {
                reason: "no snapshots".to_string(),
            });
        }
        if raw.cursor >= raw.snapshots.len() {
            return Err(Error::InvalidHistory {
                reason: format!(
                    "cursor {} is past the last entry {}",
                    raw.cursor,
                    raw.snapshots.len() - 1
                ),
            });
        }
        Ok(Self {
            snapshots: raw.snapshots,
            cursor: raw.cursor,
        })
    }
}

impl<T: Clone> HistoryStore<T> {
    /// Start a history holding only `initial`, with the cursor on it
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    /// Drop everything after the cursor, push `snapshot` and move onto it.
    ///
    /// Callers validate the snapshot first; appending always succeeds.
    pub fn append(&mut self, snapshot: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Move the cursor to `index` without touching the stored snapshots
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.snapshots.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Step the cursor back one entry; `false` when already at the start
    pub fn undo(&mut self) -> bool {
        self.cursor
            .checked_sub(1)
            .is_some_and(|index| self.go_to(index).is_ok())
    }

    /// Step the cursor forward one entry; `false` when already at the end
    pub fn redo(&mut self) -> bool {
        self.go_to(self.cursor + 1).is_ok()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: construction and deserialization both require a snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.snapshots.get(index)
    }

    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// Number of entries the next append would discard
    pub fn future_len(&self) -> usize {
        self.snapshots.len() - self.cursor - 1
    }
}
