use std::collections::VecDeque;

use crate::surface::Snapshot;

/// Default number of snapshots kept for undo/redo
pub const MAX_HISTORY: usize = 20;

/// Bounded, linear undo/redo log of whole-surface snapshots.
///
/// `cursor` always points at the entry matching the surface. Committing after
/// an undo drops the redo tail; committing at capacity evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<Snapshot>,
    cursor: usize,
    capacity: usize,
}

impl HistoryLog {
    /// Start a log holding only `initial`
    pub fn new(initial: Snapshot) -> Self {
        Self::with_capacity(initial, MAX_HISTORY)
    }

    /// A zero capacity is raised to one so the current entry always exists
    pub fn with_capacity(initial: Snapshot, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity);
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            capacity,
        }
    }

    /// Push a new snapshot and make it current
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Drop everything and start over from `initial`
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.cursor = 0;
    }

    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; a log always holds its current entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}
