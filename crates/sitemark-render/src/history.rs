//! Bounded undo history over committed-surface snapshots.

use crate::surface::{Snapshot, Surface};

/// Maximum number of undo snapshots to keep.
const MAX_HISTORY: usize = 20;

/// A bounded stack of committed-surface snapshots.
///
/// A snapshot is pushed immediately before each commit, so undoing
/// restores the surface to exactly its pre-commit pixels. The stack is
/// FIFO on eviction and LIFO on undo.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot, evicting the oldest entry once the cap is hit.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
        }
    }

    /// Restore the most recent snapshot onto `surface` and drop it.
    /// Returns false (leaving the surface untouched) when empty.
    pub fn undo(&mut self, surface: &mut Surface) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                surface.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
