//! Undo/redo functionality

use super::SceneState;

/// Snapshot log cap. The baseline empty snapshot at index 0 survives
/// eviction, so undo can always walk back to an empty scene.
const MAX_SNAPSHOTS: usize = 100;

impl SceneState {
    /// Commit the live scene as a new snapshot.
    ///
    /// Discards any snapshots beyond the cursor (a new edit from a
    /// historical point drops the redo branch), appends a copy of the live
    /// scene, and advances the cursor to it.
    pub(crate) fn record(&mut self) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(self.scene.clone());
        if self.snapshots.len() > MAX_SNAPSHOTS {
            self.snapshots.remove(1);
        }
        self.cursor = self.snapshots.len() - 1;
        self.version += 1;
    }

    /// Undo last change. Returns `false` at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.scene = self.snapshots[self.cursor].clone();
        self.version += 1;
        true
    }

    /// Redo last undone change. Returns `false` at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        self.scene = self.snapshots[self.cursor].clone();
        self.version += 1;
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots in the log.
    pub fn history_len(&self) -> usize {
        self.snapshots.len()
    }

    /// Current position in the snapshot log.
    pub fn history_cursor(&self) -> usize {
        self.cursor
    }
}
