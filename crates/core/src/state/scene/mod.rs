//! Scene state management
//!
//! This module provides the tube collection with snapshot-based undo/redo
//! history. Every mutating operation settles the live scene, then records
//! exactly one snapshot; the snapshot at the history cursor always equals
//! the live scene.

mod display;
mod history;
mod transform_ops;
mod tube_ops;

pub use display::{short_id, tube_display_name};
pub use tube_ops::TUBE_SPACING;

use shared::{SceneDescription, TubeEntity};

/// Scene state with tubes and undo/redo history
pub struct SceneState {
    /// Current scene with tubes
    pub scene: SceneDescription,
    /// Snapshot log; index 0 is the baseline empty scene and is never evicted
    pub(crate) snapshots: Vec<SceneDescription>,
    /// Cursor into the snapshot log, `0 <= cursor < snapshots.len()`
    pub(crate) cursor: usize,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            scene: SceneDescription::default(),
            snapshots: vec![SceneDescription::default()],
            cursor: 0,
            version: 0,
        }
    }
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Tubes in creation order.
    pub fn tubes(&self) -> &[TubeEntity] {
        &self.scene.tubes
    }

    /// Number of placed tubes.
    pub fn tube_count(&self) -> usize {
        self.scene.tubes.len()
    }

    /// Get a tube by ID
    pub fn tube(&self, id: &str) -> Option<&TubeEntity> {
        self.scene.tube(id)
    }

    /// Get mutable tube by ID
    pub(crate) fn tube_mut(&mut self, id: &str) -> Option<&mut TubeEntity> {
        self.scene.tube_mut(id)
    }
}
