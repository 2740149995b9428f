pub mod scene;
pub mod selection;
pub mod settings;

pub use scene::{short_id, tube_display_name, SceneState, TUBE_SPACING};
pub use selection::SelectionState;
pub use settings::{TransformMode, WorkspaceSettings, ANGLE_SNAP_CHOICES};

use shared::{Axis, ParamError, TubeEntity, TubeId, TubeParams};

use crate::joints::{self, JointHighlight};

/// Combined editor state and the command surface the frontend drives.
///
/// Commands apply synchronously in call order; queries are read-only, so a
/// per-tick [`TubeWorkspace::highlights`] read always observes a fully
/// settled scene.
#[derive(Default)]
pub struct TubeWorkspace {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub settings: WorkspaceSettings,
}

impl TubeWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Commands ──────────────────────────────────────────────

    /// Add a tube; the only command that surfaces an error (so a form UI
    /// can re-prompt on bad input).
    pub fn add_tube(&mut self, params: TubeParams) -> Result<TubeId, ParamError> {
        self.scene.add_tube(params)
    }

    /// Select a tube by ID. Unknown IDs leave the selection unchanged;
    /// stray clicks after a delete are harmless.
    pub fn select_entity(&mut self, id: &str) {
        if !self.scene.scene.contains(id) {
            tracing::debug!(id = %id, "select ignored, unknown id");
            return;
        }
        self.selection.select(id.to_string());
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// Delete the selected tube. Silent no-op without a selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected().cloned() else {
            return false;
        };
        let removed = self.scene.remove_tube(&id);
        self.selection.clear();
        removed
    }

    /// Nudge the selected tube along one axis. Silent no-op without a
    /// selection.
    pub fn move_selected(&mut self, axis: Axis, delta: f64) -> bool {
        let Some(id) = self.selection.selected().cloned() else {
            return false;
        };
        self.scene.translate_tube(&id, axis, delta)
    }

    /// Rotate the selected tube around one axis by a delta in degrees.
    /// Silent no-op without a selection.
    pub fn rotate_selected(&mut self, axis: Axis, delta_degrees: f64) -> bool {
        let Some(id) = self.selection.selected().cloned() else {
            return false;
        };
        self.scene.rotate_tube(&id, axis, delta_degrees.to_radians())
    }

    /// Commit a finished gizmo drag: absolute transform, one history entry.
    /// Rotation components snap to the angle-snap setting when enabled.
    pub fn apply_drag(&mut self, id: &str, position: [f64; 3], mut rotation: [f64; 3]) -> bool {
        if self.settings.angle_snap_deg != 0 {
            for component in &mut rotation {
                *component = self.settings.snap_angle(*component);
            }
        }
        self.scene.apply_drag(id, position, rotation)
    }

    /// Undo the last mutating command. Selection survives unless it points
    /// at a tube that no longer exists in the restored scene.
    pub fn undo(&mut self) -> bool {
        let changed = self.scene.undo();
        if changed {
            self.drop_dangling_selection();
        }
        changed
    }

    /// Redo the last undone command.
    pub fn redo(&mut self) -> bool {
        let changed = self.scene.redo();
        if changed {
            self.drop_dangling_selection();
        }
        changed
    }

    fn drop_dangling_selection(&mut self) {
        let dangling = self
            .selection
            .selected()
            .is_some_and(|id| !self.scene.scene.contains(id));
        if dangling {
            self.selection.clear();
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Tubes in creation order, for rendering and list display.
    pub fn entities(&self) -> &[TubeEntity] {
        self.scene.tubes()
    }

    /// Currently selected tube ID.
    pub fn selected_id(&self) -> Option<&TubeId> {
        self.selection.selected()
    }

    /// Joint highlights for the current scene. Recomputed from scratch on
    /// every call; the renderer queries this once per tick.
    pub fn highlights(&self) -> Vec<JointHighlight> {
        joints::detect_joints(self.scene.tubes())
    }
}
