//! Tube CRUD operations

use shared::{ParamError, TubeEntity, TubeId, TubeParams};

use super::SceneState;

/// X spacing between the default placements of successive tubes, so new
/// tubes land next to each other instead of overlapping.
pub const TUBE_SPACING: f64 = 1.5;

impl SceneState {
    /// Add a new tube with a staggered default placement.
    ///
    /// Parameters are validated before anything is created; on error the
    /// scene and history are untouched. The tube is placed at
    /// `(count * TUBE_SPACING, length / 2, 0)` with zero rotation.
    pub fn add_tube(&mut self, params: TubeParams) -> Result<TubeId, ParamError> {
        params.validate()?;
        let params = params.normalized();

        let id: TubeId = uuid::Uuid::new_v4().to_string();
        let index = self.scene.tubes.len();
        self.scene.tubes.push(TubeEntity {
            id: id.clone(),
            name: format!("Tube {}", index + 1),
            params,
            position: [index as f64 * TUBE_SPACING, params.length / 2.0, 0.0],
            rotation: [0.0; 3],
        });
        tracing::debug!(id = %id, "tube added");

        self.record();
        Ok(id)
    }

    /// Remove a tube by ID. Returns `false` (and records nothing) when the
    /// ID is not present.
    pub fn remove_tube(&mut self, id: &str) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        self.scene.tubes.retain(|t| t.id != id);
        tracing::debug!(id = %id, "tube removed");

        self.record();
        true
    }
}
