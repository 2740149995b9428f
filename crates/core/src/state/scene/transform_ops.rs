//! Transform/drag operations

use shared::Axis;

use super::SceneState;

fn all_finite(v: &[f64; 3]) -> bool {
    v.iter().all(|c| c.is_finite())
}

impl SceneState {
    /// Add a delta to one position component of a tube.
    ///
    /// Non-finite input is rejected here so NaN never reaches the joint
    /// detector's AABB math. Returns `false` (nothing recorded) on unknown
    /// ID or rejected input.
    pub fn translate_tube(&mut self, id: &str, axis: Axis, delta: f64) -> bool {
        if !delta.is_finite() {
            tracing::warn!(id = %id, delta, "translate rejected, non-finite delta");
            return false;
        }
        let Some(tube) = self.tube_mut(id) else {
            return false;
        };
        tube.position[axis.index()] += delta;

        self.record();
        true
    }

    /// Add a delta (radians) to one rotation component of a tube.
    pub fn rotate_tube(&mut self, id: &str, axis: Axis, delta: f64) -> bool {
        if !delta.is_finite() {
            tracing::warn!(id = %id, delta, "rotate rejected, non-finite delta");
            return false;
        }
        let Some(tube) = self.tube_mut(id) else {
            return false;
        };
        tube.rotation[axis.index()] += delta;

        self.record();
        true
    }

    /// Absolute transform set for one tube, applied when an interactive
    /// gizmo drag ends. Intermediate drag frames are never recorded; the
    /// whole gesture coalesces into this single history entry.
    pub fn apply_drag(&mut self, id: &str, position: [f64; 3], rotation: [f64; 3]) -> bool {
        if !all_finite(&position) || !all_finite(&rotation) {
            tracing::warn!(id = %id, "drag rejected, non-finite transform");
            return false;
        }
        let Some(tube) = self.tube_mut(id) else {
            return false;
        };
        tube.position = position;
        tube.rotation = rotation;

        self.record();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::square_params;

    #[test]
    fn test_translate_single_axis() {
        let mut state = SceneState::default();
        let id = state.add_tube(square_params()).unwrap();

        assert!(state.translate_tube(&id, Axis::X, 0.5));
        assert_eq!(state.tube(&id).unwrap().position, [0.5, 1.5, 0.0]);
    }

    #[test]
    fn test_rotate_adds_radians() {
        let mut state = SceneState::default();
        let id = state.add_tube(square_params()).unwrap();

        assert!(state.rotate_tube(&id, Axis::Z, 0.25));
        assert!(state.rotate_tube(&id, Axis::Z, 0.25));
        let rot = state.tube(&id).unwrap().rotation;
        assert!((rot[2] - 0.5).abs() < 1e-12);
        assert_eq!(rot[0], 0.0);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut state = SceneState::default();
        state.add_tube(square_params()).unwrap();
        let history_len = state.history_len();

        assert!(!state.translate_tube("ghost", Axis::X, 1.0));
        assert!(!state.apply_drag("ghost", [0.0; 3], [0.0; 3]));
        assert_eq!(state.history_len(), history_len);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let mut state = SceneState::default();
        let id = state.add_tube(square_params()).unwrap();
        let before = state.tube(&id).unwrap().clone();
        let history_len = state.history_len();

        assert!(!state.translate_tube(&id, Axis::Y, f64::NAN));
        assert!(!state.rotate_tube(&id, Axis::X, f64::INFINITY));
        assert!(!state.apply_drag(&id, [0.0, f64::NAN, 0.0], [0.0; 3]));
        assert!(!state.apply_drag(&id, [0.0; 3], [f64::NEG_INFINITY, 0.0, 0.0]));

        assert_eq!(state.tube(&id).unwrap(), &before);
        assert_eq!(state.history_len(), history_len);
    }

    #[test]
    fn test_apply_drag_sets_absolute_transform() {
        let mut state = SceneState::default();
        let id = state.add_tube(square_params()).unwrap();
        let other = state.add_tube(square_params()).unwrap();
        let history_len = state.history_len();

        assert!(state.apply_drag(&id, [2.0, 3.0, 4.0], [0.1, 0.2, 0.3]));

        let tube = state.tube(&id).unwrap();
        assert_eq!(tube.position, [2.0, 3.0, 4.0]);
        assert_eq!(tube.rotation, [0.1, 0.2, 0.3]);

        // Only the targeted tube changed, and one entry was recorded.
        assert_eq!(state.tube(&other).unwrap().position, [1.5, 1.5, 0.0]);
        assert_eq!(state.history_len(), history_len + 1);
    }
}
