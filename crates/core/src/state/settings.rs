//! Interaction settings

use serde::{Deserialize, Serialize};

/// Active gizmo tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
}

/// Rotation-snap choices offered to the user (degrees; 0 = free).
pub const ANGLE_SNAP_CHOICES: &[u32] = &[0, 15, 30, 45, 90];

/// Interaction settings shared between the core and the frontend.
///
/// Not persisted anywhere; frontends start from defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    pub transform_mode: TransformMode,
    /// Rotation snap in degrees; 0 disables snapping.
    pub angle_snap_deg: u32,
    /// Render tubes as wireframes.
    pub wireframe: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            transform_mode: TransformMode::Translate,
            angle_snap_deg: 0,
            wireframe: false,
        }
    }
}

impl WorkspaceSettings {
    /// Step used by the manual rotation buttons, in degrees.
    pub fn rotation_step_deg(&self) -> f64 {
        if self.angle_snap_deg == 0 {
            15.0
        } else {
            self.angle_snap_deg as f64
        }
    }

    /// Step used by the manual position buttons, in scene units.
    pub fn position_step(&self) -> f64 {
        0.5
    }

    /// Snap an angle (radians) to the nearest snap increment.
    /// Identity when snapping is off.
    pub fn snap_angle(&self, radians: f64) -> f64 {
        if self.angle_snap_deg == 0 {
            return radians;
        }
        let step = f64::from(self.angle_snap_deg).to_radians();
        (radians / step).round() * step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = WorkspaceSettings::default();
        assert_eq!(s.transform_mode, TransformMode::Translate);
        assert_eq!(s.angle_snap_deg, 0);
        assert!(!s.wireframe);
    }

    #[test]
    fn test_rotation_step_falls_back_to_15() {
        let mut s = WorkspaceSettings::default();
        assert_eq!(s.rotation_step_deg(), 15.0);
        s.angle_snap_deg = 45;
        assert_eq!(s.rotation_step_deg(), 45.0);
    }

    #[test]
    fn test_snap_angle_free_is_identity() {
        let s = WorkspaceSettings::default();
        assert_eq!(s.snap_angle(0.123), 0.123);
    }

    #[test]
    fn test_snap_angle_rounds_to_increment() {
        let s = WorkspaceSettings {
            angle_snap_deg: 90,
            ..Default::default()
        };
        let quarter = std::f64::consts::FRAC_PI_2;
        assert!((s.snap_angle(1.4) - quarter).abs() < 1e-12);
        assert!((s.snap_angle(-1.7) + quarter).abs() < 1e-12);
        assert_eq!(s.snap_angle(0.2), 0.0);
    }
}
