//! Wall-set validation utilities.
//!
//! `WallSetValidator` checks the integrity of built tube walls: positive
//! volumes, clamped thickness, and outer dimensions matching the requested
//! parameters.

use glam::Vec3;
use shared::TubeParams;

use crate::build::{effective_thickness, WallBox};
use crate::joints::Aabb;

/// Validator for a built set of tube walls.
pub struct WallSetValidator<'a> {
    params: &'a TubeParams,
    walls: &'a [WallBox; 4],
}

impl<'a> WallSetValidator<'a> {
    /// Create a new validator for the given parameters and walls.
    pub fn new(params: &'a TubeParams, walls: &'a [WallBox; 4]) -> Self {
        Self { params, walls }
    }

    /// Check that every wall has strictly positive extents.
    pub fn volumes_positive(&self) -> bool {
        self.walls
            .iter()
            .all(|w| w.half_extents.cmpgt(Vec3::ZERO).all())
    }

    /// Check the thickness clamp invariant: `0 < t` and
    /// `2t < min(width, height)`.
    pub fn thickness_in_bounds(&self) -> bool {
        let t = effective_thickness(self.params);
        t > 0.0 && 2.0 * t < self.params.width.min(self.params.height)
    }

    /// Local-space bounding box of the whole wall set.
    pub fn bounds(&self) -> Aabb {
        self.walls
            .iter()
            .map(|w| Aabb::from_center_half(w.offset, w.half_extents))
            .reduce(Aabb::union)
            .unwrap_or(Aabb {
                min: Vec3::ZERO,
                max: Vec3::ZERO,
            })
    }

    /// Outer dimensions (width, height, length) of the wall set.
    pub fn dimensions(&self) -> [f32; 3] {
        let size = self.bounds().size();
        [size.x, size.y, size.z]
    }

    /// Check that the outer dimensions match the requested parameters
    /// within `tolerance`.
    pub fn dimensions_match(&self, tolerance: f32) -> bool {
        let expected = [
            self.params.width as f32,
            self.params.height as f32,
            self.params.length as f32,
        ];
        self.dimensions()
            .iter()
            .zip(expected)
            .all(|(got, want)| (got - want).abs() < tolerance)
    }

    /// Run all checks, collecting a description of each failure.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.volumes_positive() {
            errors.push("wall with non-positive volume".to_string());
        }
        if !self.thickness_in_bounds() {
            errors.push("effective thickness out of bounds".to_string());
        }
        if !self.dimensions_match(1e-4) {
            errors.push(format!(
                "outer dimensions {:?} do not match params",
                self.dimensions()
            ));
        }
        errors
    }
}
