//! Per-tick joint detection between placed tubes.
//!
//! A joint is the axis-aligned intersection region of two tubes' world-space
//! bounding boxes. The highlight set is recomputed from scratch on every
//! call; there is no incremental state, so pairs that stop intersecting stop
//! producing highlights on the same tick.

use glam::{EulerRot, Mat3, Vec3};
use shared::TubeEntity;

use crate::build::{build_tube_walls, WallBox};

/// Padding added to each highlight dimension so the volume reads as a
/// visible shell around the intersection.
pub const HIGHLIGHT_PADDING: f32 = 0.02;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box enclosing both.
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap region, or `None` when the boxes are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.cmple(max).all() {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Highlight volume for one intersecting tube pair. Derived per tick,
/// never persisted or snapshotted.
#[derive(Debug, Clone, PartialEq)]
pub struct JointHighlight {
    pub center: Vec3,
    pub size: Vec3,
    /// Order-independent key of the contributing tube pair.
    pub pair_id: String,
}

/// Stable key for an unordered tube pair.
pub fn pair_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}:{b}")
    } else {
        format!("{b}:{a}")
    }
}

fn wall_world_aabb(wall: &WallBox, rot: Mat3, abs_rot: Mat3, pos: Vec3) -> Aabb {
    let center = pos + rot * wall.offset;
    let half = abs_rot * wall.half_extents;
    Aabb::from_center_half(center, half)
}

/// World-space AABB of a tube: the union of its four transformed walls.
///
/// Assumes the entity transform is finite; the scene store rejects NaN
/// input at the mutation boundary.
pub fn entity_aabb(tube: &TubeEntity) -> Aabb {
    let rot = Mat3::from_euler(
        EulerRot::XYZ,
        tube.rotation[0] as f32,
        tube.rotation[1] as f32,
        tube.rotation[2] as f32,
    );
    let abs_rot = Mat3::from_cols(rot.x_axis.abs(), rot.y_axis.abs(), rot.z_axis.abs());
    let pos = Vec3::new(
        tube.position[0] as f32,
        tube.position[1] as f32,
        tube.position[2] as f32,
    );

    let [first, rest @ ..] = build_tube_walls(&tube.params);
    rest.iter().fold(
        wall_world_aabb(&first, rot, abs_rot, pos),
        |aabb, wall| aabb.union(wall_world_aabb(wall, rot, abs_rot, pos)),
    )
}

/// Scan every unordered tube pair and emit one highlight per intersection.
///
/// O(n²) in tube count, fine for interactive scenes (tens of tubes).
pub fn detect_joints(tubes: &[TubeEntity]) -> Vec<JointHighlight> {
    let aabbs: Vec<Aabb> = tubes.iter().map(entity_aabb).collect();

    let mut highlights = Vec::new();
    for i in 0..tubes.len() {
        for j in (i + 1)..tubes.len() {
            if let Some(overlap) = aabbs[i].intersection(&aabbs[j]) {
                highlights.push(JointHighlight {
                    center: overlap.center(),
                    size: overlap.size() + Vec3::splat(HIGHLIGHT_PADDING),
                    pair_id: pair_key(&tubes[i].id, &tubes[j].id),
                });
            }
        }
    }
    highlights
}
