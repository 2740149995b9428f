//! Value types shared between the TubeJoint core and its frontends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier of a tube in the scene.
pub type TubeId = String;

/// Cross-section kind of a tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Square,
    Rect,
}

/// Parameters of a hollow rectangular tube.
///
/// All dimensions must be positive and finite. A square tube mirrors
/// `width` into `height`; [`TubeParams::normalized`] enforces that before
/// the parameters are stored on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeParams {
    pub shape: ShapeKind,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub length: f64,
}

/// Rejected tube parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}

impl TubeParams {
    /// Square tube (height mirrors width).
    pub fn square(width: f64, thickness: f64, length: f64) -> Self {
        Self {
            shape: ShapeKind::Square,
            width,
            height: width,
            thickness,
            length,
        }
    }

    /// Rectangular tube.
    pub fn rect(width: f64, height: f64, thickness: f64, length: f64) -> Self {
        Self {
            shape: ShapeKind::Rect,
            width,
            height,
            thickness,
            length,
        }
    }

    /// Check that every dimension is finite and positive.
    pub fn validate(&self) -> Result<(), ParamError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
            ("length", self.length),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ParamError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Force `height == width` for square tubes; identity for rect tubes.
    pub fn normalized(mut self) -> Self {
        if self.shape == ShapeKind::Square {
            self.height = self.width;
        }
        self
    }
}

/// World axis, as addressed by move/rotate commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index into a `[f64; 3]` position/rotation.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A placed tube instance.
///
/// `rotation` is per-axis Euler angles in radians, applied in XYZ order.
/// Selected-ness is not stored here; it lives in the workspace selection
/// state and is never part of undo history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeEntity {
    pub id: TubeId,
    pub name: String,
    pub params: TubeParams,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

/// The scene's tube collection, in creation order.
///
/// This is the unit of history snapshotting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    pub tubes: Vec<TubeEntity>,
}

impl SceneDescription {
    /// Get a tube by ID.
    pub fn tube(&self, id: &str) -> Option<&TubeEntity> {
        self.tubes.iter().find(|t| t.id == id)
    }

    /// Get mutable tube by ID.
    pub fn tube_mut(&mut self, id: &str) -> Option<&mut TubeEntity> {
        self.tubes.iter_mut().find(|t| t.id == id)
    }

    /// Check that a tube with the given ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.tubes.iter().any(|t| t.id == id)
    }
}
