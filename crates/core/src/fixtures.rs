//! Factory functions for test data.

use std::f64::consts::FRAC_PI_2;

use shared::{TubeEntity, TubeParams};

use crate::state::TubeWorkspace;

/// The default square tube from the creation form: 1 x 1 cross-section,
/// 0.1 walls, 3 long.
pub fn square_params() -> TubeParams {
    TubeParams::square(1.0, 0.1, 3.0)
}

/// A rectangular tube: 1 x 2 cross-section, 0.1 walls, 4 long.
pub fn rect_params() -> TubeParams {
    TubeParams::rect(1.0, 2.0, 0.1, 4.0)
}

/// A tube entity at an explicit position, zero rotation.
pub fn tube_at(id: &str, params: TubeParams, position: [f64; 3]) -> TubeEntity {
    TubeEntity {
        id: id.to_string(),
        name: format!("Tube {id}"),
        params,
        position,
        rotation: [0.0; 3],
    }
}

/// A default square tube stood upright: quarter turn about X, so its
/// length runs along world Y.
pub fn upright_tube_at(id: &str, position: [f64; 3]) -> TubeEntity {
    TubeEntity {
        rotation: [FRAC_PI_2, 0.0, 0.0],
        ..tube_at(id, square_params(), position)
    }
}

/// A workspace pre-populated with `count` default tubes.
pub fn workspace_with_tubes(count: usize) -> TubeWorkspace {
    let mut ws = TubeWorkspace::new();
    for _ in 0..count {
        ws.add_tube(square_params())
            .unwrap_or_else(|e| unreachable!("default params are valid: {e}"));
    }
    ws
}
