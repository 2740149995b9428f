//! Tube wall geometry.
//!
//! Local-axis convention: the cross-section lies in the local XY plane
//! (width along X, height along Y) and the tube runs along local Z.

use glam::Vec3;
use shared::TubeParams;

/// Margin kept between opposing walls when the requested thickness would
/// consume the whole cross-section.
pub const WALL_EPSILON: f64 = 0.001;

/// One solid wall of a hollow tube, in tube-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBox {
    pub half_extents: Vec3,
    pub offset: Vec3,
}

impl WallBox {
    fn new(size: [f64; 3], offset: [f64; 3]) -> Self {
        Self {
            half_extents: Vec3::new(
                (size[0] / 2.0) as f32,
                (size[1] / 2.0) as f32,
                (size[2] / 2.0) as f32,
            ),
            offset: Vec3::new(offset[0] as f32, offset[1] as f32, offset[2] as f32),
        }
    }
}

/// Wall thickness after the silent clamp.
///
/// Guarantees `0 < t` and `2t < min(width, height)` for any positive
/// parameters, so every wall keeps positive volume. The margin shrinks for
/// very small cross-sections so the clamp can never go non-positive.
pub fn effective_thickness(params: &TubeParams) -> f64 {
    let min_dim = params.width.min(params.height);
    let eps = WALL_EPSILON.min(min_dim / 4.0);
    params.thickness.min(min_dim / 2.0 - eps)
}

/// Build the four solid walls of a hollow tube.
///
/// Pure function: same parameters always yield the same walls. Returned in
/// left, right, top, bottom order. Left/right walls span the full height;
/// top/bottom walls fit between them.
pub fn build_tube_walls(params: &TubeParams) -> [WallBox; 4] {
    let t = effective_thickness(params);
    let w = params.width;
    let h = params.height;
    let l = params.length;

    let side = [t, h, l];
    let cap = [w - 2.0 * t, t, l];
    let x = w / 2.0 - t / 2.0;
    let y = h / 2.0 - t / 2.0;

    [
        WallBox::new(side, [-x, 0.0, 0.0]),
        WallBox::new(side, [x, 0.0, 0.0]),
        WallBox::new(cap, [0.0, y, 0.0]),
        WallBox::new(cap, [0.0, -y, 0.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_four_walls_positive_volume() {
        let walls = build_tube_walls(&TubeParams::square(1.0, 0.1, 3.0));
        assert_eq!(walls.len(), 4);
        for wall in &walls {
            assert!(wall.half_extents.x > 0.0);
            assert!(wall.half_extents.y > 0.0);
            assert!(wall.half_extents.z > 0.0);
        }
    }

    #[test]
    fn test_wall_layout() {
        let params = TubeParams::rect(1.0, 2.0, 0.1, 4.0);
        let [left, right, top, bottom] = build_tube_walls(&params);

        // sides: (t, height, length), inset by t/2 from the width extremes
        assert!(approx(left.half_extents.x, 0.05));
        assert!(approx(left.half_extents.y, 1.0));
        assert!(approx(left.half_extents.z, 2.0));
        assert!(approx(left.offset.x, -0.45));
        assert!(approx(right.offset.x, 0.45));

        // caps: (width - 2t, t, length), inset by t/2 from the height extremes
        assert!(approx(top.half_extents.x, 0.4));
        assert!(approx(top.half_extents.y, 0.05));
        assert!(approx(top.offset.y, 0.95));
        assert!(approx(bottom.offset.y, -0.95));
    }

    #[test]
    fn test_thickness_clamped_silently() {
        // Requested thickness would consume the whole cross-section.
        let params = TubeParams::square(1.0, 0.8, 3.0);
        let t = effective_thickness(&params);
        assert!(t < 0.5);
        assert!((t - (0.5 - WALL_EPSILON)).abs() < 1e-12);

        // Walls still have positive volume.
        for wall in build_tube_walls(&params) {
            assert!(wall.half_extents.x > 0.0);
            assert!(wall.half_extents.y > 0.0);
        }
    }

    #[test]
    fn test_clamp_invariant_holds() {
        for (w, h, th) in [
            (1.0, 1.0, 0.1),
            (1.0, 1.0, 0.5),
            (1.0, 1.0, 10.0),
            (0.004, 0.004, 0.002),
            (0.5, 2.0, 0.3),
        ] {
            let params = TubeParams::rect(w, h, th, 3.0);
            let t = effective_thickness(&params);
            assert!(t > 0.0, "w={w} h={h} th={th}");
            assert!(2.0 * t < w.min(h), "w={w} h={h} th={th}");
        }
    }

    #[test]
    fn test_pure_function() {
        let params = TubeParams::rect(1.2, 0.8, 0.07, 2.5);
        assert_eq!(build_tube_walls(&params), build_tube_walls(&params));
    }

    #[test]
    fn test_walls_enclose_cross_section() {
        let params = TubeParams::square(1.0, 0.1, 3.0);
        let [left, right, top, bottom] = build_tube_walls(&params);

        // Outer faces sit exactly at the cross-section extremes.
        assert!(approx(left.offset.x - left.half_extents.x, -0.5));
        assert!(approx(right.offset.x + right.half_extents.x, 0.5));
        assert!(approx(top.offset.y + top.half_extents.y, 0.5));
        assert!(approx(bottom.offset.y - bottom.half_extents.y, -0.5));
    }
}
