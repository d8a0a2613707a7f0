//! Rotation and perspective projection.
//!
//! Points are rotated about X by `a`, then Y by `b`, then Z by `c`, pushed
//! `DEPTH_BIAS` units away from the camera and divided by their depth.
//!
//! Precondition: the biased depth must never reach zero. With a bias of 100
//! this holds for every rotation as long as the cube half-width stays below
//! [`MAX_HALF_WIDTH`](term_cube_types::MAX_HALF_WIDTH). No runtime check is made.

use term_cube_types::{Angles, Vec3, DEPTH_BIAS};

/// Sines and cosines of a rotation triple, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    sa: f32,
    ca: f32,
    sb: f32,
    cb: f32,
    sc: f32,
    cc: f32,
}

impl Rotation {
    pub fn new(angles: Angles) -> Self {
        let (sa, ca) = angles.a.sin_cos();
        let (sb, cb) = angles.b.sin_cos();
        let (sc, cc) = angles.c.sin_cos();
        Self {
            sa,
            ca,
            sb,
            cb,
            sc,
            cc,
        }
    }

    /// Rotate an object-space point into camera orientation.
    #[inline(always)]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let Self {
            sa,
            ca,
            sb,
            cb,
            sc,
            cc,
        } = *self;
        let Vec3 { x, y, z } = p;

        Vec3 {
            x: y * sa * sb * cc - z * ca * sb * cc + y * ca * sc + z * sa * sc + x * cb * cc,
            y: y * ca * cc + z * sa * cc - y * sa * sb * sc + z * ca * sb * sc - x * cb * sc,
            z: z * ca * cb - y * sa * cb + x * sb,
        }
    }
}

/// Rotate a single point. Prefer [`Rotation`] when rotating many points by the same angles.
pub fn rotate(p: Vec3, angles: Angles) -> Vec3 {
    Rotation::new(angles).apply(p)
}

/// Screen-space parameters that stay fixed for a whole frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: usize,
    pub height: usize,
    pub horizontal_offset: f32,
    pub depth_scale: f32,
}

/// A sample after perspective divide, still in fractional screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Reciprocal of the biased depth; larger is closer.
    pub inv_depth: f32,
}

impl Projected {
    /// Linear cell index, or `None` when it falls outside the `width * height` grid.
    ///
    /// Coordinates are truncated toward zero and combined as `x + y * width`
    /// before the range check, so a slightly negative `x` lands at the end of
    /// the previous row rather than being rejected. Indices that overflow are
    /// dropped like any other out-of-range cell.
    #[inline(always)]
    pub fn cell(&self, width: usize, height: usize) -> Option<usize> {
        let x = self.x as i64;
        let y = self.y as i64;
        let idx = y.checked_mul(width as i64)?.checked_add(x)?;
        let len = (width * height) as i64;
        if (0..len).contains(&idx) {
            Some(idx as usize)
        } else {
            None
        }
    }
}

/// Project an already rotated point onto the screen.
///
/// The x axis is scaled by two because terminal cells are roughly twice as
/// tall as they are wide.
#[inline(always)]
pub fn project(rotated: Vec3, screen: &Screen) -> Projected {
    let inv_depth = 1.0 / (rotated.z + DEPTH_BIAS);
    let half_w = (screen.width / 2) as f32;
    let half_h = (screen.height / 2) as f32;
    Projected {
        x: half_w + screen.horizontal_offset + screen.depth_scale * inv_depth * rotated.x * 2.0,
        y: half_h + screen.depth_scale * inv_depth * rotated.y,
        inv_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS
    }

    #[test]
    fn zero_angles_are_identity() {
        let p = Vec3::new(3.0, -7.5, 12.0);
        assert!(close(rotate(p, Angles::default()), p));
    }

    #[test]
    fn rotation_preserves_length() {
        let points = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-20.0, 20.0, -20.0),
            Vec3::new(0.5, 0.0, -9.0),
        ];
        let angle_sets = [
            Angles::new(0.3, 1.1, -2.4),
            Angles::new(10.0, 20.0, 30.0),
            Angles::new(0.05, 0.05, 0.05),
        ];
        for p in points {
            for angles in angle_sets {
                let r = rotate(p, angles);
                let diff = (r.length() - p.length()).abs();
                assert!(diff < 1e-3 * p.length().max(1.0), "{p:?} {angles:?} -> {r:?}");
            }
        }
    }

    #[test]
    fn quarter_turn_about_x_maps_y_to_z() {
        // With only `a` set, z' = z cos a - y sin a.
        let r = rotate(
            Vec3::new(0.0, 1.0, 0.0),
            Angles::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
        );
        assert!(close(r, Vec3::new(0.0, 0.0, -1.0)), "{r:?}");
    }

    #[test]
    fn projection_centers_the_origin() {
        let screen = Screen {
            width: 80,
            height: 24,
            horizontal_offset: 0.0,
            depth_scale: 20.0,
        };
        let p = project(Vec3::default(), &screen);
        assert_eq!(p.x, 40.0);
        assert_eq!(p.y, 12.0);
        assert_eq!(p.inv_depth, 1.0 / DEPTH_BIAS);
    }

    #[test]
    fn cell_wraps_negative_x_into_previous_row() {
        let p = Projected {
            x: -2.5,
            y: 1.2,
            inv_depth: 0.01,
        };
        // trunc(-2.5) = -2, trunc(1.2) = 1 => -2 + 10
        assert_eq!(p.cell(10, 10), Some(8));
    }

    #[test]
    fn cell_rejects_out_of_range_indices() {
        let above = Projected {
            x: 0.0,
            y: -1.0,
            inv_depth: 0.01,
        };
        let below = Projected {
            x: 0.0,
            y: 10.0,
            inv_depth: 0.01,
        };
        assert_eq!(above.cell(10, 10), None);
        assert_eq!(below.cell(10, 10), None);
        assert_eq!(above.cell(0, 0), None);
    }

    #[test]
    fn cell_drops_saturated_coordinates() {
        let huge = Projected {
            x: f32::INFINITY,
            y: f32::INFINITY,
            inv_depth: 0.01,
        };
        let tiny = Projected {
            x: f32::NEG_INFINITY,
            y: 1e30,
            inv_depth: 0.01,
        };
        assert_eq!(huge.cell(160, 44), None);
        assert_eq!(tiny.cell(160, 44), None);
    }
}
