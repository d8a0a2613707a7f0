//! Shared constants and value types for the cube renderer.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the projection core, the terminal sink and tests alike.
//!
//! # Animation constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEPTH_BIAS` | 100.0 | Added to rotated z so the camera stays in front of the cube |
//! | `ANGLE_STEP` | 0.05 | Radians added to every rotation angle per frame |
//! | `FRAME_INTERVAL_MS` | 8 | Pause between frames (~125 FPS target) |
//!
//! # Construction defaults
//!
//! | Constant | Value |
//! |----------|-------|
//! | `DEFAULT_HALF_WIDTH` | 20.0 |
//! | `DEFAULT_WINDOW_WIDTH` | 160 |
//! | `DEFAULT_WINDOW_HEIGHT` | 44 |
//! | `DEFAULT_SAMPLE_STEP` | 1.0 |
//! | `DEFAULT_DEPTH_SCALE` | 20.0 |
//!
//! # Examples
//!
//! ```
//! use term_cube_types::{Angles, Vec3, ANGLE_STEP};
//!
//! let mut angles = Angles::default();
//! angles.advance(ANGLE_STEP);
//! assert_eq!(angles.a, 0.05);
//!
//! let p = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(p.length(), 5.0);
//! ```

/// Fixed distance added to the rotated z coordinate before the perspective divide.
pub const DEPTH_BIAS: f32 = 100.0;

/// Rotation advance per frame, in radians, applied to all three angles.
pub const ANGLE_STEP: f32 = 0.05;

/// Real-time pause between frames in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 8;

/// Default cube half-width.
pub const DEFAULT_HALF_WIDTH: f32 = 20.0;

/// Default window width in cells.
pub const DEFAULT_WINDOW_WIDTH: usize = 160;

/// Default window height in cells.
pub const DEFAULT_WINDOW_HEIGHT: usize = 44;

/// Default distance between surface samples.
pub const DEFAULT_SAMPLE_STEP: f32 = 1.0;

/// Default projection zoom.
pub const DEFAULT_DEPTH_SCALE: f32 = 20.0;

/// Default background fill symbol.
pub const DEFAULT_BACKGROUND: char = ' ';

/// Largest half-width for which every rotation keeps the biased depth positive.
///
/// A corner sits at distance `sqrt(3) * h` from the center, so `h` must stay
/// below `DEPTH_BIAS / sqrt(3)` (about 57.7).
pub const MAX_HALF_WIDTH: f32 = 57.0;

/// A point or direction in object or camera space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Rotation about X (`a`), then Y (`b`), then Z (`c`), in radians.
///
/// Angles are never wrapped; they only grow as the animation advances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Angles {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Add `step` to every angle.
    pub fn advance(&mut self, step: f32) {
        self.a += step;
        self.b += step;
        self.c += step;
    }
}
