//! The six cube faces as a fixed table.
//!
//! Each face pins one axis at `±half_width` and fills the two remaining axes
//! (in x, y, z order) from the surface parameters `(u, v)`.

use term_cube_types::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Where a free coordinate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    U,
    V,
    NegU,
    NegV,
}

impl Param {
    #[inline(always)]
    fn pick(self, u: f32, v: f32) -> f32 {
        match self {
            Param::U => u,
            Param::V => v,
            Param::NegU => -u,
            Param::NegV => -v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub name: &'static str,
    pub fixed: Axis,
    /// `-1.0` or `1.0`.
    pub sign: f32,
    pub free: [Param; 2],
    pub symbol: char,
}

impl Face {
    /// Object-space point for surface parameters `(u, v)` on a cube of half-width `h`.
    #[inline(always)]
    pub fn point(&self, u: f32, v: f32, h: f32) -> Vec3 {
        let pinned = self.sign * h;
        let a = self.free[0].pick(u, v);
        let b = self.free[1].pick(u, v);
        match self.fixed {
            Axis::X => Vec3::new(pinned, a, b),
            Axis::Y => Vec3::new(a, pinned, b),
            Axis::Z => Vec3::new(a, b, pinned),
        }
    }
}

/// Faces in draw order. Earlier faces win depth ties.
pub const FACES: [Face; 6] = [
    Face {
        name: "front",
        fixed: Axis::Z,
        sign: -1.0,
        free: [Param::U, Param::V],
        symbol: '@',
    },
    Face {
        name: "right",
        fixed: Axis::X,
        sign: 1.0,
        free: [Param::V, Param::U],
        symbol: '$',
    },
    Face {
        name: "left",
        fixed: Axis::X,
        sign: -1.0,
        free: [Param::V, Param::NegU],
        symbol: '~',
    },
    Face {
        name: "back",
        fixed: Axis::Z,
        sign: 1.0,
        free: [Param::NegU, Param::V],
        symbol: '#',
    },
    Face {
        name: "bottom",
        fixed: Axis::Y,
        sign: -1.0,
        free: [Param::U, Param::NegV],
        symbol: ';',
    },
    Face {
        name: "top",
        fixed: Axis::Y,
        sign: 1.0,
        free: [Param::U, Param::V],
        symbol: '+',
    },
];
