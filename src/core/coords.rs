//! Hexagonal coordinate mathematics.
//!
//! Everything in the interpreter is addressed with axial coordinates
//! `(p, q)`; the derived cubic triple is `(p, q, -p-q)`. Two index mappings
//! are built on top of these coordinates:
//!
//! - the **row** mapping stores a fixed hexagon of side `rings` row by row
//!   (program storage);
//! - the **radial** mapping enumerates ring 0 first, then each ring
//!   clockwise from its top-left corner (memory storage, which grows
//!   outward one ring at a time).
//!
//! See <https://www.redblobgames.com/grids/hexagons/> for terminology.

use std::fmt;

use crate::core::direction::Direction;

/// Mathematical modulus. The result carries the sign of `b`, so
/// `modulo(a, b)` lies in `[0, |b|)` when `b > 0`.
pub fn modulo(a: i64, b: i64) -> i64 {
    let r = a % b.abs();
    let r = if r < 0 { r + b.abs() } else { r };
    if b < 0 {
        -r
    } else {
        r
    }
}

/// Number of cells in a full hexagon of side `rings`: the `rings`-th
/// centered hexagonal number, `3R(R-1) + 1`.
pub fn hex_area(rings: i64) -> usize {
    (3 * rings * (rings - 1) + 1) as usize
}

/// One of the three cubic axes.
///
/// Program-side, an axis names a reflection line through the hexagon.
/// Memory-side, it selects one of the three edges stored in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index into a cubic `[x, y, z]` triple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The axis `by` steps around the X → Y → Z cycle (negative steps go
    /// backwards).
    pub fn cycled(self, by: i64) -> Axis {
        match modulo(self.index() as i64 + by, 3) {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// Axial hex-grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Axial {
    pub p: i64,
    pub q: i64,
}

impl Axial {
    /// The grid origin `(0, 0)`.
    pub const ORIGIN: Axial = Axial { p: 0, q: 0 };

    pub fn new(p: i64, q: i64) -> Self {
        Axial { p, q }
    }

    /// The derived third cubic component.
    pub fn z(self) -> i64 {
        -self.p - self.q
    }

    /// The full cubic triple `[x, y, z]`.
    pub fn cubic(self) -> [i64; 3] {
        [self.p, self.q, self.z()]
    }

    /// Hexagonal distance from the origin: half the Manhattan distance in
    /// cubic coordinates. Ring `r` holds `6r` cells for `r >= 1`.
    pub fn ring(self) -> i64 {
        (self.p.abs() + self.q.abs() + self.z().abs()) / 2
    }

    /// The adjacent coordinate one step in `dir`.
    pub fn step(self, dir: Direction) -> Axial {
        let (dp, dq) = dir.offset();
        Axial::new(self.p + dp, self.q + dq)
    }

    /// Reflect across a cubic axis.
    pub fn reflect(self, axis: Axis) -> Axial {
        match axis {
            Axis::X => Axial::new(-self.p, self.p + self.q),
            Axis::Y => Axial::new(self.p + self.q, -self.q),
            Axis::Z => Axial::new(-self.q, -self.p),
        }
    }

    /// Index of this coordinate in a hexagon of side `rings` stored row by
    /// row along the z axis. `None` when the coordinate falls outside the
    /// hexagon.
    pub fn row_index(self, rings: i64) -> Option<usize> {
        let [x, y, z] = self.cubic();
        if x.abs() + y.abs() + z.abs() > 2 * (rings - 1) {
            return None;
        }
        let i = (3 * rings * (rings - 1)) / 2
            + y
            + -z * (rings * 2 - 1)
            + z * (z.abs() + 1) / 2;
        Some(i as usize)
    }

    /// Index of this coordinate in the radial (ring-by-ring) ordering.
    ///
    /// Ring `r` starts at `3r(r-1) + 1` and occupies `6r` slots, walked
    /// clockwise from the top-left corner. The offset within the ring is
    /// the sum of one term per sextant predicate that holds; the six edge
    /// segments chain without gaps.
    pub fn radial_index(self) -> usize {
        let [x, y, z] = self.cubic();
        let ring = self.ring();
        let mut i = if ring > 0 { 3 * ring * (ring - 1) + 1 } else { 0 };
        if x <= 0 && y < 0 {
            i += x.abs();
        }
        if y >= 0 && z > 0 {
            i += ring + y.abs();
        }
        if z <= 0 && x < 0 {
            i += ring * 2 + z.abs();
        }
        if x >= 0 && y > 0 {
            i += ring * 3 + x.abs();
        }
        if y <= 0 && z < 0 {
            i += ring * 4 + y.abs();
        }
        if z >= 0 && x > 0 {
            i += ring * 5 + z.abs();
        }
        i as usize
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.p, self.q)
    }
}
