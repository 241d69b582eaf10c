//! The six cardinal directions of the hexagonal program grid.
//!
//! Directions are named for the flat-top hexagon layout the program is
//! rendered in: east/west run along a row, the other four move between
//! rows. The four unconditional mirror instructions are pure lookup
//! tables over directions and live here; the conditional mirrors `<` and
//! `>` read the current memory edge and are handled by the dispatch.

use std::fmt;

/// A direction of instruction-pointer travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NW,
    NE,
    E,
    SE,
    SW,
    W,
}

impl Direction {
    /// All directions, in table order.
    pub const ALL: [Direction; 6] = [
        Direction::NW,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::SW,
        Direction::W,
    ];

    /// Axial `(dp, dq)` offset of one step in this direction.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::NW => (0, -1),
            Direction::NE => (-1, 0),
            Direction::E => (-1, 1),
            Direction::SE => (0, 1),
            Direction::SW => (1, 0),
            Direction::W => (1, -1),
        }
    }

    /// Deflection by the `/` mirror.
    pub fn mirror_slash(self) -> Direction {
        match self {
            Direction::NW => Direction::E,
            Direction::NE => Direction::NE,
            Direction::E => Direction::NW,
            Direction::SE => Direction::W,
            Direction::SW => Direction::SW,
            Direction::W => Direction::SE,
        }
    }

    /// Deflection by the `\` mirror.
    pub fn mirror_backslash(self) -> Direction {
        match self {
            Direction::NW => Direction::NW,
            Direction::NE => Direction::W,
            Direction::E => Direction::SW,
            Direction::SE => Direction::SE,
            Direction::SW => Direction::E,
            Direction::W => Direction::NE,
        }
    }

    /// Deflection by the `_` mirror.
    pub fn mirror_underscore(self) -> Direction {
        match self {
            Direction::NW => Direction::SW,
            Direction::NE => Direction::SE,
            Direction::E => Direction::E,
            Direction::SE => Direction::NE,
            Direction::SW => Direction::NW,
            Direction::W => Direction::W,
        }
    }

    /// Deflection by the `|` mirror.
    pub fn mirror_pipe(self) -> Direction {
        match self {
            Direction::NW => Direction::NE,
            Direction::NE => Direction::NW,
            Direction::E => Direction::W,
            Direction::SE => Direction::SW,
            Direction::SW => Direction::SE,
            Direction::W => Direction::E,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::NW => write!(f, "NORTH WEST"),
            Direction::NE => write!(f, "NORTH EAST"),
            Direction::E => write!(f, "EAST"),
            Direction::SE => write!(f, "SOUTH EAST"),
            Direction::SW => write!(f, "SOUTH WEST"),
            Direction::W => write!(f, "WEST"),
        }
    }
}
