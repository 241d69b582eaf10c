//! Instruction pointers and rim reflection.
//!
//! Six pointers exist at all times, one per corner of the program
//! hexagon, but only one is ever active. A pointer that steps off the
//! hexagon is reflected across one of the three cubic axes and reappears
//! on the opposite side with its direction unchanged.

use crate::core::{Axial, Axis, Direction};

/// One of the six instruction pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionPointer {
    pub pos: Axial,
    pub dir: Direction,
    /// Set by `$`; exactly one following instruction is skipped.
    pub skip_next: bool,
}

impl InstructionPointer {
    pub fn new(pos: Axial, dir: Direction) -> Self {
        InstructionPointer {
            pos,
            dir,
            skip_next: false,
        }
    }

    /// The six pointers of a side-`rings` program: one per corner, each
    /// aimed along the clockwise-next edge. Pointer 0 sits at the top
    /// corner heading east.
    pub fn corners(rings: i64) -> [InstructionPointer; 6] {
        let r = rings - 1;
        [
            InstructionPointer::new(Axial::new(0, -r), Direction::E),
            InstructionPointer::new(Axial::new(-r, 0), Direction::SE),
            InstructionPointer::new(Axial::new(-r, r), Direction::SW),
            InstructionPointer::new(Axial::new(0, r), Direction::W),
            InstructionPointer::new(Axial::new(r, 0), Direction::NW),
            InstructionPointer::new(Axial::new(r, -r), Direction::NE),
        ]
    }

    /// Advance one step, reflecting at the rim.
    ///
    /// When the tentative step stays inside the side-`rings` hexagon it
    /// is simply taken. Otherwise the *pre-step* position is reflected
    /// across a cubic axis and the direction is preserved. The axis is
    /// chosen by which side of the hexagon the step left through; the
    /// zero cases come first so that corner exits (where two cubic
    /// components vanish or two sides meet) are decided by the current
    /// memory edge rather than by the product rules.
    pub fn advance(&mut self, rings: i64, current_edge: i64) {
        let next = self.pos.step(self.dir);
        let [np, nq, nr] = next.cubic();
        if np.abs() + nq.abs() + nr.abs() < 2 * rings {
            self.pos = next;
            return;
        }
        let axis = if np == 0 {
            if current_edge > 0 {
                Axis::Y
            } else {
                Axis::Z
            }
        } else if nq == 0 {
            if current_edge > 0 {
                Axis::Z
            } else {
                Axis::X
            }
        } else if nr == 0 {
            if current_edge > 0 {
                Axis::X
            } else {
                Axis::Y
            }
        } else if nq * nr > 0 {
            Axis::X
        } else if nr * np > 0 {
            Axis::Y
        } else {
            Axis::Z
        };
        self.pos = self.pos.reflect(axis);
    }
}
