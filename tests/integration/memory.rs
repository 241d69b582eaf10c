//! Memory grid and pointer behavior over longer walks.

use crate::common::*;
use hexagony::{Axial, Axis, MemoryGrid, MemoryPointer, Side};
use std::collections::HashMap;

fn side_for(i: i64) -> Side {
    if (i * i + 1) % 3 == 0 {
        Side::Left
    } else {
        Side::Right
    }
}

#[test]
fn test_values_written_along_a_walk_stay_put() {
    let mut grid = MemoryGrid::new();
    let mut mp = MemoryPointer::START;
    let mut expected = HashMap::new();
    for i in 0..200 {
        mp.move_to(side_for(i));
        grid.set_edge(&mp, i);
        expected.insert((mp.cell, mp.axis), i);
    }
    for ((cell, axis), value) in expected {
        assert_eq!(grid.peek(cell, axis), value, "edge {} {}", cell, axis);
    }
}

#[test]
fn test_neighbor_lookup_agrees_with_moving() {
    let mut grid = MemoryGrid::new();
    let mut mp = MemoryPointer::START;
    for i in 0..100 {
        let side = side_for(i);
        let seen = grid.neighbor(&mp, side);
        mp.move_to(side);
        assert_eq!(grid.edge(&mp), seen);
        grid.set_edge(&mp, i);
    }
}

#[test]
fn test_grid_growth_is_monotonic() {
    let mut grid = MemoryGrid::new();
    let far = MemoryPointer {
        cell: Axial::new(0, -5),
        axis: Axis::X,
        ..MemoryPointer::START
    };
    grid.set_edge(&far, 1);
    assert_eq!(grid.rings(), 6);

    // Writing close to the origin never shrinks the grid.
    grid.set_edge(&MemoryPointer::START, 1);
    assert_eq!(grid.rings(), 6);
}

#[test]
fn test_back_right_instruction_equals_reverse_left_reverse() {
    let mut short = executor("'");
    short.step();

    let mut spelled = executor("={=");
    spelled.step();
    spelled.step();
    spelled.step();

    assert_eq!(short.mp, spelled.mp);
}

#[test]
fn test_back_left_instruction_equals_reverse_right_reverse() {
    let mut short = executor("\"");
    short.step();

    let mut spelled = executor("=}=");
    spelled.step();
    spelled.step();
    spelled.step();

    assert_eq!(short.mp, spelled.mp);
}
