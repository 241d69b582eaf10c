//! Instruction dispatch, mirrors, pointer switching and reflection.

use crate::common::*;
use hexagony::{Axial, Direction, RunStatus};

#[test]
fn test_backslash_mirror_deflects_into_halt() {
    let executor = run("\\.@");
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.ips[0].dir, Direction::SW);
    // The deflected pointer went straight from the top corner to `@`.
    assert_eq!(executor.ips[0].pos, Axial::new(1, -1));
    assert_eq!(executor.ticks(), 2);
}

#[test]
fn test_pipe_mirror_reflects_east_to_west() {
    let mut executor = executor("|......");
    executor.step();
    assert_eq!(executor.ips[0].dir, Direction::W);
    // Heading west out of the top corner wraps to the bottom-right.
    assert_eq!(executor.ips[0].pos, Axial::new(-1, 1));
}

#[test]
fn test_slash_mirror_reflects_east_to_northwest() {
    let mut executor = executor("/......");
    executor.step();
    assert_eq!(executor.ips[0].dir, Direction::NW);
    assert_eq!(executor.ips[0].pos, Axial::new(1, 0));
}

#[test]
fn test_underscore_mirror_passes_east_through() {
    let executor = run("_.@");
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.ips[0].dir, Direction::E);
}

#[test]
fn test_greater_than_branches_from_west() {
    // `|` sends the pointer west; it wraps onto `>` which branches on
    // the current edge.
    let mut exec = executor("|...>..");
    exec.step();
    exec.step();
    assert_eq!(exec.ips[0].dir, Direction::SW);

    let mut exec = executor("|...>..");
    let mp = exec.mp;
    exec.memory.set_edge(&mp, 1);
    exec.step();
    exec.step();
    assert_eq!(exec.ips[0].dir, Direction::NW);
}

#[test]
fn test_next_pointer_takes_over_at_its_position() {
    // `]` hands control to pointer 1, which advances off its corner and
    // executes the cell there on the next tick.
    let executor = run("]...@");
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.active, 1);
    assert_eq!(executor.ips[1].pos, Axial::new(-1, 1));
    // Pointer 0 never moved off its corner.
    assert_eq!(executor.ips[0].pos, Axial::new(0, -1));
}

#[test]
fn test_edge_selected_pointer_takes_over() {
    let executor = run("1#..@");
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.active, 1);
}

#[test]
fn test_question_mark_pushback_feeds_next_read() {
    // `?` stops at the first non-digit, which `,` then consumes.
    let executor = run_with_input("?,;@", b"12x");
    assert_eq!(executor.output, b"x");
}

#[test]
fn test_byte_output_is_modulo_256() {
    let executor = run("300;@");
    assert_eq!(executor.output, vec![44]);
}

#[test]
fn test_negative_byte_output_wraps_positive() {
    let executor = run("1~;@");
    assert_eq!(executor.output, vec![255]);
}
