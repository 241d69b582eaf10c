//! Break marks, step mode, continue and quit.

use crate::common::*;
use hexagony::{Axial, RunStatus};

#[test]
fn test_break_mark_pauses_before_the_first_tick() {
    // Quitting at the very first pause leaves the program untouched.
    let executor = run_with_debugger("`.@", "q", false);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 1);
    assert_eq!(executor.ips[0].pos, Axial::new(0, -1));
    assert!(executor.output.is_empty());
}

#[test]
fn test_continue_runs_to_completion_without_more_pauses() {
    let executor = run_with_debugger("`.@", "c", false);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 1);
    // The run went on to execute `@`.
    assert_eq!(executor.ips[0].pos, Axial::new(-1, 0));
}

#[test]
fn test_step_mode_pauses_on_every_instruction() {
    let executor = run_with_debugger("`..@", "sss", false);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 3);
}

#[test]
fn test_step_then_continue_stops_pausing() {
    let executor = run_with_debugger("`..@", "sc", false);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 2);
}

#[test]
fn test_quit_mid_run_halts_cleanly() {
    let executor = run_with_debugger("`..@", "sq", false);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 2);
    // The quit happened while paused on the second cell.
    assert_eq!(executor.ips[0].pos, Axial::new(-1, 0));
    assert!(executor.output.is_empty());
}

#[test]
fn test_forced_step_mode_pauses_without_break_marks() {
    let executor = run_with_debugger(".@", "c", true);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 1);
}

#[test]
fn test_forced_step_mode_walks_to_the_halt() {
    let executor = run_with_debugger(".@", "ss", true);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 2);
}

#[test]
fn test_exhausted_command_script_quits() {
    let executor = run_with_debugger(".@", "", true);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.ips[0].pos, Axial::new(0, -1));
}

#[test]
fn test_unknown_commands_do_not_consume_the_pause() {
    let executor = run_with_debugger("`.@", "zc", false);
    assert_eq!(executor.status, RunStatus::Halted);
    assert_eq!(executor.debugger.pauses(), 1);
}
