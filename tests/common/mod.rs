//! Shared helpers for the integration tests.

#![allow(dead_code)]

use hexagony::*;

/// Parse a source string into a program grid.
pub fn parse(source: &str) -> ProgramGrid {
    ProgramGrid::parse(source.as_bytes())
}

/// Build an executor with captured output and scripted input.
pub fn executor_with_input(source: &str, input: &[u8]) -> Executor {
    let mut executor = Executor::with_config(parse(source), ExecutorConfig::captured(input));
    executor.debugger = Debugger::scripted("");
    executor
}

/// Build an executor with captured output and no input.
pub fn executor(source: &str) -> Executor {
    executor_with_input(source, b"")
}

/// Run a source to completion and return the finished executor.
pub fn run(source: &str) -> Executor {
    let mut executor = executor(source);
    executor.run();
    executor
}

/// Run a source with input to completion.
pub fn run_with_input(source: &str, input: &[u8]) -> Executor {
    let mut executor = executor_with_input(source, input);
    executor.run();
    executor
}

/// Run a source under a scripted debugger.
pub fn run_with_debugger(source: &str, commands: &str, force_debug: bool) -> Executor {
    let config = ExecutorConfig {
        force_debug,
        ..ExecutorConfig::captured(b"")
    };
    let mut executor = Executor::with_config(parse(source), config);
    executor.debugger = Debugger::scripted(commands);
    executor.run();
    executor
}
