//! Execution trace logging.
//!
//! With tracing enabled the engine appends one line per executed
//! instruction to a log file: the tick number, the active pointer with
//! its position and direction, the instruction, and the memory pointer
//! with the value under it. Writes go through a buffered writer that is
//! flushed when the logger is dropped.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::{HexError, HexResult};
use crate::ip::InstructionPointer;
use crate::memory::MemoryPointer;

/// Default trace file name.
pub const DEFAULT_TRACE_PATH: &str = "hexagony-trace.log";

/// Configuration for the trace logger.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Path of the log file (appended to).
    pub log_path: PathBuf,
    /// Also echo every line to stdout.
    pub echo_stdout: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_TRACE_PATH),
            echo_stdout: false,
        }
    }
}

/// Buffered per-tick trace writer.
pub struct TraceLogger {
    config: TraceConfig,
    writer: BufWriter<std::fs::File>,
}

impl TraceLogger {
    /// Open (or create) the configured log file for appending.
    pub fn new(config: TraceConfig) -> HexResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_path)
            .map_err(|e| HexError::io("open", config.log_path.to_str(), &e))?;
        Ok(TraceLogger {
            writer: BufWriter::new(file),
            config,
        })
    }

    /// A logger writing to the given path with default options.
    pub fn with_path(path: impl AsRef<Path>) -> HexResult<Self> {
        Self::new(TraceConfig {
            log_path: path.as_ref().to_path_buf(),
            ..Default::default()
        })
    }

    /// Append one line for the instruction about to execute.
    pub fn log(
        &mut self,
        tick: u64,
        active: usize,
        ip: &InstructionPointer,
        instruction: char,
        mp: &MemoryPointer,
        edge: i64,
    ) {
        let line = format!(
            "[{:>8}] IP{} {} {} '{}' MP {} = {}",
            tick, active, ip.pos, ip.dir, instruction, mp, edge
        );
        if self.config.echo_stdout {
            println!("{}", line);
        }
        let _ = writeln!(self.writer, "{}", line);
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl Drop for TraceLogger {
    fn drop(&mut self) {
        self.flush();
    }
}
