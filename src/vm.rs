//! The execution engine.
//!
//! One `Executor` owns the whole interpreter state: the immutable
//! program grid, the growing memory grid, the memory pointer, the six
//! instruction pointers, and the byte I/O plumbing. Each tick executes
//! (or skips) exactly one instruction and then advances the active
//! pointer, until `@` halts the program or the debugger quits.
//!
//! Tick order matters and is fixed: skip check, fetch, debug gate,
//! instruction effect, advancement. `@` halts before the advancement
//! step so the final pointer position is the cell that halted.

use std::io::{self, Read, Write};

use crate::core::{modulo, HexError};
use crate::debugger::{DebugAction, Debugger};
use crate::ip::InstructionPointer;
use crate::memory::{MemoryGrid, MemoryPointer, Side};
use crate::program::ProgramGrid;
use crate::trace::TraceLogger;

/// Status of a program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The program is still running.
    Running,
    /// `@` was executed, or the debugger quit.
    Halted,
    /// An arithmetic trap terminated the run.
    Error(HexError),
}

/// Configuration for the executor.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Scripted input bytes, consumed before `read_stdin` kicks in.
    pub input: Vec<u8>,
    /// Fall back to the process stdin once scripted input runs out.
    pub read_stdin: bool,
    /// Write `;` and `!` output through to stdout as it is produced.
    pub immediate_output: bool,
    /// Start in step mode, as if every cell carried a break mark.
    pub force_debug: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            read_stdin: true,
            immediate_output: true,
            force_debug: false,
        }
    }
}

impl ExecutorConfig {
    /// Configuration for tests: scripted input only, captured output.
    pub fn captured(input: &[u8]) -> Self {
        Self {
            input: input.to_vec(),
            read_stdin: false,
            immediate_output: false,
            force_debug: false,
        }
    }
}

/// The Hexagony interpreter.
pub struct Executor {
    pub config: ExecutorConfig,
    program: ProgramGrid,
    pub memory: MemoryGrid,
    pub mp: MemoryPointer,
    pub ips: [InstructionPointer; 6],
    /// Index of the active instruction pointer.
    pub active: usize,
    pub status: RunStatus,
    /// Everything `;` and `!` produced, in order.
    pub output: Vec<u8>,
    pub debugger: Debugger,
    force_debug: bool,
    trace: Option<TraceLogger>,
    input_cursor: usize,
    pushback: Option<u8>,
    ticks: u64,
}

impl Executor {
    /// Create an executor with the default configuration.
    pub fn new(program: ProgramGrid) -> Self {
        Self::with_config(program, ExecutorConfig::default())
    }

    /// Create an executor with a custom configuration.
    pub fn with_config(program: ProgramGrid, config: ExecutorConfig) -> Self {
        let ips = InstructionPointer::corners(program.rings());
        let force_debug = config.force_debug;
        Executor {
            config,
            program,
            memory: MemoryGrid::new(),
            mp: MemoryPointer::START,
            ips,
            active: 0,
            status: RunStatus::Running,
            output: Vec::new(),
            debugger: Debugger::interactive(),
            force_debug,
            trace: None,
            input_cursor: 0,
            pushback: None,
            ticks: 0,
        }
    }

    /// The program being interpreted.
    pub fn program(&self) -> &ProgramGrid {
        &self.program
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The captured output as text (lossy for non-UTF-8 bytes).
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Attach an execution trace logger.
    pub fn set_trace(&mut self, trace: TraceLogger) {
        self.trace = Some(trace);
    }

    /// Run until the program halts or traps.
    pub fn run(&mut self) {
        while matches!(self.status, RunStatus::Running) {
            self.step();
        }
    }

    /// One tick: skip check, fetch, debug gate, instruction, advance.
    pub fn step(&mut self) {
        if !matches!(self.status, RunStatus::Running) {
            return;
        }

        if self.ips[self.active].skip_next {
            self.ips[self.active].skip_next = false;
            self.advance_active();
            self.ticks += 1;
            return;
        }

        let ip = self.ips[self.active];
        let cell = self.program.get(ip.pos);

        if cell.debug || self.force_debug {
            let action = {
                let Executor {
                    debugger,
                    program,
                    ips,
                    active,
                    memory,
                    mp,
                    ..
                } = self;
                debugger.pause(program, ips, *active, memory, mp, cell)
            };
            match action {
                DebugAction::Step => self.force_debug = true,
                DebugAction::Continue => self.force_debug = false,
                DebugAction::Quit => {
                    self.status = RunStatus::Halted;
                    return;
                }
            }
        }

        if let Some(trace) = self.trace.as_mut() {
            let edge = self.memory.edge(&self.mp);
            trace.log(self.ticks, self.active, &ip, cell.glyph(), &self.mp, edge);
        }

        self.execute(cell.value);
        if !matches!(self.status, RunStatus::Running) {
            return;
        }
        self.advance_active();
        self.ticks += 1;
    }

    /// Advance the active pointer, reflecting at the rim. Note that the
    /// IP-switching instructions change `active` before this runs, so
    /// the switched-to pointer is the one that moves.
    fn advance_active(&mut self) {
        let edge = self.memory.edge(&self.mp);
        let rings = self.program.rings();
        self.ips[self.active].advance(rings, edge);
    }

    fn execute(&mut self, value: u8) {
        match value {
            // no-op
            b'.' => {}

            // terminates the program, before the advancement step
            b'@' => self.status = RunStatus::Halted,

            // append a decimal digit to the current edge, preserving sign
            b'0'..=b'9' => {
                let digit = (value - b'0') as i64;
                let edge = self.memory.edge(&self.mp);
                let signed = if edge < 0 { -digit } else { digit };
                self.memory
                    .set_edge(&self.mp, edge.wrapping_mul(10).wrapping_add(signed));
            }

            // any letter stores its byte value in the current edge
            v if v.is_ascii_alphabetic() => self.memory.set_edge(&self.mp, v as i64),

            b')' => {
                let edge = self.memory.edge(&self.mp);
                self.memory.set_edge(&self.mp, edge.wrapping_add(1));
            }
            b'(' => {
                let edge = self.memory.edge(&self.mp);
                self.memory.set_edge(&self.mp, edge.wrapping_sub(1));
            }

            b'+' => self.binary_op(|l, r| Ok(l.wrapping_add(r))),
            b'-' => self.binary_op(|l, r| Ok(l.wrapping_sub(r))),
            b'*' => self.binary_op(|l, r| Ok(l.wrapping_mul(r))),
            b':' => self.binary_op(|l, r| {
                if r == 0 {
                    Err(HexError::DivisionByZero { dividend: l })
                } else {
                    Ok(l.wrapping_div(r))
                }
            }),
            b'%' => self.binary_op(|l, r| {
                if r == 0 {
                    Err(HexError::ModuloByZero { dividend: l })
                } else {
                    Ok(l.wrapping_rem(r))
                }
            }),

            b'~' => {
                let edge = self.memory.edge(&self.mp);
                self.memory.set_edge(&self.mp, edge.wrapping_neg());
            }

            // one byte from input, -1 on end of input
            b',' => {
                let value = match self.read_byte() {
                    Some(byte) => byte as i64,
                    None => -1,
                };
                self.memory.set_edge(&self.mp, value);
            }

            b'?' => self.read_integer(),

            // current edge modulo 256 as one byte
            b';' => {
                let edge = self.memory.edge(&self.mp);
                self.emit(&[modulo(edge, 256) as u8]);
            }

            // current edge as signed decimal text
            b'!' => {
                let edge = self.memory.edge(&self.mp);
                self.emit(edge.to_string().as_bytes());
            }

            // skip the next instruction in the current direction
            b'$' => self.ips[self.active].skip_next = true,

            b'/' => {
                let dir = self.ips[self.active].dir;
                self.ips[self.active].dir = dir.mirror_slash();
            }
            b'\\' => {
                let dir = self.ips[self.active].dir;
                self.ips[self.active].dir = dir.mirror_backslash();
            }
            b'_' => {
                let dir = self.ips[self.active].dir;
                self.ips[self.active].dir = dir.mirror_underscore();
            }
            b'|' => {
                let dir = self.ips[self.active].dir;
                self.ips[self.active].dir = dir.mirror_pipe();
            }

            b'<' => self.mirror_less_than(),
            b'>' => self.mirror_greater_than(),

            // switch to the previous pointer
            b'[' => self.active = modulo(self.active as i64 - 1, 6) as usize,
            // switch to the next pointer
            b']' => self.active = modulo(self.active as i64 + 1, 6) as usize,
            // switch to the pointer selected by the current edge
            b'#' => self.active = modulo(self.memory.edge(&self.mp), 6) as usize,

            b'{' => self.mp.move_to(Side::Left),
            b'}' => self.mp.move_to(Side::Right),
            // backwards-right, equivalent to ={=
            b'\'' => self.mp.back_right(),
            // backwards-left, equivalent to =}=
            b'"' => self.mp.back_left(),
            b'=' => self.mp.reverse(),

            // branch the pointer: left on non-positive, right on positive
            b'^' => {
                let side = if self.memory.edge(&self.mp) <= 0 {
                    Side::Left
                } else {
                    Side::Right
                };
                self.mp.move_to(side);
            }

            // copy a neighbour: left on non-positive, right on positive
            b'&' => {
                let side = if self.memory.edge(&self.mp) <= 0 {
                    Side::Left
                } else {
                    Side::Right
                };
                let value = self.memory.neighbor(&self.mp, side);
                self.memory.set_edge(&self.mp, value);
            }

            // unrecognized bytes are no-ops
            _ => {}
        }
    }

    /// Set the current edge to `left OP right` over the neighbouring
    /// edges, trapping on the two zero-divisor cases.
    fn binary_op(&mut self, op: fn(i64, i64) -> Result<i64, HexError>) {
        let left = self.memory.neighbor(&self.mp, Side::Left);
        let right = self.memory.neighbor(&self.mp, Side::Right);
        match op(left, right) {
            Ok(value) => self.memory.set_edge(&self.mp, value),
            Err(err) => self.status = RunStatus::Error(err),
        }
    }

    /// `<` acts as a mirror from every direction except east, where it
    /// branches on the current edge.
    fn mirror_less_than(&mut self) {
        use crate::core::Direction::*;
        let dir = self.ips[self.active].dir;
        self.ips[self.active].dir = match dir {
            NW => W,
            NE => SW,
            E => {
                if self.memory.edge(&self.mp) > 0 {
                    SE
                } else {
                    NE
                }
            }
            SE => NW,
            SW => W,
            W => E,
        };
    }

    /// `>` is the west-facing counterpart of `<`.
    fn mirror_greater_than(&mut self) {
        use crate::core::Direction::*;
        let dir = self.ips[self.active].dir;
        self.ips[self.active].dir = match dir {
            NW => SE,
            NE => E,
            E => W,
            SE => E,
            SW => NE,
            W => {
                if self.memory.edge(&self.mp) > 0 {
                    NW
                } else {
                    SW
                }
            }
        };
    }

    /// One byte of input: pushback slot, then the scripted buffer, then
    /// (when configured) the process stdin. `None` means end of input.
    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pushback.take() {
            return Some(byte);
        }
        if self.input_cursor < self.config.input.len() {
            let byte = self.config.input[self.input_cursor];
            self.input_cursor += 1;
            return Some(byte);
        }
        if self.config.read_stdin {
            let mut byte = [0u8; 1];
            match io::stdin().lock().read(&mut byte) {
                Ok(1) => Some(byte[0]),
                _ => None,
            }
        } else {
            None
        }
    }

    fn unread(&mut self, byte: u8) {
        self.pushback = Some(byte);
    }

    /// `?`: discard input until a digit or sign, then parse a signed
    /// decimal integer greedily. End of input before any digit or sign
    /// stores 0; a lone sign also parses as 0. The byte that ends the
    /// digit run is pushed back.
    fn read_integer(&mut self) {
        let mut first = None;
        while let Some(byte) = self.read_byte() {
            if byte.is_ascii_digit() || byte == b'+' || byte == b'-' {
                first = Some(byte);
                break;
            }
        }
        let first = match first {
            Some(byte) => byte,
            None => {
                self.memory.set_edge(&self.mp, 0);
                return;
            }
        };
        let negative = first == b'-';
        let mut value = if first.is_ascii_digit() {
            (first - b'0') as i64
        } else {
            0
        };
        while let Some(byte) = self.read_byte() {
            if byte.is_ascii_digit() {
                value = value.wrapping_mul(10).wrapping_add((byte - b'0') as i64);
            } else {
                self.unread(byte);
                break;
            }
        }
        if negative {
            value = value.wrapping_neg();
        }
        self.memory.set_edge(&self.mp, value);
    }

    fn emit(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
        if self.config.immediate_output {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(bytes);
            let _ = stdout.flush();
        }
    }
}
