//! The break-point debugger.
//!
//! The engine pauses here whenever the fetched cell carries a break mark
//! (a backtick in the source) or step mode is active. The pause renders
//! the program hexagon, the six pointers and a neighbourhood of the
//! memory grid, then reads a one-letter command.
//!
//! # Commands
//!
//! - `s` - step: pause again on the next instruction
//! - `c` - continue: run until the next break mark
//! - `q` - quit the program immediately
//!
//! Anything else re-prompts; end of input counts as `q`.

use std::io::{self, BufRead, Write};

use crate::ip::InstructionPointer;
use crate::memory::{MemoryGrid, MemoryPointer};
use crate::program::{ProgramCell, ProgramGrid};
use crate::render::{self, colors};

/// What a break prompt decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    /// Keep pausing on every instruction.
    Step,
    /// Run until the next break mark.
    Continue,
    /// Halt the program now.
    Quit,
}

/// The break prompt.
#[derive(Debug, Default)]
pub struct Debugger {
    /// Scripted commands, consumed before interactive input.
    scripted: Vec<char>,
    cursor: usize,
    /// Read further commands from stdin once the script runs out.
    interactive: bool,
    /// Number of pauses served so far.
    pauses: usize,
}

impl Debugger {
    /// A debugger that renders state and prompts on stdin.
    pub fn interactive() -> Self {
        Debugger {
            interactive: true,
            ..Default::default()
        }
    }

    /// A silent debugger fed from a fixed command script; running out of
    /// script counts as end of input. Used by tests.
    pub fn scripted(commands: &str) -> Self {
        Debugger {
            scripted: commands.chars().collect(),
            ..Default::default()
        }
    }

    /// Number of pauses served so far.
    pub fn pauses(&self) -> usize {
        self.pauses
    }

    /// Serve one pause: show the engine state and read a command.
    pub fn pause(
        &mut self,
        program: &ProgramGrid,
        ips: &[InstructionPointer; 6],
        active: usize,
        memory: &MemoryGrid,
        mp: &MemoryPointer,
        cell: ProgramCell,
    ) -> DebugAction {
        self.pauses += 1;
        if self.interactive {
            self.show(program, ips, active, memory, mp, cell);
        }
        loop {
            match self.next_command() {
                Some('s') => return DebugAction::Step,
                Some('c') => return DebugAction::Continue,
                Some('q') | None => return DebugAction::Quit,
                Some(_) => {}
            }
        }
    }

    fn show(
        &self,
        program: &ProgramGrid,
        ips: &[InstructionPointer; 6],
        active: usize,
        memory: &MemoryGrid,
        mp: &MemoryPointer,
        cell: ProgramCell,
    ) {
        if cell.debug {
            println!("break");
        }
        println!("\nPaused on '{}'", cell.glyph());
        println!("Active IP: {}", active);
        print!("{}", render::render_program(program, ips));
        for (i, ip) in ips.iter().enumerate() {
            println!(
                "IP {}{}{} {} {}",
                colors::IP[i],
                i,
                colors::RESET,
                ip.pos,
                ip.dir
            );
        }
        print!("{}", render::render_memory(memory, mp));
        println!("MP: {} = {}", mp, memory.edge(mp));
    }

    /// The next command character: script first, then one line of stdin
    /// per prompt. `None` means end of input.
    fn next_command(&mut self) -> Option<char> {
        if self.cursor < self.scripted.len() {
            let command = self.scripted[self.cursor];
            self.cursor += 1;
            return Some(command);
        }
        if !self.interactive {
            return None;
        }
        print!(": ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            // An empty line re-prompts.
            Ok(_) => Some(line.trim().chars().next().unwrap_or(' ')),
        }
    }
}
