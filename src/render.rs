//! Terminal rendering of the program and memory grids.
//!
//! Both renderers return plain strings with ANSI escapes embedded; the
//! debugger prints them. The program hexagon shows every cell with its
//! break mark, coloring the cells the six pointers stand on. The memory
//! view shows a fixed neighbourhood of rings around the memory pointer
//! with the current edge highlighted.

use crate::core::hex_area;
use crate::ip::InstructionPointer;
use crate::memory::{MemoryGrid, MemoryPointer};
use crate::program::ProgramGrid;

/// ANSI escape sequences used by the renderers.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Per-pointer colors, pointer 0 first: red, green, yellow, blue,
    /// magenta, cyan.
    pub const IP: [&str; 6] = [
        "\x1b[0;31m",
        "\x1b[0;32m",
        "\x1b[0;33m",
        "\x1b[0;34m",
        "\x1b[0;35m",
        "\x1b[0;36m",
    ];
    /// The memory edge under the pointer.
    pub const MP: &str = "\x1b[0;31m";
}

/// Digits reserved for one edge value in the memory view.
const EDGE_WIDTH: usize = 2;

/// Rings around the memory pointer shown by the memory view.
const VIEW_RINGS: i64 = 4;

/// Render the program hexagon, coloring each pointer's cell.
pub fn render_program(program: &ProgramGrid, ips: &[InstructionPointer; 6]) -> String {
    let rings = program.rings();
    let ip_cells: Vec<Option<usize>> = ips.iter().map(|ip| ip.pos.row_index(rings)).collect();

    let mut out = String::new();
    let mut index = 0;
    for row in -(rings - 1)..rings {
        for _ in 0..row.abs() {
            out.push(' ');
        }
        for _ in 0..(2 * rings - 1 - row.abs()) {
            let color = ip_cells
                .iter()
                .position(|cell| *cell == Some(index))
                .map(|ip| colors::IP[ip]);
            if let Some(color) = color {
                out.push_str(color);
            }
            let cell = program.cell_at_index(index);
            out.push(if cell.debug { '`' } else { ' ' });
            out.push(cell.glyph());
            if color.is_some() {
                out.push_str(colors::RESET);
            }
            index += 1;
        }
        out.push('\n');
    }
    debug_assert_eq!(index, hex_area(rings));
    out
}

/// Render the memory neighbourhood around the pointer.
///
/// Each cell prints on two lines: the Z edge above, then the X and Y
/// edges separated by `'`. Coordinates are relative to the pointer's
/// cell; its current edge is highlighted.
pub fn render_memory(memory: &MemoryGrid, mp: &MemoryPointer) -> String {
    use crate::core::{Axial, Axis};

    let mut out = format!("[{} rings allocated]\n", memory.rings());
    for z in (-VIEW_RINGS..=VIEW_RINGS).rev() {
        let mut x = VIEW_RINGS;
        let mut y = -VIEW_RINGS;
        if z > 0 {
            x -= z;
        }
        if z < 0 {
            y -= z;
        }

        // Upper line: Z edges.
        for _ in 0..z.abs() {
            out.push_str(&format!("  {:>width$} ", "", width = EDGE_WIDTH));
        }
        let mut p = x;
        let mut q = y;
        while p.abs() + q.abs() + z.abs() <= 2 * VIEW_RINGS {
            let cell = Axial::new(mp.cell.p + p, mp.cell.q + q);
            let here = p == 0 && q == 0;
            out.push_str("    ");
            push_edge(&mut out, memory.peek(cell, Axis::Z), here && mp.axis == Axis::Z);
            out.push_str(&format!(" {:>width$} ", "", width = EDGE_WIDTH));
            p -= 1;
            q += 1;
        }
        out.push('\n');

        // Lower line: X and Y edges.
        for _ in 0..z.abs() {
            out.push_str(&format!("  {:>width$} ", "", width = EDGE_WIDTH));
        }
        let mut p = x;
        let mut q = y;
        while p.abs() + q.abs() + z.abs() <= 2 * VIEW_RINGS {
            let cell = Axial::new(mp.cell.p + p, mp.cell.q + q);
            let here = p == 0 && q == 0;
            out.push_str(". ");
            push_edge(&mut out, memory.peek(cell, Axis::X), here && mp.axis == Axis::X);
            out.push_str(" ' ");
            push_edge(&mut out, memory.peek(cell, Axis::Y), here && mp.axis == Axis::Y);
            out.push(' ');
            p -= 1;
            q += 1;
        }
        out.push_str(".\n");
    }
    out
}

fn push_edge(out: &mut String, value: i64, highlight: bool) {
    if highlight {
        out.push_str(colors::MP);
    }
    out.push_str(&format!("{:>width$}", value, width = EDGE_WIDTH));
    if highlight {
        out.push_str(colors::RESET);
    }
}
