pub mod core;
pub mod debugger;
pub mod ip;
pub mod memory;
pub mod program;
pub mod render;
pub mod trace;
pub mod vm;

pub use self::core::{hex_area, modulo, Axial, Axis, Direction, HexError, HexResult};
pub use debugger::{DebugAction, Debugger};
pub use ip::InstructionPointer;
pub use memory::{MemoryCell, MemoryGrid, MemoryPointer, Orientation, Side};
pub use program::{ProgramCell, ProgramGrid};
pub use trace::{TraceConfig, TraceLogger};
pub use vm::{Executor, ExecutorConfig, RunStatus};
