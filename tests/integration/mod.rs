//! Cross-component integration tests.
//!
//! - **execution**: instruction dispatch, mirrors, pointer switching,
//!   rim reflection
//! - **memory**: memory grid and pointer behavior over longer walks
//! - **debugger**: break marks, step mode, continue and quit

mod debugger;
mod execution;
mod memory;
