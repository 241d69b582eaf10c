//! Core types for the Hexagony interpreter.
//!
//! This module defines the foundations everything else is built on:
//!
//! - **Axial / Axis**: hexagonal coordinates and the cubic axes
//! - **Direction**: the six directions of instruction-pointer travel
//! - **HexError**: the error hierarchy
//!
//! It has no dependencies on other interpreter modules, so every layer
//! can import it freely.

pub mod coords;
pub mod direction;
pub mod error;

// Re-export primary types at module level
pub use coords::{hex_area, modulo, Axial, Axis};
pub use direction::Direction;
pub use error::{HexError, HexResult};
