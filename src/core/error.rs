//! Error types for the interpreter.
//!
//! Interpretation itself almost never fails: unknown instructions are
//! no-ops, and end-of-input on `,` and `?` has defined semantics. What
//! remains are I/O failures around the interpreter (source file, trace
//! log) and the two arithmetic traps.

use std::fmt;

/// Error produced by the interpreter or its command-line front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// File or stream I/O failure.
    Io {
        operation: String,
        path: Option<String>,
        message: String,
    },

    /// `:` executed with a zero right neighbour.
    DivisionByZero { dividend: i64 },

    /// `%` executed with a zero right neighbour.
    ModuloByZero { dividend: i64 },
}

impl HexError {
    /// Build an `Io` variant from a `std::io::Error` and context.
    pub fn io(operation: &str, path: Option<&str>, err: &std::io::Error) -> Self {
        HexError::Io {
            operation: operation.to_string(),
            path: path.map(str::to_string),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::Io { operation, path, message } => {
                if let Some(p) = path {
                    write!(f, "I/O error during {} on '{}': {}", operation, p, message)
                } else {
                    write!(f, "I/O error during {}: {}", operation, message)
                }
            }
            HexError::DivisionByZero { dividend } => {
                write!(f, "Division by zero: {} / 0", dividend)
            }
            HexError::ModuloByZero { dividend } => {
                write!(f, "Modulo by zero: {} % 0", dividend)
            }
        }
    }
}

impl std::error::Error for HexError {}

/// Result type alias for interpreter operations.
pub type HexResult<T> = Result<T, HexError>;
