//! Decode and parse errors for Intcode words and program text.

use thiserror::Error;

/// Errors that occur while decoding a single instruction word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// `word mod 100` is not a recognized opcode, or the word is negative.
    #[error("invalid opcode in word {0}")]
    InvalidOpcode(i64),

    /// A parameter slot used by the opcode carries a mode digit other than 0, 1 or 2.
    #[error("invalid mode {mode} for parameter {param}")]
    InvalidMode { mode: i64, param: usize },
}

/// Errors that occur while loading program text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A comma-separated token is not a signed 64-bit integer.
    #[error("malformed program: token {index} ('{token}') is not an integer")]
    MalformedProgram { index: usize, token: String },
}
