//! Runtime errors for the Intcode VM.
//!
//! Every error raised while executing an instruction includes the
//! instruction pointer (`at`) of that instruction.

use intcode_common::DecodeError;
use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The word at the instruction pointer does not name a known opcode.
    #[error("invalid opcode {raw} at instruction {at}")]
    InvalidOpcode { at: usize, raw: i64 },

    /// A parameter used by the instruction has a mode digit other than 0, 1 or 2.
    #[error("invalid parameter mode {mode} in word {raw} at instruction {at}")]
    InvalidMode { at: usize, raw: i64, mode: i64 },

    /// A destination operand is in immediate mode.
    #[error("immediate-mode destination at instruction {at}")]
    ImmediateDestination { at: usize },

    /// A resolved read or write address is negative.
    #[error("negative address {address} at instruction {at}")]
    NegativeAddress { at: usize, address: i64 },

    /// INPUT reached with an empty input queue.
    ///
    /// The instruction pointer is left on the INPUT instruction, so pushing
    /// input and resuming re-executes it.
    #[error("input underflow at instruction {at}")]
    InputUnderflow { at: usize },

    /// Arithmetic or address computation overflowed `i64`.
    #[error("integer overflow at instruction {at}")]
    Overflow { at: usize },

    /// The configured step limit was reached before the program halted.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}

impl RuntimeError {
    /// Attach an instruction pointer and raw word to a decode failure.
    pub(crate) fn from_decode(err: DecodeError, at: usize, raw: i64) -> Self {
        match err {
            DecodeError::InvalidOpcode(_) => RuntimeError::InvalidOpcode { at, raw },
            DecodeError::InvalidMode { mode, .. } => RuntimeError::InvalidMode { at, raw, mode },
        }
    }
}
