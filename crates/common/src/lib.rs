//! Intcode common types and instruction encoding.
//!
//! This crate provides the foundational data structures for the Intcode
//! instruction set:
//!
//! - [`Opcode`] — the ten opcodes and their operand counts
//! - [`Mode`] — position, immediate and relative parameter modes
//! - [`Instruction`] — decoded instruction header with decode/encode
//! - [`Program`] — the initial memory image and its comma-separated text form
//! - [`DecodeError`], [`ParseError`] — errors from decoding words and loading text
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod mode;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, ParseError};
pub use instruction::Instruction;
pub use mode::Mode;
pub use opcode::Opcode;
pub use program::Program;
