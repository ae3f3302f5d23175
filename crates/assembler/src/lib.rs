//! Intcode assembler — bidirectional mnemonic text ↔ program words.
//!
//! The assembler is a mechanical 1:1 translation. No labels, no macros.
//!
//! # Syntax
//!
//! ```text
//! ; comment
//! ADD 9, 10, 3      ; bare number: position mode
//! MUL 4, #3, 4      ; #n: immediate mode
//! OUT @-1           ; @n: relative mode
//! DATA 30, 40, 50   ; raw words
//! HALT
//! ```
//!
//! # Usage
//!
//! ```
//! use intcode_asm::{assemble, disassemble};
//!
//! let text = "ADD 9, 10, 3\nHALT\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(program.words, vec![1, 9, 10, 3, 99]);
//! assert_eq!(disassemble(&program), text);
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for every program.
//! The disassembler outputs canonical text; the assembler accepts both
//! canonical and non-canonical input (e.g., hex, lowercase, no commas).

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use error::AsmError;

use intcode_common::Program;
use lexer::tokenize_line;
use parser::parse_line;

/// Assemble text into a program.
///
/// Returns the first error encountered. Fix one error at a time.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut words = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let tokens = tokenize_line(line, line_num)?;
        words.extend(parse_line(&tokens, line_num)?);
    }

    Ok(Program::new(words))
}

/// Disassemble a program into canonical assembly text.
///
/// The output is flat text: one instruction or data word per line, no
/// indentation, no comments.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
