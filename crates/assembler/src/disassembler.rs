//! Disassembler: program words → canonical assembly text.
//!
//! Memory holds code and data interleaved with nothing to tell them apart,
//! so this is a linear sweep. A word becomes an instruction line only if it
//! is a canonical instruction word whose operands fit inside the program;
//! everything else becomes a one-word `DATA` line.

use crate::parser::DATA;
use intcode_common::{Instruction, Mode, Program};

fn operand(mode: Mode, value: i64) -> String {
    match mode {
        Mode::Position => value.to_string(),
        Mode::Immediate => format!("#{value}"),
        Mode::Relative => format!("@{value}"),
    }
}

/// Decode `words[0]` as an instruction if it reassembles to exactly the same words.
fn canonical_instruction(words: &[i64]) -> Option<Instruction> {
    let word = *words.first()?;
    let instr = Instruction::decode(word).ok()?;
    let canonical = instr.encode() == word
        && !instr.has_immediate_destination()
        && instr.width() <= words.len();
    canonical.then_some(instr)
}

/// Disassemble a program into canonical assembly text.
///
/// The output is guaranteed to reassemble to identical words
/// (`assemble(disassemble(program)) == program`).
pub fn disassemble(program: &Program) -> String {
    let words = &program.words;
    let mut out = String::new();
    let mut i = 0;

    while i < words.len() {
        match canonical_instruction(&words[i..]) {
            Some(instr) => {
                out.push_str(instr.opcode.mnemonic());
                let args = (1..instr.width())
                    .map(|param| operand(instr.mode(param), words[i + param]))
                    .collect::<Vec<_>>();
                if !args.is_empty() {
                    out.push(' ');
                    out.push_str(&args.join(", "));
                }
                i += instr.width();
            }
            None => {
                out.push_str(DATA);
                out.push(' ');
                out.push_str(&words[i].to_string());
                i += 1;
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(words: &[i64]) -> String {
        disassemble(&Program::new(words.to_vec()))
    }

    #[test]
    fn empty_program_is_empty_text() {
        assert_eq!(listing(&[]), "");
    }

    #[test]
    fn golden_program_listing() {
        assert_eq!(
            listing(&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]),
            "ADD 9, 10, 3\nMUL 3, 11, 0\nHALT\nDATA 30\nDATA 40\nDATA 50\n"
        );
    }

    #[test]
    fn modes_are_rendered() {
        assert_eq!(
            listing(&[109, 1, 204, -1, 21101, 2, 3, 0]),
            "ARB #1\nOUT @-1\nADD #2, #3, @0\n"
        );
    }

    #[test]
    fn truncated_instruction_becomes_data() {
        assert_eq!(listing(&[1, 2]), "DATA 1\nDATA 2\n");
    }

    #[test]
    fn non_canonical_words_become_data() {
        // 1199 decodes as HALT but would re-encode as 99.
        // 11101 has an immediate destination. -3 and 42 are not opcodes.
        assert_eq!(
            listing(&[1199, 11101, -3, 42]),
            "DATA 1199\nDATA 11101\nDATA -3\nDATA 42\n"
        );
    }
}
