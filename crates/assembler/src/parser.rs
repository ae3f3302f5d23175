//! Parser for Intcode assembly tokens → program words.
//!
//! Each line is either an instruction (mnemonic plus exactly `arity`
//! operands) or a `DATA` directive carrying raw words.

use crate::error::AsmError;
use crate::lexer::Token;
use intcode_common::opcode::ALL_OPCODES;
use intcode_common::{Instruction, Mode, Opcode};

/// Directive that emits its operands verbatim.
pub(crate) const DATA: &str = "DATA";

fn lookup_opcode(mnemonic: &str) -> Option<Opcode> {
    ALL_OPCODES
        .iter()
        .find(|op| op.mnemonic() == mnemonic)
        .copied()
}

/// Render an operand token for error messages.
fn display_operand(mode: Mode, value: i64) -> String {
    match mode {
        Mode::Position => value.to_string(),
        Mode::Immediate => format!("#{value}"),
        Mode::Relative => format!("@{value}"),
    }
}

/// Split operand tokens into (mode, value) pairs, rejecting stray mnemonics.
fn operands(args: &[Token], line_num: usize) -> Result<Vec<(Mode, i64)>, AsmError> {
    args.iter()
        .map(|token| match token {
            Token::Operand(mode, value) => Ok((*mode, *value)),
            Token::Ident(s) => Err(AsmError::UnexpectedToken {
                line: line_num,
                token: s.clone(),
            }),
        })
        .collect()
}

/// Parse the tokens of a single line into program words.
///
/// Returns an empty Vec for blank lines (empty token list).
pub(crate) fn parse_line(tokens: &[Token], line_num: usize) -> Result<Vec<i64>, AsmError> {
    let Some(first) = tokens.first() else {
        return Ok(Vec::new());
    };

    let mnemonic = match first {
        Token::Ident(s) => s.as_str(),
        Token::Operand(mode, value) => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: display_operand(*mode, *value),
            })
        }
    };

    let args = operands(&tokens[1..], line_num)?;

    if mnemonic == DATA {
        return parse_data(&args, line_num);
    }

    let opcode = lookup_opcode(mnemonic).ok_or_else(|| AsmError::UnknownMnemonic {
        line: line_num,
        token: mnemonic.to_string(),
    })?;

    if args.len() != opcode.arity() {
        return Err(AsmError::OperandCount {
            line: line_num,
            mnemonic: opcode.mnemonic(),
            expected: opcode.arity(),
            found: args.len(),
        });
    }

    let mut modes = [Mode::Position; 3];
    for (slot, (mode, _)) in args.iter().enumerate() {
        modes[slot] = *mode;
    }
    let instr = Instruction::new(opcode, modes);
    if instr.has_immediate_destination() {
        return Err(AsmError::ImmediateDestination {
            line: line_num,
            mnemonic: opcode.mnemonic(),
        });
    }

    let mut words = Vec::with_capacity(instr.width());
    words.push(instr.encode());
    words.extend(args.iter().map(|&(_, value)| value));
    Ok(words)
}

fn parse_data(args: &[(Mode, i64)], line_num: usize) -> Result<Vec<i64>, AsmError> {
    if args.is_empty() {
        return Err(AsmError::EmptyData { line: line_num });
    }
    args.iter()
        .map(|&(mode, value)| match mode {
            Mode::Position => Ok(value),
            _ => Err(AsmError::UnexpectedToken {
                line: line_num,
                token: display_operand(mode, value),
            }),
        })
        .collect()
}
