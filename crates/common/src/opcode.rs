//! Opcode definitions for the Intcode instruction set.
//!
//! An opcode is the low two decimal digits of an instruction word. The
//! remaining digits carry parameter modes (see [`crate::mode`]).

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The `#[repr(u8)]` discriminant is the opcode's numeric value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Arithmetic
    /// `mem[dst] = a + b`
    Add = 1,
    /// `mem[dst] = a * b`
    Mul = 2,

    // I/O
    /// `mem[dst] = next queued input`. Suspends when the queue is empty.
    Input = 3,
    /// Emit `a`.
    Output = 4,

    // Control flow
    /// If `a != 0`, jump to `b`.
    JumpIfTrue = 5,
    /// If `a == 0`, jump to `b`.
    JumpIfFalse = 6,

    // Comparison
    /// `mem[dst] = (a < b) as i64`
    LessThan = 7,
    /// `mem[dst] = (a == b) as i64`
    Equals = 8,

    // Addressing
    /// `relative_base += a`
    AdjustRelativeBase = 9,

    // VM control
    /// Stop execution.
    Halt = 99,
}

/// All valid opcodes, in numeric order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 10] = [
    Opcode::Add,
    Opcode::Mul,
    Opcode::Input,
    Opcode::Output,
    Opcode::JumpIfTrue,
    Opcode::JumpIfFalse,
    Opcode::LessThan,
    Opcode::Equals,
    Opcode::AdjustRelativeBase,
    Opcode::Halt,
];

impl TryFrom<i64> for Opcode {
    type Error = DecodeError;

    /// Converts a bare opcode number (already reduced mod 100).
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Opcode::Add),
            2 => Ok(Opcode::Mul),
            3 => Ok(Opcode::Input),
            4 => Ok(Opcode::Output),
            5 => Ok(Opcode::JumpIfTrue),
            6 => Ok(Opcode::JumpIfFalse),
            7 => Ok(Opcode::LessThan),
            8 => Ok(Opcode::Equals),
            9 => Ok(Opcode::AdjustRelativeBase),
            99 => Ok(Opcode::Halt),
            _ => Err(DecodeError::InvalidOpcode(value)),
        }
    }
}

impl Opcode {
    /// Numeric value as it appears in the low two digits of a word.
    pub fn code(&self) -> i64 {
        *self as u8 as i64
    }

    /// Number of operand words following the opcode word.
    pub fn arity(&self) -> usize {
        match self {
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => 3,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
            Opcode::Halt => 0,
        }
    }

    /// Whether the last operand is a destination address.
    pub fn writes(&self) -> bool {
        matches!(
            self,
            Opcode::Add | Opcode::Mul | Opcode::Input | Opcode::LessThan | Opcode::Equals
        )
    }

    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Input => "IN",
            Opcode::Output => "OUT",
            Opcode::JumpIfTrue => "JT",
            Opcode::JumpIfFalse => "JF",
            Opcode::LessThan => "LT",
            Opcode::Equals => "EQ",
            Opcode::AdjustRelativeBase => "ARB",
            Opcode::Halt => "HALT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_valid_opcodes() {
        for &opcode in &ALL_OPCODES {
            let decoded = Opcode::try_from(opcode.code()).unwrap();
            assert_eq!(opcode, decoded, "roundtrip failed for {opcode:?}");
        }
    }

    #[test]
    fn gaps_are_invalid() {
        for value in (10..99).chain([0, 100, -1]) {
            assert_eq!(
                Opcode::try_from(value),
                Err(DecodeError::InvalidOpcode(value)),
                "value {value} should be invalid"
            );
        }
    }

    #[test]
    fn arity_table() {
        assert_eq!(Opcode::Add.arity(), 3);
        assert_eq!(Opcode::Equals.arity(), 3);
        assert_eq!(Opcode::JumpIfFalse.arity(), 2);
        assert_eq!(Opcode::Input.arity(), 1);
        assert_eq!(Opcode::AdjustRelativeBase.arity(), 1);
        assert_eq!(Opcode::Halt.arity(), 0);
    }

    #[test]
    fn writers_have_operands() {
        for &opcode in &ALL_OPCODES {
            if opcode.writes() {
                assert!(opcode.arity() > 0, "{opcode:?} writes with no operands");
            }
        }
        assert!(!Opcode::Output.writes());
        assert!(!Opcode::JumpIfTrue.writes());
    }

    #[test]
    fn mnemonics_are_unique_and_uppercase() {
        for (i, a) in ALL_OPCODES.iter().enumerate() {
            let m = a.mnemonic();
            assert_eq!(m, m.to_uppercase(), "mnemonic should be uppercase: {m}");
            for b in &ALL_OPCODES[i + 1..] {
                assert_ne!(m, b.mnemonic());
            }
        }
    }
}
