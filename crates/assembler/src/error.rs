//! Error types for the Intcode assembler.

use thiserror::Error;

/// Errors produced during assembly of text to program words.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized mnemonic was encountered.
    #[error("line {line}: unknown mnemonic '{token}'")]
    UnknownMnemonic { line: usize, token: String },

    /// An instruction had the wrong number of operands.
    #[error("line {line}: {mnemonic} expects {expected} operand(s), found {found}")]
    OperandCount {
        line: usize,
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },

    /// `DATA` with no values.
    #[error("line {line}: DATA expects at least one value")]
    EmptyData { line: usize },

    /// A numeric literal could not be parsed or is out of range.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// The destination operand of a writing instruction used `#`.
    #[error("line {line}: {mnemonic} cannot write to an immediate operand")]
    ImmediateDestination { line: usize, mnemonic: &'static str },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unknown_mnemonic() {
        let e = AsmError::UnknownMnemonic {
            line: 3,
            token: "FOO".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: unknown mnemonic 'FOO'");
    }

    #[test]
    fn error_display_operand_count() {
        let e = AsmError::OperandCount {
            line: 7,
            mnemonic: "ADD",
            expected: 3,
            found: 2,
        };
        assert_eq!(e.to_string(), "line 7: ADD expects 3 operand(s), found 2");
    }

    #[test]
    fn error_display_invalid_number() {
        let e = AsmError::InvalidNumber {
            line: 2,
            token: "#0xZZ".to_string(),
        };
        assert_eq!(e.to_string(), "line 2: invalid number '#0xZZ'");
    }

    #[test]
    fn error_display_immediate_destination() {
        let e = AsmError::ImmediateDestination {
            line: 1,
            mnemonic: "IN",
        };
        assert_eq!(e.to_string(), "line 1: IN cannot write to an immediate operand");
    }

    #[test]
    fn error_display_empty_data() {
        assert_eq!(
            AsmError::EmptyData { line: 9 }.to_string(),
            "line 9: DATA expects at least one value"
        );
    }
}
