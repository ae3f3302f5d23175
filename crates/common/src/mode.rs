//! Parameter modes.

use crate::error::DecodeError;

/// How an operand literal is interpreted.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The literal is an address; the operand is `mem[literal]`.
    #[default]
    Position = 0,
    /// The literal is the operand. Never valid for a destination.
    Immediate = 1,
    /// The literal is an offset; the operand is `mem[literal + relative_base]`.
    Relative = 2,
}

/// All modes, in digit order.
pub const ALL_MODES: [Mode; 3] = [Mode::Position, Mode::Immediate, Mode::Relative];

impl Mode {
    /// The decimal digit that selects this mode.
    pub fn digit(&self) -> i64 {
        *self as u8 as i64
    }

    /// Decode the mode digit for parameter `param` (1-based).
    pub fn from_digit(digit: i64, param: usize) -> Result<Self, DecodeError> {
        match digit {
            0 => Ok(Mode::Position),
            1 => Ok(Mode::Immediate),
            2 => Ok(Mode::Relative),
            mode => Err(DecodeError::InvalidMode { mode, param }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_roundtrip() {
        for &mode in &ALL_MODES {
            assert_eq!(Mode::from_digit(mode.digit(), 1), Ok(mode));
        }
    }

    #[test]
    fn unknown_digit_names_parameter() {
        assert_eq!(
            Mode::from_digit(7, 3),
            Err(DecodeError::InvalidMode { mode: 7, param: 3 })
        );
    }

    #[test]
    fn default_is_position() {
        assert_eq!(Mode::default(), Mode::Position);
    }
}
