//! Instruction decoding and encoding.
//!
//! An instruction word is a decimal number:
//! ```text
//! ABCDE
//!    DE  opcode (word mod 100)
//!   C    mode of parameter 1
//!  B     mode of parameter 2
//! A      mode of parameter 3
//! ```
//! Missing leading digits are 0 (position mode).

use crate::error::DecodeError;
use crate::mode::Mode;
use crate::opcode::Opcode;

/// Powers of ten selecting the mode digit for parameters 1..=3.
const MODE_PLACES: [i64; 3] = [100, 1_000, 10_000];

/// A decoded instruction header: opcode plus one mode per parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Modes for parameters 1..=3. Slots beyond the opcode's arity are `Position`.
    pub modes: [Mode; 3],
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, modes: [Mode; 3]) -> Self {
        Self { opcode, modes }
    }

    /// An instruction with every parameter in position mode.
    pub fn positional(opcode: Opcode) -> Self {
        Self::new(opcode, [Mode::Position; 3])
    }

    /// Decode an instruction word.
    ///
    /// Only the mode digits of parameters the opcode actually takes are
    /// inspected; digits in unused slots and above the 10^4 place are ignored.
    pub fn decode(word: i64) -> Result<Self, DecodeError> {
        if word < 0 {
            return Err(DecodeError::InvalidOpcode(word));
        }
        let opcode = Opcode::try_from(word % 100).map_err(|_| DecodeError::InvalidOpcode(word))?;

        let mut modes = [Mode::Position; 3];
        for (slot, mode) in modes.iter_mut().enumerate().take(opcode.arity()) {
            let digit = (word / MODE_PLACES[slot]) % 10;
            *mode = Mode::from_digit(digit, slot + 1)?;
        }

        Ok(Self { opcode, modes })
    }

    /// Encode back to the canonical word.
    ///
    /// `decode(encode(i)) == i` for every instruction whose unused slots are
    /// `Position`.
    pub fn encode(&self) -> i64 {
        self.modes
            .iter()
            .zip(MODE_PLACES)
            .fold(self.opcode.code(), |word, (mode, place)| {
                word + mode.digit() * place
            })
    }

    /// Mode of parameter `param` (1-based).
    pub fn mode(&self, param: usize) -> Mode {
        self.modes[param - 1]
    }

    /// Total words occupied: the opcode word plus its operands.
    pub fn width(&self) -> usize {
        1 + self.opcode.arity()
    }

    /// Whether the destination slot (if any) is in immediate mode.
    pub fn has_immediate_destination(&self) -> bool {
        self.opcode.writes() && self.mode(self.opcode.arity()) == Mode::Immediate
    }
}
