//! Program representation and the comma-separated text format.
//!
//! Program text is a list of signed decimal integers separated by commas.
//! Whitespace (including newlines) is allowed around every token.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// An Intcode program: the initial memory image, address 0 upward.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The memory words.
    pub words: Vec<i64>,
}

impl Program {
    /// Create a new program from a vector of words.
    pub fn new(words: Vec<i64>) -> Self {
        Self { words }
    }

    /// Parse comma-separated program text.
    ///
    /// Blank text yields an empty program. Any other token that does not
    /// parse as an `i64` (including the empty token left by a stray comma)
    /// is rejected.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let words = text
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map_err(|_| ParseError::MalformedProgram {
                        index,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { words })
    }

    /// Number of words in the program.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<i64>> for Program {
    fn from(words: Vec<i64>) -> Self {
        Self::new(words)
    }
}

impl From<&[i64]> for Program {
    fn from(words: &[i64]) -> Self {
        Self::new(words.to_vec())
    }
}

impl AsRef<[i64]> for Program {
    fn as_ref(&self) -> &[i64] {
        &self.words
    }
}

impl fmt::Display for Program {
    /// Canonical text: words joined by `,` with no whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
