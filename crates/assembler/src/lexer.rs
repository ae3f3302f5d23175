//! Tokenizer for Intcode assembly text.

use crate::error::AsmError;
use intcode_common::Mode;

/// A single token from an assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A mnemonic. Always uppercase.
    Ident(String),
    /// An operand: bare number (position), `#n` (immediate) or `@n` (relative).
    Operand(Mode, i64),
}

/// Parse a signed decimal or `0x` hexadecimal literal.
fn parse_number(digits: &str) -> Option<i64> {
    let (negative, unsigned) = match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    };
    let magnitude = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        i64::from_str_radix(hex, 16).ok()?
    } else if unsigned.bytes().all(|b| b.is_ascii_digit()) && !unsigned.is_empty() {
        // i64::MIN has no positive counterpart; parse it with its sign attached.
        return digits.parse().ok();
    } else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Tokenize a single line of assembly text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `;` and extend to end of line. Commas and
/// whitespace both separate tokens.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, AsmError> {
    // Strip comment
    let line = match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = Vec::new();
    for word in line.split(|c: char| c == ',' || c.is_whitespace()) {
        if word.is_empty() {
            continue;
        }
        let (mode, digits) = match word.as_bytes()[0] {
            b'#' => (Some(Mode::Immediate), &word[1..]),
            b'@' => (Some(Mode::Relative), &word[1..]),
            b'0'..=b'9' | b'-' | b'+' => (Some(Mode::Position), word),
            _ => (None, word),
        };
        let token = match mode {
            Some(mode) => {
                let value = parse_number(digits).ok_or_else(|| AsmError::InvalidNumber {
                    line: line_num,
                    token: word.to_string(),
                })?;
                Token::Operand(mode, value)
            }
            None => Token::Ident(word.to_uppercase()),
        };
        tokens.push(token);
    }

    Ok(tokens)
}
