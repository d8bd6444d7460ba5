//! Fixed numeric locale used for every string-to-number conversion
//!
//! Host regional settings (`LC_NUMERIC`, `LANG`, ...) are never consulted: the
//! decimal point is always `.`, there are no grouping separators, and the
//! accepted grammar is the same on every machine. Numeric sorters hold a copy
//! of this value, so there is no handle to acquire or release.

use thiserror::Error;

/// Characters treated as blank around a number and by empty-line detection
pub const BLANKS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Why a piece of text could not be turned into a number
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    #[error("not a number")]
    Malformed,

    #[error("number out of range")]
    OutOfRange,
}

/// Immutable numeric formatting rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLocale {
    decimal_point: char,
}

impl Default for NumericLocale {
    fn default() -> Self {
        Self::fixed()
    }
}

impl NumericLocale {
    /// The "C"/en-US convention: `.` as decimal point
    pub const fn fixed() -> Self {
        Self { decimal_point: '.' }
    }

    pub fn decimal_point(&self) -> char {
        self.decimal_point
    }

    /// Parse a signed 64-bit integer of the form `-?[0-9]+`, ignoring surrounding blanks
    pub fn parse_integer(&self, text: &str) -> Result<i64, NumberError> {
        let body = trim_blanks(text);
        let digits = body.strip_prefix('-').unwrap_or(body);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberError::Malformed);
        }

        // Only overflow can fail once the grammar has been checked
        body.parse::<i64>().map_err(|_| NumberError::OutOfRange)
    }

    /// Parse a finite double of the form `-?[0-9]*(.[0-9]*)?` with at least one digit
    pub fn parse_decimal(&self, text: &str) -> Result<f64, NumberError> {
        let body = trim_blanks(text);
        let unsigned = body.strip_prefix('-').unwrap_or(body);

        let mut digits = 0usize;
        let mut points = 0usize;
        for ch in unsigned.chars() {
            if ch.is_ascii_digit() {
                digits += 1;
            } else if ch == self.decimal_point {
                points += 1;
            } else {
                return Err(NumberError::Malformed);
            }
        }
        if digits == 0 || points > 1 {
            return Err(NumberError::Malformed);
        }

        let value = body.parse::<f64>().map_err(|_| NumberError::Malformed)?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumberError::OutOfRange)
        }
    }
}

/// Strip blanks from both ends of `text`
pub fn trim_blanks(text: &str) -> &str {
    text.trim_matches(&BLANKS[..])
}

/// True when `text` holds nothing but blanks
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|ch| BLANKS.contains(&ch))
}
