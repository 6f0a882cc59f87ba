//! Text parsing error types
//!
//! Raised by the `Readable` implementations when the plain-text format of a
//! value is not respected.

use thiserror::Error;

/// Errors raised while reading values from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character other than the expected one was found
    #[error("expected {expected}, found {found:?}")]
    UnexpectedChar {
        /// What the reader was looking for
        expected: &'static str,
        /// Character actually found
        found: char,
    },
    /// Input ended before the value was complete
    #[error("expected {expected}, found end of input")]
    UnexpectedEof {
        /// What the reader was looking for
        expected: &'static str,
    },
    /// Token is not a number
    #[error("invalid {expected}")]
    InvalidNumber {
        /// Numeric type being read
        expected: &'static str,
    },
    /// Number does not fit the target type
    #[error("number out of range for {expected}")]
    NumberOutOfRange {
        /// Numeric type being read
        expected: &'static str,
    },
    /// Byte stream is not valid UTF-8
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,
    /// Matrix rows do not share a length
    #[error("matrix row {row} has {found} columns, expected {expected}")]
    InconsistentRowLength {
        /// Index of the offending row
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        found: usize,
    },
}
