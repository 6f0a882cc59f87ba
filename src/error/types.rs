//! Core error types for gho
//!
//! This module defines the main error type returned by every fallible operation
//! of the library, together with the crate-wide result alias.

use thiserror::Error;

use crate::error::{ArithmeticError, ContainerError, ParseError};
use crate::types::TypeTag;

/// Main error type for gho operations
///
/// Arithmetic, container and parsing failures are nested so that callers can
/// match on the domain first and the detail second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GhoError {
    /// Arithmetic failure in the operand layer
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Index or emptiness failure in a container
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// Malformed plain-text input
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Operation not available for the given type(s)
    #[error("{operation} is not implemented for type(s) ({})", type_list(.lhs, .rhs))]
    UnsupportedType {
        /// Operation that was attempted
        operation: &'static str,
        /// Type of the first (or only) operand
        lhs: TypeTag,
        /// Type of the second operand, for binary operations
        rhs: Option<TypeTag>,
    },

    /// Underlying reader or writer failed
    #[error("i/o error: {0}")]
    Io(std::io::ErrorKind),

    /// System clock reports a time before the Unix epoch
    #[error("system clock is set before the Unix epoch")]
    ClockBeforeEpoch,
}

fn type_list(lhs: &TypeTag, rhs: &Option<TypeTag>) -> String {
    match rhs {
        Some(rhs) => format!("{lhs}, {rhs}"),
        None => lhs.to_string(),
    }
}

impl GhoError {
    /// Builds the error for a unary operation on an unsupported type
    pub const fn unsupported(operation: &'static str, lhs: TypeTag) -> Self {
        Self::UnsupportedType {
            operation,
            lhs,
            rhs: None,
        }
    }

    /// Builds the error for a binary operation on an unsupported type pair
    pub const fn unsupported_pair(operation: &'static str, lhs: TypeTag, rhs: TypeTag) -> Self {
        Self::UnsupportedType {
            operation,
            lhs,
            rhs: Some(rhs),
        }
    }

    /// Returns true if the error would have been a debug-only assertion
    ///
    /// Range and precondition failures are only reported when the active
    /// configuration enables the corresponding checks.
    pub const fn is_checked_violation(&self) -> bool {
        match self {
            Self::Arithmetic(error) => matches!(
                error,
                ArithmeticError::Overflow { .. }
                    | ArithmeticError::Underflow { .. }
                    | ArithmeticError::InexactDivision { .. }
            ),
            _ => false,
        }
    }

    /// Returns true if this is an arithmetic error
    pub const fn is_arithmetic_error(&self) -> bool {
        matches!(self, Self::Arithmetic(_))
    }

    /// Returns true if this is a type error
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Arithmetic(_) => "Arithmetic",
            Self::Container(_) => "Container",
            Self::Parse(_) => "Parse",
            Self::UnsupportedType { .. } => "Type",
            Self::Io(_) | Self::ClockBeforeEpoch => "System",
        }
    }
}

impl From<std::io::Error> for GhoError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.kind())
    }
}

impl From<std::fmt::Error> for GhoError {
    fn from(_error: std::fmt::Error) -> Self {
        Self::Io(std::io::ErrorKind::Other)
    }
}

/// Result type for gho operations
pub type GhoResult<T> = Result<T, GhoError>;
