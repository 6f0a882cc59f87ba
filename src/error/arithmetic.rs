//! Arithmetic error types
//!
//! This module defines the errors raised by the operand dispatch layer when an
//! arithmetic result cannot be represented or a precondition does not hold.

use thiserror::Error;

use crate::types::TypeTag;

/// Arithmetic error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Result is above the maximum of the destination type
    #[error("{operation}({target}) overflow")]
    Overflow {
        /// Operation that produced the value
        operation: &'static str,
        /// Destination representation
        target: TypeTag,
    },
    /// Result is below the minimum of the destination type
    #[error("{operation}({target}) underflow")]
    Underflow {
        /// Operation that produced the value
        operation: &'static str,
        /// Destination representation
        target: TypeTag,
    },
    /// Divisor is zero
    #[error("{operation}: division by zero")]
    DivisionByZero {
        /// Operation that was attempted
        operation: &'static str,
    },
    /// Exact division requested on operands that do not divide evenly
    #[error("{operation}: division is not exact")]
    InexactDivision {
        /// Operation that was attempted
        operation: &'static str,
    },
    /// Negative exponent given to an integer power
    #[error("{operation}: negative exponent")]
    NegativeExponent {
        /// Operation that was attempted
        operation: &'static str,
    },
    /// Exponent does not fit the supported exponent range
    #[error("{operation}: exponent too large")]
    ExponentTooLarge {
        /// Operation that was attempted
        operation: &'static str,
    },
}

impl ArithmeticError {
    /// Returns the operation name carried by the error
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Overflow { operation, .. }
            | Self::Underflow { operation, .. }
            | Self::DivisionByZero { operation }
            | Self::InexactDivision { operation }
            | Self::NegativeExponent { operation }
            | Self::ExponentTooLarge { operation } => operation,
        }
    }

    /// Returns true if the error reports a value outside the destination range
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::Overflow { .. } | Self::Underflow { .. })
    }
}
