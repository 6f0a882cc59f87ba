//! Container error types

use thiserror::Error;

/// Errors raised by strings, vectors and matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Index is past the valid range
    #[error("{operation}: index {index} is out of range (size {size})")]
    IndexOutOfRange {
        /// Operation that was attempted
        operation: &'static str,
        /// Offending index
        index: usize,
        /// Size of the indexed dimension
        size: usize,
    },
    /// Removal from an empty container
    #[error("{operation}: container is empty")]
    Empty {
        /// Operation that was attempted
        operation: &'static str,
    },
    /// Range bounds are reversed or past the end
    #[error("{operation}: invalid range {first}..{last} (size {size})")]
    InvalidRange {
        /// Operation that was attempted
        operation: &'static str,
        /// First position of the range
        first: usize,
        /// One past the last position of the range
        last: usize,
        /// Size of the container
        size: usize,
    },
}

impl ContainerError {
    /// Builds an out-of-range error
    pub const fn out_of_range(operation: &'static str, index: usize, size: usize) -> Self {
        Self::IndexOutOfRange {
            operation,
            index,
            size,
        }
    }
}
