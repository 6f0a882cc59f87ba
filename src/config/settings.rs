//! Behaviour configuration trait and implementations
//!
//! This module defines the GhoConfig trait that selects, at compile time, how
//! operands check their results and how containers grow.

/// Compile-time behaviour configuration
///
/// Containers and operands are generic over a configuration type so that the
/// checking policy is resolved statically, with no runtime flag.
pub trait GhoConfig: Clone + 'static {
    /// Report overflow, underflow and out-of-range narrowing as errors
    ///
    /// When false, results are truncated to the destination width.
    const CHECK_OVERFLOW: bool;

    /// Verify debug-only preconditions such as exact divisibility
    const CHECK_PRECONDITIONS: bool;

    /// Capacity of a freshly created vector
    const VECTOR_INITIAL_CAPACITY: usize;

    /// Capacity added when a full vector receives a new element
    const VECTOR_GROWTH_STEP: usize;

    /// Spaces written before each row when printing a matrix
    const MATRIX_ROW_INDENT: usize;

    /// Validates that the configuration is consistent
    fn validate() -> Result<(), &'static str> {
        if Self::VECTOR_GROWTH_STEP == 0 {
            return Err("VECTOR_GROWTH_STEP must be at least 1");
        }

        if Self::CHECK_PRECONDITIONS && !Self::CHECK_OVERFLOW {
            return Err("CHECK_PRECONDITIONS requires CHECK_OVERFLOW");
        }

        Ok(())
    }
}

/// Default configuration
///
/// Checks follow the build profile: enabled with debug assertions, disabled in
/// release builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultConfig;

impl GhoConfig for DefaultConfig {
    const CHECK_OVERFLOW: bool = cfg!(debug_assertions);
    const CHECK_PRECONDITIONS: bool = cfg!(debug_assertions);
    const VECTOR_INITIAL_CAPACITY: usize = 10;
    const VECTOR_GROWTH_STEP: usize = 10;
    const MATRIX_ROW_INDENT: usize = 2;
}
