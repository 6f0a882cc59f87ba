//! Runtime type identification
//!
//! This module provides the type tags used for dispatch and diagnostics, and
//! the integer representation aliases the operand layer works over.

pub mod tag;

pub use tag::{TypeTag, Typed};

/// C `int`
pub type Int = i32;

/// C `long`
pub type Long = i64;

/// Widest fixed-width representation
pub type LongLong = i128;

/// Arbitrary-precision integer
pub type Big = num_bigint::BigInt;
