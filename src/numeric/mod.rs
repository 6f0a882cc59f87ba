//! Element types and integer helpers
//!
//! Implements the element traits for characters, the primitive integers and
//! arbitrary-precision integers, and provides the [`StartAndSize`] pair and
//! the math helpers the operand layer builds on.

pub mod bigint;
pub mod character;
pub mod integers;
pub mod math;
pub mod start_and_size;

// Re-export main types
pub use math::{Digits, abs, ceil_div, floor_div, gcd, max, min, unsigned_gcd};
pub use start_and_size::StartAndSize;
