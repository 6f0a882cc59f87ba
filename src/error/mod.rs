//! Error handling module for gho
//!
//! Every fallible operation returns [`GhoResult`]. Range, precondition and
//! type failures are surfaced as values instead of aborting the process.

pub mod arithmetic;
pub mod container;
pub mod parse;
pub mod types;

// Re-export main types
pub use arithmetic::ArithmeticError;
pub use container::ContainerError;
pub use parse::ParseError;
pub use types::{GhoError, GhoResult};
