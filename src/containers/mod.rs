//! Generic containers
//!
//! - [`Vector`] - Growable vector with a configurable growth policy
//! - [`Matrix`] - Row-major rectangular matrix with row and column editing
//!
//! Both own deep copies of their elements and print in the brace-delimited
//! text format that their `Readable` implementations accept.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
