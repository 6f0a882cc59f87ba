//! Dynamic strings
//!
//! [`GhoString`] is the owned string type stored in containers and read from
//! text.

pub mod gho_string;

pub use gho_string::GhoString;
