//! Dynamic integer operands
//!
//! An operand is a handle over an integer whose representation is only known
//! at runtime: `int`, `long`, the widest fixed width or arbitrary precision.
//! Arithmetic between any two representations is written once:
//!
//! 1. Both sides are read exactly, widening fixed-width values to `i128`.
//! 2. The operation runs with checked `i128` arithmetic and moves to
//!    arbitrary precision when a big value is involved or `i128` overflows.
//! 3. The result is narrowed into the destination, which either reports or
//!    wraps values that do not fit, depending on the configuration.
//!
//! ## Example
//!
//! ```rust
//! use gho::prelude::*;
//!
//! let mut int = 7i32;
//! let long = 1i64 << 40;
//!
//! let mut operand = Operand::<WrappingConfig>::with_config(&mut int);
//! operand.add(&Coperand::new(&long))?;
//! assert_eq!(int, 7);
//!
//! let mut checked = Operand::<CheckedConfig>::with_config(&mut int);
//! assert!(checked.add(&Coperand::new(&long)).is_err());
//! # Ok::<(), GhoError>(())
//! ```

pub mod arithmetic;
pub mod assign;
pub mod compare;
pub mod convert;
pub mod functions;
pub mod handle;
pub mod integer;
pub mod unary;

pub(crate) mod scalar;

pub use handle::{AsOperand, Coperand, CoperandRef, Operand, OperandRef};
pub use integer::Integer;
