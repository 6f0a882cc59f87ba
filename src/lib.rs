#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Generic containers, type-erased values and dynamic integer operands**
//!
//! gho is a small toolkit of generic building blocks: growable vectors and
//! rectangular matrices over any element type, an owned type-erased [`Any`]
//! value, a text string with line-oriented helpers, and an operand layer that
//! does exact arithmetic across `int`, `long`, `i128` and arbitrary-precision
//! integers.
//!
//! ## Features
//!
//! - **Uniform elements** - every element type prints, reads back and creates
//!   a default slot value through the same three traits
//! - **Configurable checking** - overflow and precondition checks are chosen
//!   at compile time through a [`GhoConfig`] type parameter
//! - **Exact mixed arithmetic** - operands compute exactly and only narrow
//!   when storing into the destination
//! - **Plain-text round trips** - printed containers are accepted back by the
//!   readers, from strings or files
//!
//! ### Serialization Features
//! - `serde` - Serde serialization support for containers, strings and integers
//!
//! ## Quick Start
//!
//! ```rust
//! use gho::prelude::*;
//!
//! define_gho_config! {
//!     name: StrictConfig,
//!     check_overflow: true,
//!     check_preconditions: true,
//!     vector_growth_step: 4,
//! }
//!
//! fn example() -> GhoResult<()> {
//!     let mut vector = Vector::<i64, StrictConfig>::with_config();
//!     vector.add(40);
//!     vector.add(i64::MAX);
//!
//!     vector.operand_at(0)?.add_i64(2)?;
//!     assert!(vector.operand_at(1)?.increment().is_err());
//!
//!     let text = vector.to_gho_string();
//!     let (read_back, _) = Vector::<i64>::sread(text.as_str())?;
//!     assert_eq!(read_back.as_slice(), &[42, i64::MAX]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`containers`] - [`Vector`] and [`Matrix`]
//! - [`any`] - owned type-erased values
//! - [`operand`] - [`Operand`] and [`Coperand`] dynamic integer handles
//! - [`string`] - [`GhoString`] and line reading
//! - [`io`] - character sources and indentation helpers
//! - [`numeric`] - element impls for primitives and integer math helpers
//! - [`system`] - wall-clock time and sleeping
//!
//! [`Any`]: crate::any::Any
//! [`GhoConfig`]: crate::config::GhoConfig
//! [`Vector`]: crate::containers::Vector
//! [`Matrix`]: crate::containers::Matrix
//! [`Operand`]: crate::operand::Operand
//! [`Coperand`]: crate::operand::Coperand
//! [`GhoString`]: crate::string::GhoString

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::new_without_default)]
#![allow(clippy::cast_lossless)]
#![cfg_attr(test, allow(unused_mut))]

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Values and containers
pub mod any;
pub mod containers;
pub mod numeric;
pub mod operand;
pub mod string;

// Text and system helpers
pub mod io;
pub mod system;

// Configuration presets
pub mod configs;

/// Prelude module of gho
///
/// Convenient re-exports for common gho types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;
    pub use crate::types::{TypeTag, Typed};

    // Re-export configuration
    pub use crate::config::{DefaultConfig, GhoConfig, define_gho_config};

    // Re-export error types
    pub use crate::error::{ArithmeticError, ContainerError, GhoError, GhoResult, ParseError};

    // Re-export configuration presets
    pub use crate::configs::*;

    // Re-export values and containers
    pub use crate::any::{Any, AnyValue};
    pub use crate::containers::{Matrix, Vector};
    pub use crate::numeric::StartAndSize;
    pub use crate::operand::{AsOperand, Coperand, Integer, Operand};
    pub use crate::string::GhoString;

    // Re-export input sources
    pub use crate::io::{CharSource, FileReader, StrReader};
}
