//! Compile-time configuration for gho
//!
//! Operands and containers take a configuration type parameter that fixes the
//! overflow policy and the growth parameters at compile time.

pub mod macros;
pub mod settings;

// Re-export main types
pub use macros::define_gho_config;
pub use settings::{DefaultConfig, GhoConfig};
