//! Configuration macros
//!
//! This module provides the `define_gho_config!` macro for declaring custom
//! configurations.

/// Macro to define a custom configuration
///
/// Creates a unit struct implementing [`GhoConfig`](crate::config::GhoConfig).
/// Only the checking policy is mandatory; the sizing knobs fall back to the
/// defaults of [`DefaultConfig`](crate::config::DefaultConfig).
///
/// # Example
///
/// ```rust
/// use gho::config::{GhoConfig, define_gho_config};
///
/// define_gho_config! {
///     name: StrictConfig,
///     check_overflow: true,
///     check_preconditions: true,
///     vector_growth_step: 64,
/// }
///
/// assert!(StrictConfig::validate().is_ok());
/// assert_eq!(StrictConfig::VECTOR_INITIAL_CAPACITY, 10);
/// ```
#[macro_export]
macro_rules! define_gho_config {
    (
        name: $name:ident,
        check_overflow: $overflow:expr,
        check_preconditions: $preconditions:expr
        $(, vector_initial_capacity: $initial:expr)?
        $(, vector_growth_step: $growth:expr)?
        $(, matrix_row_indent: $row_indent:expr)?
        $(,)?
    ) => {
        /// Custom gho configuration
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::config::GhoConfig for $name {
            const CHECK_OVERFLOW: bool = $overflow;
            const CHECK_PRECONDITIONS: bool = $preconditions;

            // Optional parameters with defaults
            const VECTOR_INITIAL_CAPACITY: usize =
                $crate::define_gho_config!(@default $($initial)?, 10);
            const VECTOR_GROWTH_STEP: usize = $crate::define_gho_config!(@default $($growth)?, 10);
            const MATRIX_ROW_INDENT: usize =
                $crate::define_gho_config!(@default $($row_indent)?, 2);
        }
    };

    (@default $value:expr, $default:expr) => { $value };
    (@default , $default:expr) => { $default };
}

pub use define_gho_config;
