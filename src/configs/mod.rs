//! Configuration presets module
//!
//! This module provides pre-defined configurations for common checking
//! policies.

use crate::config::define_gho_config;

// Every range and precondition check enabled, whatever the build profile
define_gho_config! {
    name: CheckedConfig,
    check_overflow: true,
    check_preconditions: true,
}

// Silent two's-complement wraparound, whatever the build profile
define_gho_config! {
    name: WrappingConfig,
    check_overflow: false,
    check_preconditions: false,
}

// Small containers that grow one slot at a time
define_gho_config! {
    name: CompactConfig,
    check_overflow: true,
    check_preconditions: true,
    vector_initial_capacity: 1,
    vector_growth_step: 1,
    matrix_row_indent: 1,
}
