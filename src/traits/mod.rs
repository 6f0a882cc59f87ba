//! Core traits for gho
//!
//! This module contains the capabilities shared by every element type:
//! printing, reading back and slot initialisation.

pub mod element;
pub mod printable;
pub mod readable;

// Re-export all traits
pub use element::Element;
pub use printable::Printable;
pub use readable::Readable;
