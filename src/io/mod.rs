//! Text input and output
//!
//! Output helpers write indentation to formatter or byte sinks. Input is read
//! through the [`CharSource`] trait, implemented for in-memory strings and for
//! buffered files.

pub mod input;
pub mod lines;
pub mod output;

// Re-export main types
pub use input::{CharSource, FileReader, StrReader, expect_char, skip_whitespace};
pub use lines::{
    ignore_line, ignore_line_delimited, peek_line, peek_line_delimited, read_line,
    read_line_delimited,
};
pub use output::{fprinti, sprinti, write_indent};
