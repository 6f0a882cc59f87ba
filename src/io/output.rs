//! Indentation-aware output helpers

use core::fmt;
use std::io;

use crate::error::GhoResult;

/// Writes `indent` spaces to a formatter sink
pub fn write_indent(out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        out.write_char(' ')?;
    }
    Ok(())
}

/// Writes `indent` spaces to a byte sink such as a file or stdout
pub fn fprinti(out: &mut dyn io::Write, indent: usize) -> GhoResult<()> {
    for _ in 0..indent {
        out.write_all(b" ")?;
    }
    Ok(())
}

/// Appends `indent` spaces to a string
pub fn sprinti(out: &mut String, indent: usize) {
    out.extend(core::iter::repeat_n(' ', indent));
}
