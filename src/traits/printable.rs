//! Plain-text output trait
//!
//! Every printable type writes itself after an indentation prefix. The
//! remaining methods route that single implementation to strings, byte
//! writers and standard output.

use core::fmt;
use std::io::{self, Write};

use crate::error::GhoResult;
use crate::string::GhoString;

/// Types with a plain-text representation
///
/// Implementors only provide [`write_indented`](Printable::write_indented).
/// The trait is object safe so that [`Any`](crate::any::Any) can print the
/// value it erases.
pub trait Printable {
    /// Writes `indent` spaces followed by the value
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result;

    /// Appends the indented representation to a string
    fn sprinti(&self, out: &mut String, indent: usize) {
        // Writing into a String cannot fail
        let _ = self.write_indented(out, indent);
    }

    /// Appends the representation to a string
    fn sprint(&self, out: &mut String) {
        self.sprinti(out, 0);
    }

    /// Writes the indented representation to a byte sink
    fn fprinti(&self, out: &mut dyn io::Write, indent: usize) -> GhoResult<()> {
        let mut text = String::new();
        self.sprinti(&mut text, indent);
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Writes the representation to a byte sink
    fn fprint(&self, out: &mut dyn io::Write) -> GhoResult<()> {
        self.fprinti(out, 0)
    }

    /// Prints the indented representation on standard output
    fn printi(&self, indent: usize) -> GhoResult<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.fprinti(&mut lock, indent)?;
        lock.flush()?;
        Ok(())
    }

    /// Prints the representation on standard output
    fn print(&self) -> GhoResult<()> {
        self.printi(0)
    }

    /// Returns the representation as a [`GhoString`]
    fn to_gho_string(&self) -> GhoString {
        let mut text = String::new();
        self.sprint(&mut text);
        GhoString::from(text)
    }
}

impl Printable for str {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        crate::io::write_indent(out, indent)?;
        out.write_str(self)
    }
}

/// Writes the comma-separated `{ a, b, c }` body shared by vectors and matrix rows
pub(crate) fn write_braced<T: Printable>(out: &mut dyn fmt::Write, items: &[T]) -> fmt::Result {
    out.write_str("{ ")?;
    for (index, item) in items.iter().enumerate() {
        item.write_indented(out, 0)?;
        if index + 1 != items.len() {
            out.write_char(',')?;
        }
        out.write_char(' ')?;
    }
    out.write_char('}')
}
