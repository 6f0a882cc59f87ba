//! Character elements

use core::fmt;

use crate::error::{GhoResult, ParseError};
use crate::io::{CharSource, write_indent};
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

impl Typed for char {
    const TYPE_TAG: TypeTag = TypeTag::Char;
}

impl Element for char {
    fn create() -> Self {
        'a'
    }
}

impl Printable for char {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_indent(out, indent)?;
        out.write_char(*self)
    }
}

impl Readable for char {
    /// Reads exactly one character, whitespace included
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        source
            .next_char()?
            .ok_or_else(|| ParseError::UnexpectedEof { expected: "char" }.into())
    }
}
