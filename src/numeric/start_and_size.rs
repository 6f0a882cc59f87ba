//! Start and size pairs
//!
//! A `StartAndSize` describes a half-open span `[start, start + size)`. It
//! prints as `{ start, size }` and reads back from the same text.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GhoResult;
use crate::io::{CharSource, expect_char, skip_whitespace, write_indent};
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

/// Span described by its first position and its length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StartAndSize {
    /// First position
    pub start: usize,
    /// Number of positions
    pub size: usize,
}

impl StartAndSize {
    /// Creates a span
    pub const fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    /// One past the last position, `None` on overflow
    pub const fn end(&self) -> Option<usize> {
        self.start.checked_add(self.size)
    }
}

impl Typed for StartAndSize {
    const TYPE_TAG: TypeTag = TypeTag::StartAndSize;
}

impl Element for StartAndSize {
    fn create() -> Self {
        Self::default()
    }
}

impl Printable for StartAndSize {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_indent(out, indent)?;
        write!(out, "{{ {}, {} }}", self.start, self.size)
    }
}

impl Readable for StartAndSize {
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        skip_whitespace(source)?;
        expect_char(source, '{', "'{'")?;
        let start = usize::read_from(source)?;
        expect_char(source, ',', "','")?;
        let size = usize::read_from(source)?;
        expect_char(source, '}', "'}'")?;
        Ok(Self { start, size })
    }
}
