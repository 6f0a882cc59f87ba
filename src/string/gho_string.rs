//! Owned growable string
//!
//! Positions are character indices, not byte offsets, so every accessor works
//! on multi-byte text. Index-taking operations are checked and report
//! [`ContainerError`] instead of panicking.

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ContainerError, GhoResult, ParseError};
use crate::io::{self, CharSource, skip_whitespace, write_indent};
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

/// Growable string with checked, character-indexed editing
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GhoString {
    text: String,
}

impl GhoString {
    /// Creates an empty string
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Moves the content of `other` into `self`, leaving `other` empty
    pub fn absorb(&mut self, other: &mut GhoString) {
        self.text = core::mem::take(&mut other.text);
    }

    /// Empties the string
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Borrows the content
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the content as a `String`
    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns true if the content equals `other`
    pub fn equal_str(&self, other: &str) -> bool {
        self.text == other
    }

    /// Compares two strings, returning -1, 0 or 1
    pub fn compare(&self, other: &GhoString) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Number of characters
    pub fn size(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the string holds no character
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character at position `i`
    pub fn at(&self, i: usize) -> GhoResult<char> {
        self.text
            .chars()
            .nth(i)
            .ok_or_else(|| ContainerError::out_of_range("at", i, self.size()).into())
    }

    /// Replaces the character at position `i`
    pub fn set(&mut self, i: usize, c: char) -> GhoResult<()> {
        let (start, old) = self.char_span("set", i)?;
        let mut buffer = [0u8; 4];
        self.text
            .replace_range(start..start + old.len_utf8(), c.encode_utf8(&mut buffer));
        Ok(())
    }

    /// Appends another string
    pub fn add(&mut self, other: &GhoString) {
        self.text.push_str(&other.text);
    }

    /// Appends a string slice
    pub fn add_str(&mut self, other: &str) {
        self.text.push_str(other);
    }

    /// Appends one character
    pub fn add_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Inserts `c` before position `i`; `i == size` appends
    pub fn add_char_at(&mut self, c: char, i: usize) -> GhoResult<()> {
        let offset = self.byte_offset("add_char_at", i, true)?;
        self.text.insert(offset, c);
        Ok(())
    }

    /// Removes the character at position `i`
    pub fn remove(&mut self, i: usize) -> GhoResult<char> {
        if self.is_empty() {
            return Err(ContainerError::Empty { operation: "remove" }.into());
        }
        let (start, _) = self.char_span("remove", i)?;
        Ok(self.text.remove(start))
    }

    /// Removes the last character
    pub fn remove_last(&mut self) -> GhoResult<char> {
        self.text
            .pop()
            .ok_or_else(|| ContainerError::Empty { operation: "remove_last" }.into())
    }

    /// Removes the characters in `[first, last)`
    pub fn remove_between(&mut self, first: usize, last: usize) -> GhoResult<()> {
        let size = self.size();
        if first > last || last > size {
            return Err(ContainerError::InvalidRange {
                operation: "remove_between",
                first,
                last,
                size,
            }
            .into());
        }
        let start = self.byte_offset("remove_between", first, true)?;
        let end = self.byte_offset("remove_between", last, true)?;
        self.text.replace_range(start..end, "");
        Ok(())
    }

    /// Removes the characters before position `i`
    pub fn remove_until(&mut self, i: usize) -> GhoResult<()> {
        self.remove_between(0, i)
    }

    /// Removes the characters after position `i`, keeping `[0, i]`
    pub fn remove_after(&mut self, i: usize) -> GhoResult<()> {
        let size = self.size();
        if i >= size {
            return Err(ContainerError::out_of_range("remove_after", i, size).into());
        }
        self.remove_between(i + 1, size)
    }

    /// Position of the first occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text
            .find(needle)
            .map(|offset| self.text[..offset].chars().count())
    }

    /// Position of the first occurrence of `c`
    pub fn find_char(&self, c: char) -> Option<usize> {
        self.text.chars().position(|candidate| candidate == c)
    }

    /// Returns true if `needle` occurs in the string
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Reads the next line from `source`, consuming the newline
    pub fn get_line<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        io::read_line(source)
    }

    /// Reads up to `delimiter`, consuming it
    pub fn get_line_delimited<S: CharSource + ?Sized>(
        source: &mut S,
        delimiter: char,
    ) -> GhoResult<Self> {
        io::read_line_delimited(source, delimiter)
    }

    /// Skips the next line of `source`
    pub fn ignore_line<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<()> {
        io::ignore_line(source)
    }

    /// Skips `source` up to and including `delimiter`
    pub fn ignore_line_delimited<S: CharSource + ?Sized>(
        source: &mut S,
        delimiter: char,
    ) -> GhoResult<()> {
        io::ignore_line_delimited(source, delimiter)
    }

    /// Returns the next line of `source` without consuming it
    pub fn peek_line<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        io::peek_line(source)
    }

    /// Returns the text up to `delimiter` without consuming it
    pub fn peek_line_delimited<S: CharSource + ?Sized>(
        source: &mut S,
        delimiter: char,
    ) -> GhoResult<Self> {
        io::peek_line_delimited(source, delimiter)
    }

    /// Byte offset and value of the character at position `i`
    fn char_span(&self, operation: &'static str, i: usize) -> GhoResult<(usize, char)> {
        self.text
            .char_indices()
            .nth(i)
            .ok_or_else(|| ContainerError::out_of_range(operation, i, self.size()).into())
    }

    /// Byte offset of position `i`; `allow_end` accepts `i == size`
    fn byte_offset(&self, operation: &'static str, i: usize, allow_end: bool) -> GhoResult<usize> {
        match self.text.char_indices().nth(i) {
            Some((offset, _)) => Ok(offset),
            None if allow_end && i == self.size() => Ok(self.text.len()),
            None => Err(ContainerError::out_of_range(operation, i, self.size()).into()),
        }
    }
}

impl PartialOrd for GhoString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GhoString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl From<&str> for GhoString {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

impl From<String> for GhoString {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<GhoString> for String {
    fn from(string: GhoString) -> Self {
        string.text
    }
}

impl PartialEq<str> for GhoString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for GhoString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for GhoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Typed for GhoString {
    const TYPE_TAG: TypeTag = TypeTag::GhoString;
}

impl Element for GhoString {
    fn create() -> Self {
        Self::new()
    }
}

impl Printable for GhoString {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_indent(out, indent)?;
        out.write_str(&self.text)
    }
}

/// Characters that end a token besides whitespace
const TOKEN_TERMINATORS: [char; 3] = [',', '{', '}'];

impl Readable for GhoString {
    /// Reads one token, stopping at whitespace or at `,` `{` `}`
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        skip_whitespace(source)?;

        let mut token = GhoString::new();
        while let Some(c) = source.peek_char()? {
            if c.is_whitespace() || TOKEN_TERMINATORS.contains(&c) {
                break;
            }
            source.next_char()?;
            token.add_char(c);
        }

        if token.is_empty() {
            return match source.peek_char()? {
                Some(found) => Err(ParseError::UnexpectedChar {
                    expected: "string",
                    found,
                }
                .into()),
                None => Err(ParseError::UnexpectedEof { expected: "string" }.into()),
            };
        }

        skip_whitespace(source)?;
        Ok(token)
    }
}
