//! Character input sources
//!
//! Readers consume text one character at a time from either an in-memory
//! string or a buffered byte stream. Both support pushing characters back,
//! which the line peeking functions rely on.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GhoResult, ParseError};

/// Character stream with single-character lookahead and pushback
pub trait CharSource {
    /// Consumes and returns the next character, `None` at end of input
    fn next_char(&mut self) -> GhoResult<Option<char>>;

    /// Pushes a character back; it is returned by the next read
    fn unread(&mut self, c: char);

    /// Returns the next character without consuming it
    fn peek_char(&mut self) -> GhoResult<Option<char>> {
        let next = self.next_char()?;
        if let Some(c) = next {
            self.unread(c);
        }
        Ok(next)
    }

    /// Returns true when no character is left
    fn is_at_end(&mut self) -> GhoResult<bool> {
        Ok(self.peek_char()?.is_none())
    }
}

/// Reader over an in-memory string
#[derive(Debug, Clone)]
pub struct StrReader<'a> {
    text: &'a str,
    position: usize,
    pushback: Vec<char>,
}

impl<'a> StrReader<'a> {
    /// Creates a reader positioned at the start of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: 0,
            pushback: Vec::new(),
        }
    }

    /// Returns the text that has not been consumed yet
    pub fn remaining(&self) -> Cow<'a, str> {
        let rest = &self.text[self.position..];
        if self.pushback.is_empty() {
            Cow::Borrowed(rest)
        } else {
            let mut owned: String = self.pushback.iter().rev().collect();
            owned.push_str(rest);
            Cow::Owned(owned)
        }
    }

    /// Byte offset of the reader in the original text, ignoring pushback
    pub fn position(&self) -> usize {
        self.position
    }
}

impl CharSource for StrReader<'_> {
    fn next_char(&mut self) -> GhoResult<Option<char>> {
        if let Some(c) = self.pushback.pop() {
            return Ok(Some(c));
        }
        let next = self.text[self.position..].chars().next();
        if let Some(c) = next {
            self.position += c.len_utf8();
        }
        Ok(next)
    }

    fn unread(&mut self, c: char) {
        self.pushback.push(c);
    }

    fn peek_char(&mut self) -> GhoResult<Option<char>> {
        match self.pushback.last() {
            Some(c) => Ok(Some(*c)),
            None => Ok(self.text[self.position..].chars().next()),
        }
    }
}

/// Reader over a buffered byte stream, decoding UTF-8
#[derive(Debug)]
pub struct FileReader<R> {
    reader: R,
    pushback: Vec<char>,
}

impl FileReader<BufReader<File>> {
    /// Opens a file for reading
    pub fn open(path: impl AsRef<Path>) -> GhoResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FileReader<R> {
    /// Wraps a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushback: Vec::new(),
        }
    }

    /// Returns the wrapped reader; pushed-back characters are lost
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_byte(&mut self) -> GhoResult<Option<u8>> {
        let byte = match self.reader.fill_buf()? {
            [] => return Ok(None),
            [first, ..] => *first,
        };
        self.reader.consume(1);
        Ok(Some(byte))
    }
}

/// Length of the UTF-8 sequence introduced by `first`
fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl<R: BufRead> CharSource for FileReader<R> {
    fn next_char(&mut self) -> GhoResult<Option<char>> {
        if let Some(c) = self.pushback.pop() {
            return Ok(Some(c));
        }

        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(first).ok_or(ParseError::InvalidUtf8)?;

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or(ParseError::InvalidUtf8)?;
        }

        let decoded = core::str::from_utf8(&bytes[..width]).map_err(|_| ParseError::InvalidUtf8)?;
        Ok(decoded.chars().next())
    }

    fn unread(&mut self, c: char) {
        self.pushback.push(c);
    }
}

/// Consumes whitespace until the next significant character
pub fn skip_whitespace<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<()> {
    while let Some(c) = source.peek_char()? {
        if !c.is_whitespace() {
            break;
        }
        source.next_char()?;
    }
    Ok(())
}

/// Consumes `expected` or fails with a parse error naming `what`
pub fn expect_char<S: CharSource + ?Sized>(
    source: &mut S,
    expected: char,
    what: &'static str,
) -> GhoResult<()> {
    match source.next_char()? {
        Some(c) if c == expected => Ok(()),
        Some(found) => {
            source.unread(found);
            Err(ParseError::UnexpectedChar {
                expected: what,
                found,
            }
            .into())
        }
        None => Err(ParseError::UnexpectedEof { expected: what }.into()),
    }
}
