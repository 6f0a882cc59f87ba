//! Line-oriented reading
//!
//! A line ends at a delimiter (newline by default) or at the end of input.
//! Reading consumes the delimiter without returning it; peeking consumes
//! nothing.

use crate::error::GhoResult;
use crate::io::CharSource;
use crate::string::GhoString;

/// Default line delimiter
pub const NEWLINE: char = '\n';

/// Reads the next line, consuming the newline
pub fn read_line<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<GhoString> {
    read_line_delimited(source, NEWLINE)
}

/// Reads up to `delimiter`, consuming it
pub fn read_line_delimited<S: CharSource + ?Sized>(
    source: &mut S,
    delimiter: char,
) -> GhoResult<GhoString> {
    let (line, _) = take_line(source, delimiter)?;
    Ok(line)
}

/// Skips the next line, newline included
pub fn ignore_line<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<()> {
    ignore_line_delimited(source, NEWLINE)
}

/// Skips everything up to and including `delimiter`
pub fn ignore_line_delimited<S: CharSource + ?Sized>(
    source: &mut S,
    delimiter: char,
) -> GhoResult<()> {
    while let Some(c) = source.next_char()? {
        if c == delimiter {
            break;
        }
    }
    Ok(())
}

/// Returns the next line without consuming it
pub fn peek_line<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<GhoString> {
    peek_line_delimited(source, NEWLINE)
}

/// Returns the text up to `delimiter` without consuming it
pub fn peek_line_delimited<S: CharSource + ?Sized>(
    source: &mut S,
    delimiter: char,
) -> GhoResult<GhoString> {
    let (line, found_delimiter) = take_line(source, delimiter)?;

    if found_delimiter {
        source.unread(delimiter);
    }
    for c in line.as_str().chars().rev() {
        source.unread(c);
    }

    Ok(line)
}

fn take_line<S: CharSource + ?Sized>(
    source: &mut S,
    delimiter: char,
) -> GhoResult<(GhoString, bool)> {
    let mut line = GhoString::new();
    while let Some(c) = source.next_char()? {
        if c == delimiter {
            return Ok((line, true));
        }
        line.add_char(c);
    }
    Ok((line, false))
}
