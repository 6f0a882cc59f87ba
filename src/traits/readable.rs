//! Plain-text input trait

use std::borrow::Cow;
use std::io::BufRead;

use crate::error::{GhoResult, ParseError};
use crate::io::{CharSource, FileReader, StrReader, expect_char, skip_whitespace};

/// Types that can be read back from their printed representation
pub trait Readable: Sized {
    /// Reads one value from a character source
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self>;

    /// Reads one value from the start of `text`
    ///
    /// Returns the value and the text left after it.
    fn sread(text: &str) -> GhoResult<(Self, Cow<'_, str>)> {
        let mut reader = StrReader::new(text);
        let value = Self::read_from(&mut reader)?;
        Ok((value, reader.remaining()))
    }

    /// Reads one value from a file reader
    fn fread<R: BufRead>(reader: &mut FileReader<R>) -> GhoResult<Self> {
        Self::read_from(reader)
    }
}

/// Reads `{ a, b }`, calling `read_item` once per element
///
/// Elements may be separated by one `,` or by whitespace alone. A separator
/// must follow an element, so leading, doubled and trailing commas are
/// rejected instead of standing for a missing element.
pub(crate) fn read_braced<S, F>(source: &mut S, mut read_item: F) -> GhoResult<()>
where
    S: CharSource + ?Sized,
    F: FnMut(&mut S) -> GhoResult<()>,
{
    skip_whitespace(source)?;
    expect_char(source, '{', "'{'")?;

    let mut after_item = false;
    let mut after_comma = false;
    loop {
        skip_whitespace(source)?;
        match source.peek_char()? {
            Some('}') if !after_comma => {
                source.next_char()?;
                return Ok(());
            }
            Some(',') if after_item => {
                source.next_char()?;
                after_item = false;
                after_comma = true;
            }
            Some(found @ (',' | '}')) => {
                tracing::debug!(%found, "separator without an element");
                return Err(ParseError::UnexpectedChar {
                    expected: "an element",
                    found,
                }
                .into());
            }
            Some(_) => {
                read_item(source)?;
                after_item = true;
                after_comma = false;
            }
            None => {
                tracing::debug!("braced text ends before its closing brace");
                return Err(ParseError::UnexpectedEof { expected: "'}'" }.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GhoError;

    fn read_all(text: &str) -> GhoResult<Vec<i32>> {
        let mut items = Vec::new();
        read_braced(&mut StrReader::new(text), |source| {
            items.push(i32::read_from(source)?);
            Ok(())
        })?;
        Ok(items)
    }

    #[test]
    fn test_separators() {
        assert_eq!(read_all("{ }"), Ok(vec![]));
        assert_eq!(read_all("{1,2 ,3}"), Ok(vec![1, 2, 3]));
        assert_eq!(read_all("{ 1 2 }"), Ok(vec![1, 2]));
    }

    #[test]
    fn test_stray_commas_rejected() {
        let stray = |found| -> GhoResult<Vec<i32>> {
            Err(GhoError::Parse(ParseError::UnexpectedChar {
                expected: "an element",
                found,
            }))
        };
        assert_eq!(read_all("{ , 1 }"), stray(','));
        assert_eq!(read_all("{ 1,, 2 }"), stray(','));
        assert_eq!(read_all("{ 1, }"), stray('}'));
        assert_eq!(
            read_all("{ 1, 2"),
            Err(GhoError::Parse(ParseError::UnexpectedEof { expected: "'}'" }))
        );
    }
}
