//! Primitive integer elements
//!
//! Integers print in decimal. Reading skips leading whitespace, accepts an
//! optional sign followed by at least one digit, and consumes the whitespace
//! that follows the number.

use core::fmt;

use crate::error::{GhoResult, ParseError};
use crate::io::{CharSource, skip_whitespace, write_indent};
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

/// Reads an optionally signed run of decimal digits
pub(crate) fn read_integer_token<S: CharSource + ?Sized>(
    source: &mut S,
    expected: &'static str,
) -> GhoResult<String> {
    skip_whitespace(source)?;

    let mut token = String::new();
    if let Some(sign @ ('-' | '+')) = source.peek_char()? {
        source.next_char()?;
        token.push(sign);
    }

    while let Some(c) = source.peek_char()? {
        if !c.is_ascii_digit() {
            break;
        }
        source.next_char()?;
        token.push(c);
    }

    let has_digits = token.chars().any(|c| c.is_ascii_digit());
    if !has_digits {
        // Leave the source where it was
        for c in token.chars().rev() {
            source.unread(c);
        }
        return match source.peek_char()? {
            Some(found) => Err(ParseError::UnexpectedChar { expected, found }.into()),
            None => Err(ParseError::UnexpectedEof { expected }.into()),
        };
    }

    Ok(token)
}

macro_rules! impl_integer_element {
    ($($ty:ty => $tag:ident, $name:literal);* $(;)?) => {$(
        impl Typed for $ty {
            const TYPE_TAG: TypeTag = TypeTag::$tag;
        }

        impl Element for $ty {
            fn create() -> Self {
                0
            }
        }

        impl Printable for $ty {
            fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
                write_indent(out, indent)?;
                write!(out, "{self}")
            }
        }

        impl Readable for $ty {
            fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
                let token = read_integer_token(source, $name)?;
                let value = token
                    .parse::<$ty>()
                    .map_err(|_| ParseError::NumberOutOfRange { expected: $name })?;
                skip_whitespace(source)?;
                Ok(value)
            }
        }
    )*};
}

impl_integer_element! {
    i32 => Int, "int";
    i64 => Long, "long";
    i128 => LongLong, "long long";
    u32 => UInt, "unsigned int";
    u64 => ULong, "unsigned long";
    u128 => ULongLong, "unsigned long long";
    usize => Usize, "usize";
}
