//! Arbitrary-precision integer elements

use core::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{GhoResult, ParseError};
use crate::io::{CharSource, skip_whitespace, write_indent};
use crate::numeric::integers::read_integer_token;
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

impl Typed for BigInt {
    const TYPE_TAG: TypeTag = TypeTag::BigInt;
}

impl Element for BigInt {
    fn create() -> Self {
        BigInt::zero()
    }
}

impl Printable for BigInt {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_indent(out, indent)?;
        write!(out, "{self}")
    }
}

impl Readable for BigInt {
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        let token = read_integer_token(source, "bigint")?;
        let value = token
            .parse::<BigInt>()
            .map_err(|_| ParseError::InvalidNumber { expected: "bigint" })?;
        skip_whitespace(source)?;
        Ok(value)
    }
}
