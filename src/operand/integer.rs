//! Owned integer in any operand representation

use core::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{DefaultConfig, GhoConfig};
use crate::error::GhoResult;
use crate::io::CharSource;
use crate::operand::{Coperand, Operand};
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

/// Integer value tagged with its representation
///
/// `Integer` is the owned counterpart of an operand. Equality is structural:
/// `Int(1)` and `Long(1)` are different values. Compare through
/// [`Coperand::compare`] for mathematical equality.
///
/// # Example
/// ```rust
/// use gho::prelude::*;
///
/// let mut value = Integer::Int(i32::MAX);
/// value.as_operand::<WrappingConfig>().increment()?;
/// assert_eq!(value, Integer::Int(i32::MIN));
/// # Ok::<(), GhoError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Integer {
    /// `int`
    Int(i32),
    /// `long`
    Long(i64),
    /// Widest fixed width
    LongLong(i128),
    /// Arbitrary precision
    Big(BigInt),
}

impl Integer {
    /// Smallest representation that holds `value` exactly
    pub fn compact(value: BigInt) -> Self {
        if let Some(value) = value.to_i32() {
            Self::Int(value)
        } else if let Some(value) = value.to_i64() {
            Self::Long(value)
        } else if let Some(value) = value.to_i128() {
            Self::LongLong(value)
        } else {
            Self::Big(value)
        }
    }

    /// Tag of the held representation
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Int(_) => TypeTag::Int,
            Self::Long(_) => TypeTag::Long,
            Self::LongLong(_) => TypeTag::LongLong,
            Self::Big(_) => TypeTag::BigInt,
        }
    }

    /// Mutable operand over the held value
    pub fn as_operand<C: GhoConfig>(&mut self) -> Operand<'_, C> {
        Operand::with_config(self)
    }

    /// Read-only operand over the held value
    pub fn as_coperand<C: GhoConfig>(&self) -> Coperand<'_, C> {
        Coperand::with_config(self)
    }

    /// Converts to an arbitrary-precision integer
    pub fn to_big(&self) -> BigInt {
        match self {
            Self::Int(value) => BigInt::from(*value),
            Self::Long(value) => BigInt::from(*value),
            Self::LongLong(value) => BigInt::from(*value),
            Self::Big(value) => value.clone(),
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<i128> for Integer {
    fn from(value: i128) -> Self {
        Self::LongLong(value)
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Self::Big(value)
    }
}

impl From<Integer> for BigInt {
    fn from(value: Integer) -> Self {
        match value {
            Integer::Big(value) => value,
            other => other.to_big(),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}"),
            Self::LongLong(value) => write!(f, "{value}"),
            Self::Big(value) => write!(f, "{value}"),
        }
    }
}

impl Typed for Integer {
    const TYPE_TAG: TypeTag = TypeTag::Operand;
}

impl Element for Integer {
    fn create() -> Self {
        Self::default()
    }
}

impl Printable for Integer {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        crate::io::write_indent(out, indent)?;
        write!(out, "{self}")
    }
}

impl Readable for Integer {
    /// Reads a decimal integer into the smallest representation that holds it
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        BigInt::read_from(source).map(Self::compact)
    }
}

/// Operand over an owned integer with the default configuration
impl<'a> From<&'a mut Integer> for Operand<'a, DefaultConfig> {
    fn from(value: &'a mut Integer) -> Self {
        Operand::new(value)
    }
}
