//! Runtime type tags
//!
//! The tag identifies the concrete type behind an [`Any`](crate::any::Any) or
//! an operand, and names types in error messages.

use core::fmt;

/// Runtime type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TypeTag {
    /// No value
    Null,
    /// Unicode scalar value
    Char,
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `i128`, the widest fixed-width representation
    LongLong,
    /// `usize`
    Usize,
    /// `u32`
    UInt,
    /// `u64`
    ULong,
    /// `u128`
    ULongLong,
    /// Borrowed string slice
    Str,
    /// Owned [`GhoString`](crate::string::GhoString)
    GhoString,
    /// Arbitrary-precision integer
    BigInt,
    /// [`StartAndSize`](crate::numeric::StartAndSize) pair
    StartAndSize,
    /// Type-erased [`Any`](crate::any::Any)
    Any,
    /// [`Vector`](crate::containers::Vector) of any element type
    Vector,
    /// [`Matrix`](crate::containers::Matrix) of any element type
    Matrix,
    /// Owned [`Integer`](crate::operand::Integer)
    Operand,
}

impl TypeTag {
    /// Returns the display name of the type
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::LongLong => "long long",
            Self::Usize => "usize",
            Self::UInt => "unsigned int",
            Self::ULong => "unsigned long",
            Self::ULongLong => "unsigned long long",
            Self::Str => "str",
            Self::GhoString => "gho_string",
            Self::BigInt => "bigint",
            Self::StartAndSize => "start_and_size",
            Self::Any => "any",
            Self::Vector => "vector",
            Self::Matrix => "matrix",
            Self::Operand => "operand",
        }
    }

    /// Returns true for the four representations an operand can alias
    pub const fn is_operand_representation(&self) -> bool {
        matches!(self, Self::Int | Self::Long | Self::LongLong | Self::BigInt)
    }

    /// Returns true for fixed-width signed integers
    pub const fn is_fixed_width(&self) -> bool {
        matches!(self, Self::Int | Self::Long | Self::LongLong)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Types that carry a static runtime tag
pub trait Typed {
    /// Tag of the implementing type
    const TYPE_TAG: TypeTag;
}

impl Typed for str {
    const TYPE_TAG: TypeTag = TypeTag::Str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_names() {
        assert_eq!(TypeTag::LongLong.to_string(), "long long");
        assert_eq!(TypeTag::BigInt.name(), "bigint");
        assert_eq!(<str as Typed>::TYPE_TAG.name(), "str");
    }

    proptest! {
        #[test]
        fn fixed_width_tags_are_operand_representations(tag: TypeTag) {
            if tag.is_fixed_width() {
                prop_assert!(tag.is_operand_representation());
            }
            prop_assert!(!tag.name().is_empty());
        }
    }
}
