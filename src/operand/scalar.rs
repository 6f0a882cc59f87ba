//! Value views and narrowing
//!
//! Every dispatch reads its inputs as a [`Scalar`]: fixed-width values widen
//! losslessly to `i128`, arbitrary-precision values are borrowed. Results come
//! back as an owned [`Exact`] and are narrowed to the destination width as
//! the final step.

use std::borrow::Cow;
use core::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{ArithmeticError, GhoResult};
use crate::types::TypeTag;

/// Read-only view of an operand value
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scalar<'a> {
    Fixed(i128),
    Big(&'a BigInt),
}

impl<'a> Scalar<'a> {
    pub(crate) fn to_big(self) -> Cow<'a, BigInt> {
        match self {
            Self::Fixed(value) => Cow::Owned(BigInt::from(value)),
            Self::Big(value) => Cow::Borrowed(value),
        }
    }

    pub(crate) fn to_exact(self) -> Exact {
        match self {
            Self::Fixed(value) => Exact::Fixed(value),
            Self::Big(value) => Exact::Big(value.clone()),
        }
    }

    pub(crate) fn is_zero(self) -> bool {
        match self {
            Self::Fixed(value) => value == 0,
            Self::Big(value) => value.is_zero(),
        }
    }

    pub(crate) fn is_negative(self) -> bool {
        match self {
            Self::Fixed(value) => value < 0,
            Self::Big(value) => value.is_negative(),
        }
    }

    /// Compares the mathematical values, whatever the representations
    pub(crate) fn exact_cmp(self, other: Scalar<'_>) -> Ordering {
        match (self, other) {
            (Self::Fixed(a), Scalar::Fixed(b)) => a.cmp(&b),
            (a, b) => a.to_big().as_ref().cmp(b.to_big().as_ref()),
        }
    }

    /// Low 128 bits in two's complement
    fn low_bits(self) -> i128 {
        match self {
            Self::Fixed(value) => value,
            Self::Big(value) => {
                let (sign, digits) = value.to_u64_digits();
                let low = digits.first().copied().map_or(0, u128::from)
                    | digits.get(1).copied().map_or(0, u128::from) << 64;
                let low = if sign == Sign::Minus {
                    low.wrapping_neg()
                } else {
                    low
                };
                low as i128
            }
        }
    }
}

/// Owned result of an operation, before narrowing
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Exact {
    Fixed(i128),
    Big(BigInt),
}

impl Exact {
    pub(crate) fn as_scalar(&self) -> Scalar<'_> {
        match self {
            Self::Fixed(value) => Scalar::Fixed(*value),
            Self::Big(value) => Scalar::Big(value),
        }
    }

    pub(crate) fn into_big(self) -> BigInt {
        match self {
            Self::Fixed(value) => BigInt::from(value),
            Self::Big(value) => value,
        }
    }

    /// Stores a `u128` magnitude, promoting when it exceeds `i128`
    pub(crate) fn from_u128(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(value) => Self::Fixed(value),
            Err(_) => Self::Big(BigInt::from(value)),
        }
    }
}

/// Runs `fixed` on two fixed-width inputs, falling back to `big` otherwise
///
/// The fallback also covers `i128` overflow in `fixed`.
pub(crate) fn fixed_or_big(
    a: Scalar<'_>,
    b: Scalar<'_>,
    fixed: impl FnOnce(i128, i128) -> Option<i128>,
    big: impl FnOnce(&BigInt, &BigInt) -> BigInt,
) -> Exact {
    if let (Scalar::Fixed(x), Scalar::Fixed(y)) = (a, b) {
        if let Some(value) = fixed(x, y) {
            return Exact::Fixed(value);
        }
    }
    Exact::Big(big(a.to_big().as_ref(), b.to_big().as_ref()))
}

/// Floor division; `None` on a zero divisor or `i128` overflow
pub(crate) fn checked_div_floor(a: i128, b: i128) -> Option<i128> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Floor remainder, with the sign of the divisor
pub(crate) fn checked_mod_floor(a: i128, b: i128) -> Option<i128> {
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        remainder.checked_add(b)
    } else {
        Some(remainder)
    }
}

/// Fixed-width destination representations
pub(crate) trait FixedWidth: Copy + Into<i128> + TryFrom<i128> {
    const TAG: TypeTag;

    /// Two's-complement truncation
    fn truncate(value: i128) -> Self;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $tag:ident),*) => {$(
        impl FixedWidth for $ty {
            const TAG: TypeTag = TypeTag::$tag;

            fn truncate(value: i128) -> Self {
                value as $ty
            }
        }
    )*};
}

impl_fixed_width!(i32 => Int, i64 => Long, i128 => LongLong);

/// Narrows `value` to `T`
///
/// Out-of-range values are an overflow or underflow error when `check` is
/// set, and wrap around otherwise.
pub(crate) fn narrow<T: FixedWidth>(
    operation: &'static str,
    value: Scalar<'_>,
    check: bool,
) -> GhoResult<T> {
    let fitted = match value {
        Scalar::Fixed(value) => T::try_from(value).ok(),
        Scalar::Big(value) => value.to_i128().and_then(|value| T::try_from(value).ok()),
    };
    if let Some(fitted) = fitted {
        return Ok(fitted);
    }

    if check {
        tracing::debug!(operation, target = %T::TAG, "value does not fit the destination");
        let error = if value.is_negative() {
            ArithmeticError::Underflow {
                operation,
                target: T::TAG,
            }
        } else {
            ArithmeticError::Overflow {
                operation,
                target: T::TAG,
            }
        };
        return Err(error.into());
    }

    tracing::trace!(operation, target = %T::TAG, "value wraps around");
    Ok(T::truncate(value.low_bits()))
}
