//! In-place unary arithmetic

use num_traits::Signed;

use crate::config::GhoConfig;
use crate::error::GhoResult;
use crate::operand::Operand;
use crate::operand::scalar::{Exact, Scalar};

fn map_exact(
    value: Scalar<'_>,
    fixed: impl FnOnce(i128) -> Option<i128>,
    big: impl FnOnce(num_bigint::BigInt) -> num_bigint::BigInt,
) -> Exact {
    if let Scalar::Fixed(value) = value {
        if let Some(result) = fixed(value) {
            return Exact::Fixed(result);
        }
    }
    Exact::Big(big(value.to_big().into_owned()))
}

impl<C: GhoConfig> Operand<'_, C> {
    /// `self = self + 1`
    pub fn increment(&mut self) -> GhoResult<()> {
        self.unary("increment", |value| {
            Ok(map_exact(value, |v| v.checked_add(1), |v| v + 1))
        })
    }

    /// `self = self - 1`
    pub fn decrement(&mut self) -> GhoResult<()> {
        self.unary("decrement", |value| {
            Ok(map_exact(value, |v| v.checked_sub(1), |v| v - 1))
        })
    }

    /// `self = -self`
    ///
    /// Negating the minimum of a fixed-width type overflows.
    pub fn negate(&mut self) -> GhoResult<()> {
        self.unary("negate", |value| {
            Ok(map_exact(value, i128::checked_neg, |v| -v))
        })
    }

    /// `self = |self|`
    pub fn abs(&mut self) -> GhoResult<()> {
        self.unary("abs", |value| {
            Ok(map_exact(value, i128::checked_abs, |v| v.abs()))
        })
    }
}
