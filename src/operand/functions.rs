//! Integer math functions
//!
//! `floor` and `ceil` leave integers unchanged. `log2` and `log10` replace the
//! value by its size in bits or decimal digits, which is the integer logarithm
//! plus one.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::config::GhoConfig;
use crate::error::{ArithmeticError, GhoResult};
use crate::numeric::Digits;
use crate::operand::scalar::{Exact, Scalar};
use crate::operand::{Coperand, Operand};

fn bit_length(value: Scalar<'_>) -> u64 {
    match value {
        Scalar::Fixed(value) => value.bit_length(),
        Scalar::Big(value) => value.bit_length(),
    }
}

fn decimal_digits(value: Scalar<'_>) -> u64 {
    match value {
        Scalar::Fixed(value) => value.decimal_digits(),
        Scalar::Big(value) => value.decimal_digits(),
    }
}

fn size_to_usize(size: u64) -> usize {
    usize::try_from(size).unwrap_or(usize::MAX)
}

/// `10^exponent`, in `i128` when it fits
fn power_of_ten(exponent: u64) -> Exact {
    match u32::try_from(exponent).ok().and_then(|e| 10i128.checked_pow(e)) {
        Some(power) => Exact::Fixed(power),
        None => {
            let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
            Exact::Big(BigInt::from(10u8).pow(exponent))
        }
    }
}

fn with_sign_of(value: Scalar<'_>, magnitude: Exact) -> Exact {
    if !value.is_negative() {
        return magnitude;
    }
    match magnitude {
        Exact::Fixed(magnitude) => Exact::Fixed(-magnitude),
        Exact::Big(magnitude) => Exact::Big(-magnitude),
    }
}

impl<C: GhoConfig> Operand<'_, C> {
    /// Leaves the integer unchanged
    pub fn floor(&mut self) -> GhoResult<()> {
        self.unary("floor", |value| Ok(value.to_exact()))
    }

    /// Leaves the integer unchanged
    pub fn ceil(&mut self) -> GhoResult<()> {
        self.unary("ceil", |value| Ok(value.to_exact()))
    }

    /// Replaces the value by the number of bits of its magnitude
    pub fn log2(&mut self) -> GhoResult<()> {
        self.unary("log2", |value| Ok(Exact::Fixed(i128::from(bit_length(value)))))
    }

    /// Replaces the value by the number of decimal digits of its magnitude
    pub fn log10(&mut self) -> GhoResult<()> {
        self.unary("log10", |value| {
            Ok(Exact::Fixed(i128::from(decimal_digits(value))))
        })
    }

    /// Largest power of ten not above the magnitude, with the sign kept
    ///
    /// Zero stays zero.
    pub fn pow_10_floor(&mut self) -> GhoResult<()> {
        self.unary("pow_10_floor", |value| {
            if value.is_zero() {
                return Ok(Exact::Fixed(0));
            }
            let power = power_of_ten(decimal_digits(value) - 1);
            Ok(with_sign_of(value, power))
        })
    }

    /// Power of ten nearest to the magnitude, with the sign kept
    ///
    /// Halfway values round up. Zero stays zero.
    pub fn pow_10_round(&mut self) -> GhoResult<()> {
        self.unary("pow_10_round", |value| {
            if value.is_zero() {
                return Ok(Exact::Fixed(0));
            }
            let digits = decimal_digits(value);
            let magnitude = value.to_big().abs();
            let lower = power_of_ten(digits - 1).into_big();
            let upper = power_of_ten(digits).into_big();
            let nearest = if &magnitude - &lower < &upper - &magnitude {
                lower
            } else {
                upper
            };
            Ok(with_sign_of(value, Exact::Big(nearest)))
        })
    }

    /// See [`Coperand::is_divisible`]
    pub fn is_divisible<D: GhoConfig>(&self, rhs: &Coperand<'_, D>) -> GhoResult<bool> {
        self.as_coperand().is_divisible(rhs)
    }

    /// See [`Coperand::is_divisible_i64`]
    pub fn is_divisible_i64(&self, rhs: i64) -> GhoResult<bool> {
        self.as_coperand().is_divisible_i64(rhs)
    }

    /// See [`Coperand::size_in_base_2`]
    pub fn size_in_base_2(&self) -> GhoResult<usize> {
        self.as_coperand().size_in_base_2()
    }

    /// See [`Coperand::size_in_base_10`]
    pub fn size_in_base_10(&self) -> GhoResult<usize> {
        self.as_coperand().size_in_base_10()
    }
}

impl<C: GhoConfig> Coperand<'_, C> {
    /// Returns true if `rhs` divides the value
    pub fn is_divisible<D: GhoConfig>(&self, rhs: &Coperand<'_, D>) -> GhoResult<bool> {
        let value = self.scalar_or("is_divisible")?;
        let divisor = rhs.scalar_or("is_divisible")?;
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero {
                operation: "is_divisible",
            }
            .into());
        }
        Ok(match (value, divisor) {
            (Scalar::Fixed(x), Scalar::Fixed(y)) => x.checked_rem(y).unwrap_or(0) == 0,
            (x, y) => (x.to_big().as_ref() % y.to_big().as_ref()).is_zero(),
        })
    }

    /// [`is_divisible`](Self::is_divisible) by an immediate
    pub fn is_divisible_i64(&self, rhs: i64) -> GhoResult<bool> {
        self.is_divisible(&Coperand::new(&rhs))
    }

    /// Number of binary digits of the magnitude, at least 1
    pub fn size_in_base_2(&self) -> GhoResult<usize> {
        let value = self.scalar_or("size_in_base_2")?;
        Ok(size_to_usize(bit_length(value)))
    }

    /// Number of decimal digits of the magnitude, at least 1
    pub fn size_in_base_10(&self) -> GhoResult<usize> {
        let value = self.scalar_or("size_in_base_10")?;
        Ok(size_to_usize(decimal_digits(value)))
    }
}
