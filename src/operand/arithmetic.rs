//! Binary arithmetic
//!
//! Every operation reads both sides exactly, computes in `i128` when both
//! sides are fixed width and in arbitrary precision otherwise, then narrows
//! into the destination. Each has an `_i64` form taking an immediate.

use num_integer::Integer as _;
use num_traits::{Signed, ToPrimitive};

use crate::config::GhoConfig;
use crate::error::{ArithmeticError, GhoError, GhoResult};
use crate::numeric::unsigned_gcd;
use crate::operand::scalar::{
    Exact, Scalar, checked_div_floor, checked_mod_floor, fixed_or_big,
};
use crate::operand::{Coperand, Operand};

fn nonzero_divisor(operation: &'static str, divisor: Scalar<'_>) -> GhoResult<()> {
    if divisor.is_zero() {
        tracing::debug!(operation, "division by zero");
        return Err(ArithmeticError::DivisionByZero { operation }.into());
    }
    Ok(())
}

macro_rules! immediate_forms {
    ($($name:ident => $op:ident),* $(,)?) => {$(
        #[doc = concat!(
            "[`", stringify!($op), "`](Self::", stringify!($op),
            ") with an immediate right-hand side"
        )]
        pub fn $name(&mut self, rhs: i64) -> GhoResult<()> {
            self.$op(&Coperand::new(&rhs))
        }
    )*};
}

impl<C: GhoConfig> Operand<'_, C> {
    /// `self = self + rhs`
    pub fn add<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("add", rhs, |a, b| {
            Ok(fixed_or_big(a, b, i128::checked_add, |x, y| x + y))
        })
    }

    /// `self = self - rhs`
    pub fn sub<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("sub", rhs, |a, b| {
            Ok(fixed_or_big(a, b, i128::checked_sub, |x, y| x - y))
        })
    }

    /// `self = self * rhs`
    pub fn mul<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("mul", rhs, |a, b| {
            Ok(fixed_or_big(a, b, i128::checked_mul, |x, y| x * y))
        })
    }

    /// Quotient rounded toward negative infinity
    pub fn floor_div_q<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("floor_div_q", rhs, |a, b| {
            nonzero_divisor("floor_div_q", b)?;
            Ok(fixed_or_big(a, b, checked_div_floor, |x, y| x.div_floor(y)))
        })
    }

    /// Remainder of [`floor_div_q`](Self::floor_div_q), with the sign of `rhs`
    pub fn floor_div_r<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("floor_div_r", rhs, |a, b| {
            nonzero_divisor("floor_div_r", b)?;
            Ok(fixed_or_big(a, b, checked_mod_floor, |x, y| x.mod_floor(y)))
        })
    }

    /// Quotient rounded toward zero
    pub fn trunc_div_q<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("trunc_div_q", rhs, |a, b| {
            nonzero_divisor("trunc_div_q", b)?;
            Ok(fixed_or_big(a, b, i128::checked_div, |x, y| x / y))
        })
    }

    /// Remainder of [`trunc_div_q`](Self::trunc_div_q), with the sign of `self`
    pub fn trunc_div_r<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("trunc_div_r", rhs, |a, b| {
            nonzero_divisor("trunc_div_r", b)?;
            Ok(fixed_or_big(a, b, i128::checked_rem, |x, y| x % y))
        })
    }

    /// Non-negative remainder
    pub fn modulo<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("mod", rhs, |a, b| {
            nonzero_divisor("mod", b)?;
            Ok(fixed_or_big(
                a,
                b,
                |x, y| checked_mod_floor(x, y)?.checked_abs(),
                |x, y| x.mod_floor(y).abs(),
            ))
        })
    }

    /// Division known to be exact
    ///
    /// With `C::CHECK_PRECONDITIONS` a non-zero remainder is an error;
    /// without it the quotient is truncated.
    pub fn div_exact<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("div_exact", rhs, |a, b| {
            nonzero_divisor("div_exact", b)?;
            if C::CHECK_PRECONDITIONS {
                let remainder = fixed_or_big(
                    a,
                    b,
                    // i128::MIN % -1 is the only failure and divides evenly
                    |x, y| Some(x.checked_rem(y).unwrap_or(0)),
                    |x, y| x % y,
                );
                if !remainder.as_scalar().is_zero() {
                    tracing::debug!("div_exact on operands that do not divide evenly");
                    return Err(ArithmeticError::InexactDivision {
                        operation: "div_exact",
                    }
                    .into());
                }
            }
            Ok(fixed_or_big(a, b, i128::checked_div, |x, y| x / y))
        })
    }

    /// Greatest common divisor, always non-negative
    pub fn gcd<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("gcd", rhs, |a, b| {
            Ok(match (a, b) {
                (Scalar::Fixed(x), Scalar::Fixed(y)) => Exact::from_u128(unsigned_gcd(x, y)),
                (a, b) => Exact::Big(a.to_big().gcd(b.to_big().as_ref())),
            })
        })
    }

    /// `self = self ^ rhs`
    ///
    /// A negative exponent is always an error. Fixed-width results that do
    /// not fit are an error with `C::CHECK_OVERFLOW` and wrap otherwise.
    pub fn pow<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        let target = self.type_tag();
        let exponent = rhs.source.scalar();
        let Some(exponent) = exponent.filter(|_| !self.is_null()) else {
            let rhs = rhs.type_tag();
            tracing::debug!(operation = "pow", lhs = %target, %rhs, "operand types not supported");
            return Err(GhoError::unsupported_pair("pow", target, rhs));
        };
        if exponent.is_negative() {
            tracing::debug!("pow with a negative exponent");
            return Err(ArithmeticError::NegativeExponent { operation: "pow" }.into());
        }
        let exponent = match exponent {
            Scalar::Fixed(value) => u32::try_from(value).ok(),
            Scalar::Big(value) => value.to_u32(),
        }
        .ok_or(ArithmeticError::ExponentTooLarge { operation: "pow" })?;

        self.unary("pow", |base| match base {
            Scalar::Fixed(base) => match base.checked_pow(exponent) {
                Some(value) => Ok(Exact::Fixed(value)),
                None if C::CHECK_OVERFLOW => {
                    tracing::debug!(%target, "pow does not fit the destination");
                    let error = if base < 0 && exponent % 2 == 1 {
                        ArithmeticError::Underflow {
                            operation: "pow",
                            target,
                        }
                    } else {
                        ArithmeticError::Overflow {
                            operation: "pow",
                            target,
                        }
                    };
                    Err(error.into())
                }
                None => Ok(Exact::Fixed(base.wrapping_pow(exponent))),
            },
            Scalar::Big(base) => Ok(Exact::Big(base.pow(exponent))),
        })
    }

    immediate_forms! {
        add_i64 => add,
        sub_i64 => sub,
        mul_i64 => mul,
        floor_div_q_i64 => floor_div_q,
        floor_div_r_i64 => floor_div_r,
        trunc_div_q_i64 => trunc_div_q,
        trunc_div_r_i64 => trunc_div_r,
        modulo_i64 => modulo,
        div_exact_i64 => div_exact,
        gcd_i64 => gcd,
        pow_i64 => pow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use crate::configs::{CheckedConfig, WrappingConfig};
    use crate::operand::Integer;
    use crate::types::TypeTag;

    fn checked(value: &mut i32) -> Operand<'_, CheckedConfig> {
        Operand::with_config(value)
    }

    fn wrapping(value: &mut i32) -> Operand<'_, WrappingConfig> {
        Operand::with_config(value)
    }

    #[test]
    fn test_mixed_representations() {
        let mut int = 7i32;
        let big = BigInt::from(5);
        let long = 3i64;
        let mut operand = Operand::new(&mut int);
        operand.mul(&Coperand::new(&big)).unwrap();
        operand.sub(&Coperand::new(&long)).unwrap();
        assert_eq!(int, 32);
    }

    fn apply(lhs: i32, op: impl FnOnce(&mut Operand<'_, CheckedConfig>) -> GhoResult<()>) -> i32 {
        let mut value = lhs;
        op(&mut checked(&mut value)).unwrap();
        value
    }

    #[test]
    fn test_division_family() {
        assert_eq!(apply(-7, |o| o.floor_div_q_i64(2)), -4);
        assert_eq!(apply(-7, |o| o.floor_div_r_i64(2)), 1);
        assert_eq!(apply(7, |o| o.floor_div_q_i64(-2)), -4);
        assert_eq!(apply(7, |o| o.floor_div_r_i64(-2)), -1);
        assert_eq!(apply(-7, |o| o.trunc_div_q_i64(2)), -3);
        assert_eq!(apply(-7, |o| o.trunc_div_r_i64(2)), -1);
        assert_eq!(apply(-7, |o| o.modulo_i64(2)), 1);
        assert_eq!(apply(7, |o| o.modulo_i64(-2)), 1);
        assert_eq!(apply(-12, |o| o.div_exact_i64(4)), -3);
        assert_eq!(apply(-12, |o| o.gcd_i64(18)), 6);
    }

    #[test]
    fn test_division_by_zero_always_checked() {
        let mut value = 10i32;
        for result in [
            wrapping(&mut value).floor_div_q_i64(0),
            wrapping(&mut value).trunc_div_r_i64(0),
            wrapping(&mut value).modulo_i64(0),
            wrapping(&mut value).div_exact_i64(0),
        ] {
            assert!(matches!(
                result,
                Err(GhoError::Arithmetic(ArithmeticError::DivisionByZero { .. }))
            ));
        }
        assert_eq!(value, 10);
    }

    #[test]
    fn test_div_exact_precondition() {
        let mut value = 10i32;
        assert_eq!(
            checked(&mut value).div_exact_i64(3),
            Err(GhoError::Arithmetic(ArithmeticError::InexactDivision {
                operation: "div_exact"
            }))
        );
        wrapping(&mut value).div_exact_i64(3).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_overflow_policy() {
        let mut value = i32::MAX;
        assert_eq!(
            checked(&mut value).add_i64(1),
            Err(GhoError::Arithmetic(ArithmeticError::Overflow {
                operation: "add",
                target: TypeTag::Int
            }))
        );
        assert_eq!(value, i32::MAX);

        wrapping(&mut value).add_i64(1).unwrap();
        assert_eq!(value, i32::MIN);

        assert!(matches!(
            checked(&mut value).sub_i64(1),
            Err(GhoError::Arithmetic(ArithmeticError::Underflow { .. }))
        ));
    }

    #[test]
    fn test_i128_overflow_promotes_internally() {
        let mut value = i128::MAX;
        let mut operand = Operand::<WrappingConfig>::with_config(&mut value);
        operand.add_i64(1).unwrap();
        assert_eq!(value, i128::MIN);

        let mut big = BigInt::from(i128::MAX);
        Operand::new(&mut big).add_i64(1).unwrap();
        assert_eq!(big, BigInt::from(i128::MAX) + 1);
    }

    #[test]
    fn test_pow() {
        let mut value = 3i32;
        checked(&mut value).pow_i64(4).unwrap();
        assert_eq!(value, 81);

        let mut one = 5i32;
        checked(&mut one).pow_i64(1).unwrap();
        assert_eq!(one, 5);

        let mut zero_exponent = -9i32;
        checked(&mut zero_exponent).pow_i64(0).unwrap();
        assert_eq!(zero_exponent, 1);

        assert_eq!(
            checked(&mut value).pow_i64(-1),
            Err(GhoError::Arithmetic(ArithmeticError::NegativeExponent {
                operation: "pow"
            }))
        );
        assert!(matches!(
            checked(&mut value).pow_i64(i64::from(u32::MAX) + 1),
            Err(GhoError::Arithmetic(ArithmeticError::ExponentTooLarge { .. }))
        ));

        let mut base = -2i32;
        assert!(matches!(
            checked(&mut base).pow_i64(301),
            Err(GhoError::Arithmetic(ArithmeticError::Underflow { .. }))
        ));
        wrapping(&mut base).pow_i64(32).unwrap();
        assert_eq!(base, 0);

        let mut big = BigInt::from(2);
        Operand::new(&mut big).pow_i64(200).unwrap();
        assert_eq!(big, BigInt::from(1) << 200u32);
    }

    #[test]
    fn test_pow_on_null_names_both_operands() {
        let exponent = 2i64;
        assert_eq!(
            Operand::<CheckedConfig>::null().pow(&Coperand::new(&exponent)),
            Err(GhoError::unsupported_pair("pow", TypeTag::Null, TypeTag::Long))
        );

        let mut value = 3i32;
        assert_eq!(
            checked(&mut value).pow(&Coperand::<CheckedConfig>::null()),
            Err(GhoError::unsupported_pair("pow", TypeTag::Int, TypeTag::Null))
        );
        assert_eq!(value, 3);
    }

    #[test]
    fn test_gcd_of_i128_min() {
        let mut value = Integer::LongLong(i128::MIN);
        let zero = 0i32;
        let mut operand = Operand::<CheckedConfig>::with_config(&mut value);
        assert!(matches!(
            operand.gcd(&Coperand::new(&zero)),
            Err(GhoError::Arithmetic(ArithmeticError::Overflow { .. }))
        ));

        let mut big = BigInt::from(i128::MIN);
        Operand::new(&mut big).gcd(&Coperand::new(&zero)).unwrap();
        assert_eq!(big, BigInt::from(1) << 127u32);
    }
}
