//! Integer helpers
//!
//! Small number-theory and sizing helpers shared by the operand layer.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

/// Smaller of two values, `a` on ties
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Larger of two values, `a` on ties
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// Absolute value
pub fn abs<T: Signed>(value: T) -> T {
    value.abs()
}

/// Quotient rounded towards positive infinity
pub fn ceil_div<T: Integer>(numerator: T, denominator: T) -> T {
    numerator.div_ceil(&denominator)
}

/// Quotient rounded towards negative infinity
pub fn floor_div<T: Integer>(numerator: T, denominator: T) -> T {
    numerator.div_floor(&denominator)
}

/// Greatest common divisor, never negative
///
/// Panics if the result does not fit `T`, as for `gcd(i32::MIN, 0)`.
pub fn gcd<T: Integer>(a: T, b: T) -> T {
    a.gcd(&b)
}

/// Greatest common divisor of two `i128` values, computed on magnitudes
pub fn unsigned_gcd(a: i128, b: i128) -> u128 {
    a.unsigned_abs().gcd(&b.unsigned_abs())
}

/// Size of an integer in base 2 and base 10
///
/// Both counts ignore the sign and are at least 1, so zero has one bit and
/// one digit.
pub trait Digits {
    /// Number of significant bits of the magnitude
    fn bit_length(&self) -> u64;

    /// Number of decimal digits of the magnitude
    fn decimal_digits(&self) -> u64;
}

macro_rules! impl_digits {
    ($($ty:ty),*) => {$(
        impl Digits for $ty {
            fn bit_length(&self) -> u64 {
                let magnitude = self.unsigned_abs();
                u64::from(<$ty>::BITS - magnitude.leading_zeros()).max(1)
            }

            fn decimal_digits(&self) -> u64 {
                self.unsigned_abs()
                    .checked_ilog10()
                    .map_or(1, |log| u64::from(log) + 1)
            }
        }
    )*};
}

impl_digits!(i32, i64, i128);

impl Digits for BigInt {
    fn bit_length(&self) -> u64 {
        self.bits().max(1)
    }

    fn decimal_digits(&self) -> u64 {
        self.magnitude().to_str_radix(10).len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_digit_counts() {
        assert_eq!(0i32.bit_length(), 1);
        assert_eq!(0i64.decimal_digits(), 1);
        assert_eq!((-8i32).bit_length(), 4);
        assert_eq!(999i128.decimal_digits(), 3);
        assert_eq!(1000i128.decimal_digits(), 4);
        assert_eq!(i128::MIN.bit_length(), 128);
        assert_eq!(BigInt::from(-1024).bit_length(), 11);
        assert_eq!(BigInt::from(0).decimal_digits(), 1);
        assert_eq!(BigInt::from(-100_000).decimal_digits(), 6);
    }

    #[test]
    fn test_division_helpers() {
        assert_eq!(ceil_div(7, 2), 4);
        assert_eq!(ceil_div(-7, 2), -3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(min(3, 3), 3);
        assert_eq!(max(-1, 4), 4);
        assert_eq!(abs(-9i64), 9);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(unsigned_gcd(i128::MIN, 0), 1u128 << 127);
    }

    #[quickcheck]
    fn gcd_divides_both(a: i64, b: i64) -> bool {
        let g = unsigned_gcd(a as i128, b as i128);
        if g == 0 {
            return a == 0 && b == 0;
        }
        (a as i128).unsigned_abs() % g == 0 && (b as i128).unsigned_abs() % g == 0
    }

    #[quickcheck]
    fn bit_length_matches_bigint(value: i64) -> bool {
        value.bit_length() == BigInt::from(value).bit_length()
            && value.decimal_digits() == BigInt::from(value).decimal_digits()
    }
}
