//! Property-based tests for the operand dispatch layer
//!
//! This module checks operand arithmetic against exact reference values:
//! - Results in big destinations are always exact
//! - Checked destinations either store the exact value or leave the target
//!   untouched and report a range error
//! - Wrapping destinations store the two's-complement truncation
//! - Division identities hold for floor and truncating division

#![allow(unused_mut)]
#![allow(special_module_name)]

use core::cmp::Ordering;

use gho::prelude::*;
use num_bigint::BigInt;
use num_integer::Integer as _;
use proptest::prelude::*;

use lib::*;

proptest! {
    #![proptest_config(operand_config())]

    /// Mixed-representation sums are exact in a big destination
    #[test]
    fn add_into_big_is_exact(
        lhs in small_value_strategy(),
        rhs in small_value_strategy(),
        rhs_kind in any::<Kind>(),
    ) {
        let mut target = integer_of(Kind::Big, lhs);
        let source = integer_of(rhs_kind, rhs);
        target
            .as_operand::<CheckedConfig>()
            .add(&source.as_coperand::<CheckedConfig>())
            .unwrap();
        prop_assert_eq!(exact_of(&target), BigInt::from(lhs) + BigInt::from(rhs));
    }

    /// Checked products either fit or leave the target unchanged
    #[test]
    fn checked_mul_fits_or_fails(
        lhs in small_value_strategy(),
        rhs in small_value_strategy(),
        kind in any::<Kind>(),
        rhs_kind in any::<Kind>(),
    ) {
        let exact = i128::from(lhs) * i128::from(rhs);
        let mut target = integer_of(kind, lhs);
        let before = target.clone();
        let source = integer_of(rhs_kind, rhs);

        let result = target
            .as_operand::<CheckedConfig>()
            .mul(&source.as_coperand::<CheckedConfig>());

        match fit_to(kind, exact) {
            Some(expected) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(target, expected);
            }
            None => {
                let error = result.unwrap_err();
                prop_assert!(is_range_error(&error));
                prop_assert_eq!(target, before);
            }
        }
    }

    /// Wrapping products store the truncated exact value
    #[test]
    fn wrapping_mul_truncates(
        lhs in small_value_strategy(),
        rhs in small_value_strategy(),
        kind in any::<Kind>(),
    ) {
        let mut target = integer_of(kind, lhs);
        target.as_operand::<WrappingConfig>().mul_i64(i64::from(rhs)).unwrap();
        prop_assert_eq!(target, wrap_to(kind, i128::from(lhs) * i128::from(rhs)));
    }

    /// q * d + r == n with 0 <= |r| < |d| and r taking the sign of d
    #[test]
    fn floor_division_identity(
        numerator in small_value_strategy(),
        divisor in divisor_strategy(),
        kind in any::<Kind>(),
    ) {
        let mut quotient = integer_of(Kind::Big, numerator);
        let mut remainder = integer_of(kind, numerator);
        let d = integer_of(kind, divisor);

        let divisor_operand = d.as_coperand::<WrappingConfig>();
        quotient.as_operand::<WrappingConfig>().floor_div_q(&divisor_operand).unwrap();
        remainder.as_operand::<WrappingConfig>().floor_div_r(&divisor_operand).unwrap();

        let q = exact_of(&quotient);
        let r = exact_of(&remainder);
        prop_assert_eq!(&q * BigInt::from(divisor) + &r, BigInt::from(numerator));
        prop_assert!(r == BigInt::from(0) || (r < BigInt::from(0)) == (divisor < 0));
    }

    /// Truncating division agrees with Rust's `/` and `%`
    #[test]
    fn trunc_division_matches_native(
        numerator in any::<i64>(),
        divisor in any::<i64>().prop_filter("non-zero", |d| *d != 0),
    ) {
        prop_assume!(!(numerator == i64::MIN && divisor == -1));
        let mut quotient = numerator;
        let mut remainder = numerator;
        Operand::new(&mut quotient).trunc_div_q_i64(divisor).unwrap();
        Operand::new(&mut remainder).trunc_div_r_i64(divisor).unwrap();
        prop_assert_eq!(quotient, numerator / divisor);
        prop_assert_eq!(remainder, numerator % divisor);
    }

    /// The modulo is the magnitude of the floor remainder
    #[test]
    fn modulo_is_floor_remainder_magnitude(
        numerator in small_value_strategy(),
        divisor in divisor_strategy(),
    ) {
        let (n, d) = (i64::from(numerator), i64::from(divisor));
        let mut value = n;
        Operand::new(&mut value).modulo_i64(d).unwrap();
        prop_assert!(value >= 0);
        prop_assert!(value < d.abs());
        prop_assert_eq!(value, n.mod_floor(&d).abs());
        prop_assert!((n - value) % d == 0 || (n + value) % d == 0);
    }

    /// Comparisons agree with the native ordering across representations
    #[test]
    fn compare_matches_native(
        lhs in small_value_strategy(),
        rhs in small_value_strategy(),
        lhs_kind in any::<Kind>(),
        rhs_kind in any::<Kind>(),
    ) {
        let a = integer_of(lhs_kind, lhs);
        let b = integer_of(rhs_kind, rhs);
        let ca = a.as_coperand::<DefaultConfig>();
        let cb = b.as_coperand::<DefaultConfig>();

        prop_assert_eq!(ca.compare(&cb).unwrap(), lhs.cmp(&rhs));
        prop_assert_eq!(ca.equal(&cb).unwrap(), lhs == rhs);
        prop_assert_eq!(ca.lesser(&cb).unwrap(), lhs < rhs);
        prop_assert_eq!(ca.greater_or_equal(&cb).unwrap(), lhs >= rhs);
        prop_assert_eq!(ca.is_negative().unwrap(), lhs < 0);
    }

    /// gcd is non-negative and divides both inputs
    #[test]
    fn gcd_divides_both(
        lhs in small_value_strategy(),
        rhs in small_value_strategy(),
        kind in any::<Kind>(),
    ) {
        let mut g = integer_of(Kind::Big, lhs);
        let other = integer_of(kind, rhs);
        g.as_operand::<CheckedConfig>().gcd(&other.as_coperand::<CheckedConfig>()).unwrap();

        let g = exact_of(&g);
        prop_assert!(g >= BigInt::from(0));
        if g != BigInt::from(0) {
            prop_assert_eq!(BigInt::from(lhs) % &g, BigInt::from(0));
            prop_assert_eq!(BigInt::from(rhs) % &g, BigInt::from(0));
        } else {
            prop_assert!(lhs == 0 && rhs == 0);
        }
    }

    /// pow into a big destination matches the reference power
    #[test]
    fn big_pow_matches_reference(
        base in -1000i32..1000,
        exponent in exponent_strategy(),
    ) {
        let mut value = BigInt::from(base);
        Operand::new(&mut value).pow_i64(i64::from(exponent)).unwrap();
        prop_assert_eq!(value, BigInt::from(base).pow(exponent));
    }

    /// Increment then decrement restores the value, whatever the policy
    #[test]
    fn increment_decrement_round_trip(
        value in small_value_strategy(),
        kind in any::<Kind>(),
    ) {
        let original = integer_of(kind, value);
        let mut current = original.clone();
        let mut operand = current.as_operand::<WrappingConfig>();
        operand.increment().unwrap();
        operand.decrement().unwrap();
        prop_assert_eq!(current, original);
    }

    /// to_i64 fails exactly when the value is outside the i64 range
    #[test]
    fn to_i64_range(value in any::<i128>()) {
        let checked = Coperand::<CheckedConfig>::with_config(&value).to_i64();
        match i64::try_from(value) {
            Ok(expected) => prop_assert_eq!(checked.unwrap(), expected),
            Err(_) => prop_assert!(is_range_error(&checked.unwrap_err())),
        }
        let wrapped = Coperand::<WrappingConfig>::with_config(&value).to_i64().unwrap();
        prop_assert_eq!(wrapped, value as i64);
    }
}

#[test]
fn null_operands_report_both_types() {
    let value = 3i32;
    let mut null = Operand::<DefaultConfig>::null();
    assert_eq!(
        null.mul(&Coperand::new(&value)),
        Err(GhoError::unsupported_pair("mul", TypeTag::Null, TypeTag::Int))
    );

    let mut target = 3i64;
    assert_eq!(
        Operand::new(&mut target).sub(&Coperand::<DefaultConfig>::null()),
        Err(GhoError::unsupported_pair("sub", TypeTag::Long, TypeTag::Null))
    );
    assert_eq!(
        Operand::<DefaultConfig>::null().abs(),
        Err(GhoError::unsupported("abs", TypeTag::Null))
    );
}

#[test]
fn operand_type_tags() {
    for kind in [Kind::Int, Kind::Long, Kind::LongLong, Kind::Big] {
        let mut value = integer_of(kind, 1);
        assert_eq!(value.as_operand::<DefaultConfig>().type_tag(), kind.type_tag());
    }
}

#[test]
fn operand_prints_value() {
    let mut value = BigInt::from(-5) << 100u32;
    let operand = Operand::new(&mut value);
    assert_eq!(
        operand.to_gho_string(),
        "-6338253001141147007483516026880"
    );
    assert_eq!(operand.compare_i64(0), Ok(Ordering::Less));
}

#[test]
fn accumulate_factorial_across_representations() {
    let mut factorial = BigInt::from(1);
    let mut accumulator = Operand::new(&mut factorial);
    for i in 1..=30i32 {
        accumulator.mul(&Coperand::new(&i)).unwrap();
    }
    assert_eq!(
        factorial.to_string(),
        "265252859812191058636308480000000"
    );

    let mut narrow = 1i64;
    let mut checked = Operand::<CheckedConfig>::with_config(&mut narrow);
    let overflow = (1..=30i64).try_for_each(|i| checked.mul_i64(i));
    assert!(overflow.is_err());
    // 20! is the largest factorial that fits an i64
    assert_eq!(narrow, 2_432_902_008_176_640_000);
}

#[test]
fn modulo_with_negative_divisor() {
    // floor remainder of 1 by -3 is -2
    let mut value = 1i32;
    Operand::new(&mut value).modulo_i64(-3).unwrap();
    assert_eq!(value, 2);

    let mut value = BigInt::from(-7);
    Operand::new(&mut value).modulo_i64(-3).unwrap();
    assert_eq!(value, BigInt::from(1));
}
