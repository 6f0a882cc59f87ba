//! Comparisons and sign predicates
//!
//! Values compare exactly across representations: an `int` 10 equals a
//! bigint 10. Comparing against a null operand is an unsupported-type error.

use core::cmp::Ordering;

use crate::config::GhoConfig;
use crate::error::{GhoError, GhoResult};
use crate::operand::scalar::Scalar;
use crate::operand::{Coperand, Operand};

macro_rules! ordering_tests {
    ($($name:ident, $name_i64:ident => $test:expr, $doc:literal);* $(;)?) => {$(
        #[doc = $doc]
        pub fn $name<D: GhoConfig>(&self, rhs: &Coperand<'_, D>) -> GhoResult<bool> {
            let test: fn(Ordering) -> bool = $test;
            self.ordering(stringify!($name), rhs).map(test)
        }

        #[doc = concat!(
            "[`", stringify!($name), "`](Self::", stringify!($name), ") against an immediate"
        )]
        pub fn $name_i64(&self, rhs: i64) -> GhoResult<bool> {
            self.$name(&Coperand::new(&rhs))
        }
    )*};
}

macro_rules! constant_tests {
    ($($name:ident => $constant:literal),* $(,)?) => {$(
        #[doc = concat!("Returns true if the value equals ", stringify!($constant))]
        pub fn $name(&self) -> GhoResult<bool> {
            let value = self.scalar_or(stringify!($name))?;
            Ok(value.exact_cmp(Scalar::Fixed($constant)) == Ordering::Equal)
        }
    )*};
}

impl<C: GhoConfig> Coperand<'_, C> {
    fn ordering<D: GhoConfig>(
        &self,
        operation: &'static str,
        rhs: &Coperand<'_, D>,
    ) -> GhoResult<Ordering> {
        match (self.source.scalar(), rhs.source.scalar()) {
            (Some(a), Some(b)) => Ok(a.exact_cmp(b)),
            _ => {
                let (lhs, rhs) = (self.type_tag(), rhs.type_tag());
                tracing::debug!(operation, %lhs, %rhs, "operand types not supported");
                Err(GhoError::unsupported_pair(operation, lhs, rhs))
            }
        }
    }

    /// Three-way comparison of the exact values
    pub fn compare<D: GhoConfig>(&self, rhs: &Coperand<'_, D>) -> GhoResult<Ordering> {
        self.ordering("compare", rhs)
    }

    /// [`compare`](Self::compare) against an immediate
    pub fn compare_i64(&self, rhs: i64) -> GhoResult<Ordering> {
        self.compare(&Coperand::new(&rhs))
    }

    ordering_tests! {
        equal, equal_i64 => Ordering::is_eq, "`self == rhs`";
        not_equal, not_equal_i64 => Ordering::is_ne, "`self != rhs`";
        lesser, lesser_i64 => Ordering::is_lt, "`self < rhs`";
        lesser_or_equal, lesser_or_equal_i64 => Ordering::is_le, "`self <= rhs`";
        greater, greater_i64 => Ordering::is_gt, "`self > rhs`";
        greater_or_equal, greater_or_equal_i64 => Ordering::is_ge, "`self >= rhs`";
    }

    constant_tests! {
        is_zero => 0,
        is_one => 1,
        is_minus_one => -1,
    }

    /// Returns true if the value is strictly positive
    pub fn is_positive(&self) -> GhoResult<bool> {
        let value = self.scalar_or("is_positive")?;
        Ok(value.exact_cmp(Scalar::Fixed(0)) == Ordering::Greater)
    }

    /// Returns true if the value is strictly negative
    pub fn is_negative(&self) -> GhoResult<bool> {
        Ok(self.scalar_or("is_negative")?.is_negative())
    }
}

macro_rules! delegate_to_coperand {
    ($(
        $name:ident $(<$generic:ident: $bound:ident>)? ($($arg:ident: $ty:ty),*) -> $ret:ty;
    )*) => {$(
        #[doc = concat!("See [`Coperand::", stringify!($name), "`]")]
        pub fn $name $(<$generic: $bound>)? (&self $(, $arg: $ty)*) -> $ret {
            self.as_coperand().$name($($arg),*)
        }
    )*};
}

impl<C: GhoConfig> Operand<'_, C> {
    delegate_to_coperand! {
        compare<D: GhoConfig>(rhs: &Coperand<'_, D>) -> GhoResult<Ordering>;
        equal<D: GhoConfig>(rhs: &Coperand<'_, D>) -> GhoResult<bool>;
        not_equal<D: GhoConfig>(rhs: &Coperand<'_, D>) -> GhoResult<bool>;
        lesser<D: GhoConfig>(rhs: &Coperand<'_, D>) -> GhoResult<bool>;
        lesser_or_equal<D: GhoConfig>(rhs: &Coperand<'_, D>) -> GhoResult<bool>;
        greater<D: GhoConfig>(rhs: &Coperand<'_, D>) -> GhoResult<bool>;
        greater_or_equal<D: GhoConfig>(rhs: &Coperand<'_, D>) -> GhoResult<bool>;
        compare_i64(rhs: i64) -> GhoResult<Ordering>;
        equal_i64(rhs: i64) -> GhoResult<bool>;
        not_equal_i64(rhs: i64) -> GhoResult<bool>;
        lesser_i64(rhs: i64) -> GhoResult<bool>;
        lesser_or_equal_i64(rhs: i64) -> GhoResult<bool>;
        greater_i64(rhs: i64) -> GhoResult<bool>;
        greater_or_equal_i64(rhs: i64) -> GhoResult<bool>;
        is_zero() -> GhoResult<bool>;
        is_one() -> GhoResult<bool>;
        is_minus_one() -> GhoResult<bool>;
        is_positive() -> GhoResult<bool>;
        is_negative() -> GhoResult<bool>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag;
    use num_bigint::BigInt;

    #[test]
    fn test_compare_across_representations() {
        let int = 10i32;
        let big = BigInt::from(10);
        let long = -3i64;
        let a = Coperand::new(&int);
        assert!(a.equal(&Coperand::new(&big)).unwrap());
        assert_eq!(a.compare(&Coperand::new(&long)), Ok(Ordering::Greater));
        assert!(a.greater_or_equal_i64(10).unwrap());
        assert!(!a.lesser_i64(10).unwrap());
        assert!(a.not_equal_i64(11).unwrap());
        assert!(Coperand::new(&long).lesser_or_equal(&a).unwrap());
    }

    #[test]
    fn test_large_values_compare_exactly() {
        let huge = BigInt::from(i128::MAX) * 4;
        let widest = i128::MAX;
        assert!(Coperand::new(&huge).greater(&Coperand::new(&widest)).unwrap());
        assert!(Coperand::new(&widest).lesser(&Coperand::new(&huge)).unwrap());
    }

    #[test]
    fn test_predicates() {
        let values: [(i64, [bool; 5]); 4] = [
            (0, [true, false, false, false, false]),
            (1, [false, true, false, true, false]),
            (-1, [false, false, true, false, true]),
            (7, [false, true, false, false, false]),
        ];
        for (value, expected) in values {
            let c = Coperand::new(&value);
            let actual = [
                c.is_zero().unwrap(),
                c.is_positive().unwrap(),
                c.is_negative().unwrap(),
                c.is_one().unwrap(),
                c.is_minus_one().unwrap(),
            ];
            assert_eq!(actual, expected, "value {value}");
        }
    }

    #[test]
    fn test_null_comparisons() {
        let one = 1i32;
        let null = Coperand::<crate::config::DefaultConfig>::null();
        assert_eq!(
            null.equal(&Coperand::new(&one)),
            Err(GhoError::unsupported_pair("equal", TypeTag::Null, TypeTag::Int))
        );
        assert_eq!(
            null.is_zero(),
            Err(GhoError::unsupported("is_zero", TypeTag::Null))
        );
    }

    #[test]
    fn test_operand_delegates() {
        let mut value = 5i64;
        let operand = Operand::new(&mut value);
        assert!(operand.is_positive().unwrap());
        assert!(operand.equal_i64(5).unwrap());
        assert_eq!(operand.compare_i64(6), Ok(Ordering::Less));

        let big = BigInt::from(9);
        let rhs = Coperand::new(&big);
        assert_eq!(operand.compare(&rhs), Ok(Ordering::Less));
        assert!(operand.lesser(&rhs).unwrap());
        assert!(operand.not_equal(&rhs).unwrap());
        assert!(!operand.greater_or_equal(&rhs).unwrap());
    }
}
