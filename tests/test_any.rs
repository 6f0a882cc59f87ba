//! Tests for type-erased values
//!
//! This module tests that Any keeps the behaviour of the value it erases:
//! - Copies are deep and compare equal
//! - Values of different types never compare equal
//! - Integer values can be driven through operands

#![allow(unused_mut)]
#![allow(special_module_name)]

use gho::prelude::*;
use num_bigint::BigInt;
use proptest::prelude::*;

use lib::*;

fn any_of(kind: Kind, value: i32) -> Any {
    match integer_of(kind, value) {
        Integer::Int(v) => Any::from_value(v),
        Integer::Long(v) => Any::from_value(v),
        Integer::LongLong(v) => Any::from_value(v),
        Integer::Big(v) => Any::from_value(v),
    }
}

proptest! {
    #![proptest_config(operand_config())]

    /// Clones compare equal and carry the same tag
    #[test]
    fn clone_is_equal(value in small_value_strategy(), kind in any::<Kind>()) {
        let any = any_of(kind, value);
        let copy = any.clone();
        prop_assert!(copy.equal(&any));
        prop_assert_eq!(copy.type_tag(), kind.type_tag());
        let expected = value.to_string();
        prop_assert_eq!(copy.to_gho_string(), expected.as_str());
    }

    /// Equal numbers in different representations are different values
    #[test]
    fn representations_are_distinct(
        value in small_value_strategy(),
        a in any::<Kind>(),
        b in any::<Kind>(),
    ) {
        prop_assert_eq!(any_of(a, value).equal(&any_of(b, value)), a == b);
    }

    /// Operands over held integers write into the value
    #[test]
    fn operand_writes_into_any(value in small_value_strategy(), kind in any::<Kind>()) {
        let mut any = any_of(kind, value);
        any.operand::<WrappingConfig>().unwrap().negate().unwrap();
        let negated = any_of(kind, value.wrapping_neg());
        if kind == Kind::Int {
            prop_assert!(any.equal(&negated));
        } else {
            let negated = -i64::from(value);
            prop_assert!(any.coperand::<DefaultConfig>().unwrap().equal_i64(negated).unwrap());
        }
    }
}

#[test]
fn heterogeneous_vector_of_any() {
    let mut values = Vector::<Any>::new();
    values.add(Any::from_value(GhoString::from("name")));
    values.add(Any::from_value(StartAndSize::new(2, 5)));
    values.add(Any::from_value(BigInt::from(7)));
    values.add(Any::new());

    assert_eq!(values.to_gho_string(), "{ name, { 2, 5 }, 7, null }");

    let copy = values.clone();
    assert!(!copy.equal_n(&values, 4), "empty values never compare equal");
    assert!(copy.equal_n(&values, 3));
}

#[test]
fn owned_integer_in_any() {
    let mut any = Any::from_value(Integer::Long(20));
    assert_eq!(any.type_tag(), TypeTag::Operand);
    any.operand::<CheckedConfig>().unwrap().mul_i64(3).unwrap();
    assert_eq!(any.downcast_ref::<Integer>(), Some(&Integer::Long(60)));
}

#[test]
fn reset_empties() {
    let mut any = Any::from_value('c');
    assert_eq!(any.type_tag(), TypeTag::Char);
    any.reset();
    assert!(any.is_empty());
    assert!(any.downcast_ref::<char>().is_none());
}
