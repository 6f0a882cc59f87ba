//! Type-erased values
//!
//! [`Any`] owns a value of any [`Element`](crate::traits::Element) type behind
//! the [`AnyValue`] vtable. Copies are deep, printing and equality go through
//! the vtable, and the concrete value can be recovered by downcasting.

pub mod value;

use core::fmt;

use crate::config::GhoConfig;
use crate::error::{GhoError, GhoResult};
use crate::operand::{Coperand, Integer, Operand};
use crate::traits::{Element, Printable};
use crate::types::{TypeTag, Typed};

pub use value::AnyValue;

/// Owned, type-erased value
///
/// An empty `Any` holds nothing and reports [`TypeTag::Null`].
///
/// # Example
/// ```rust
/// use gho::prelude::*;
///
/// let mut value = Any::from_value(41i64);
/// assert_eq!(value.type_tag(), TypeTag::Long);
///
/// value.operand::<DefaultConfig>()?.increment()?;
/// assert_eq!(value.downcast_ref::<i64>(), Some(&42));
/// assert_eq!(value.to_gho_string(), "42");
/// # Ok::<(), GhoError>(())
/// ```
#[derive(Default)]
pub struct Any {
    value: Option<Box<dyn AnyValue>>,
}

impl Any {
    /// Creates an empty value
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Takes ownership of `value`
    pub fn from_value<T: Element>(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
        }
    }

    /// Drops the held value
    pub fn reset(&mut self) {
        self.value = None;
    }

    /// Returns true if no value is held
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Tag of the held value, [`TypeTag::Null`] when empty
    pub fn type_tag(&self) -> TypeTag {
        self.value
            .as_deref()
            .map_or(TypeTag::Null, AnyValue::type_tag)
    }

    /// Equality through the vtable
    ///
    /// An empty value is unequal to everything, itself included.
    pub fn equal(&self, other: &Any) -> bool {
        match (self.value.as_deref(), other.value.as_deref()) {
            (Some(a), Some(b)) => a.eq_dyn(b),
            _ => false,
        }
    }

    /// Borrows the held value if it is a `T`
    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        self.value.as_deref()?.as_std_any().downcast_ref::<T>()
    }

    /// Mutably borrows the held value if it is a `T`
    pub fn downcast_mut<T: Element>(&mut self) -> Option<&mut T> {
        self.value.as_deref_mut()?.as_std_any_mut().downcast_mut::<T>()
    }

    /// Mutable operand over the held integer
    pub fn operand<C: GhoConfig>(&mut self) -> GhoResult<Operand<'_, C>> {
        let tag = self.type_tag();
        let operand = match tag {
            TypeTag::Int => self.downcast_mut::<i32>().map(Operand::with_config),
            TypeTag::Long => self.downcast_mut::<i64>().map(Operand::with_config),
            TypeTag::LongLong => self.downcast_mut::<i128>().map(Operand::with_config),
            TypeTag::BigInt => self
                .downcast_mut::<num_bigint::BigInt>()
                .map(Operand::with_config),
            TypeTag::Operand => self.downcast_mut::<Integer>().map(Operand::with_config),
            _ => None,
        };
        operand.ok_or_else(|| {
            tracing::debug!(%tag, "any does not hold an integer");
            GhoError::unsupported("operand", tag)
        })
    }

    /// Read-only operand over the held integer
    pub fn coperand<C: GhoConfig>(&self) -> GhoResult<Coperand<'_, C>> {
        let tag = self.type_tag();
        let coperand = match tag {
            TypeTag::Int => self.downcast_ref::<i32>().map(Coperand::with_config),
            TypeTag::Long => self.downcast_ref::<i64>().map(Coperand::with_config),
            TypeTag::LongLong => self.downcast_ref::<i128>().map(Coperand::with_config),
            TypeTag::BigInt => self
                .downcast_ref::<num_bigint::BigInt>()
                .map(Coperand::with_config),
            TypeTag::Operand => self.downcast_ref::<Integer>().map(Coperand::with_config),
            _ => None,
        };
        coperand.ok_or_else(|| GhoError::unsupported("coperand", tag))
    }
}

impl Clone for Any {
    fn clone(&self) -> Self {
        Self {
            value: self.value.as_deref().map(AnyValue::clone_boxed),
        }
    }
}

impl PartialEq for Any {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl fmt::Debug for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Any")
            .field("type_tag", &self.type_tag())
            .field("value", &self.to_gho_string().as_str())
            .finish()
    }
}

impl Typed for Any {
    const TYPE_TAG: TypeTag = TypeTag::Any;
}

impl Element for Any {
    fn create() -> Self {
        Self::new()
    }
}

impl Printable for Any {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        match self.value.as_deref() {
            Some(value) => value.write_dyn(out, indent),
            None => {
                crate::io::write_indent(out, indent)?;
                out.write_str("null")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultConfig;
    use crate::containers::Vector;
    use crate::string::GhoString;
    use num_bigint::BigInt;

    #[test]
    fn test_empty_any() {
        let empty = Any::new();
        assert!(empty.is_empty());
        assert_eq!(empty.type_tag(), TypeTag::Null);
        assert!(!empty.equal(&Any::new()));
        assert_eq!(empty.to_gho_string(), "null");
    }

    #[test]
    fn test_copy_is_deep() {
        let original = Any::from_value(GhoString::from("text"));
        let mut copy = original.clone();
        assert!(copy.equal(&original));

        copy.downcast_mut::<GhoString>().unwrap().add_char('!');
        assert!(!copy.equal(&original));
        assert_eq!(original.to_gho_string(), "text");
    }

    #[test]
    fn test_equality_requires_same_type() {
        assert!(!Any::from_value(1i32).equal(&Any::from_value(1i64)));
        assert!(Any::from_value('x').equal(&Any::from_value('x')));
    }

    #[test]
    fn test_containers_in_any() {
        let vector: Vector<i32> = vec![1, 2].into();
        let any = vector.to_any();
        assert_eq!(any.type_tag(), TypeTag::Vector);
        assert_eq!(any.to_gho_string(), "{ 1, 2 }");
        assert_eq!(any.downcast_ref::<Vector<i32>>(), Some(&vector));
    }

    #[test]
    fn test_operand_from_any() {
        let mut big = Any::from_value(BigInt::from(10));
        big.operand::<DefaultConfig>()
            .unwrap()
            .mul_i64(10)
            .unwrap();
        assert_eq!(big.downcast_ref::<BigInt>(), Some(&BigInt::from(100)));

        let mut text = Any::from_value(GhoString::from("x"));
        assert_eq!(
            text.operand::<DefaultConfig>().unwrap_err(),
            GhoError::unsupported("operand", TypeTag::GhoString)
        );
        assert!(Any::new().coperand::<DefaultConfig>().is_err());
    }
}
