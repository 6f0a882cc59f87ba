//! Dynamic value trait
//!
//! `AnyValue` is the vtable behind [`Any`](crate::any::Any): every operation an
//! erased value needs is an object-safe method here, and the blanket
//! implementation derives all of them from [`Element`].

use core::any::Any as StdAny;
use core::fmt;

use crate::traits::Element;
use crate::types::TypeTag;

/// Object-safe operations on a type-erased value
pub trait AnyValue: StdAny {
    /// Runtime tag of the concrete type
    fn type_tag(&self) -> TypeTag;

    /// Deep copy behind a new box
    fn clone_boxed(&self) -> Box<dyn AnyValue>;

    /// Equality with another erased value; false when the types differ
    fn eq_dyn(&self, other: &dyn AnyValue) -> bool;

    /// Writes the indented representation
    fn write_dyn(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result;

    /// Upcast for downcasting to the concrete type
    fn as_std_any(&self) -> &dyn StdAny;

    /// Mutable upcast for downcasting to the concrete type
    fn as_std_any_mut(&mut self) -> &mut dyn StdAny;
}

impl<T: Element> AnyValue for T {
    fn type_tag(&self) -> TypeTag {
        T::TYPE_TAG
    }

    fn clone_boxed(&self) -> Box<dyn AnyValue> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn AnyValue) -> bool {
        other
            .as_std_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn write_dyn(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        self.write_indented(out, indent)
    }

    fn as_std_any(&self) -> &dyn StdAny {
        self
    }

    fn as_std_any_mut(&mut self) -> &mut dyn StdAny {
        self
    }
}
