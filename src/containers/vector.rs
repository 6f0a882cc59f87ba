//! Growable vector with explicit capacity management
//!
//! The logical capacity is tracked separately from the backing allocation so
//! that growth follows the configured policy: a fresh vector starts at
//! `C::VECTOR_INITIAL_CAPACITY` slots and a full vector grows by
//! `C::VECTOR_GROWTH_STEP`. Capacity never shrinks.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::any::Any;
use crate::config::{DefaultConfig, GhoConfig};
use crate::error::{ContainerError, GhoResult};
use crate::io::{CharSource, write_indent};
use crate::operand::{AsOperand, Coperand, Operand};
use crate::traits::printable::write_braced;
use crate::traits::readable::read_braced;
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

/// Growable vector of elements
///
/// # Type Parameters
/// - `T`: The element type
/// - `C`: Configuration that sets the growth policy
///
/// # Example
/// ```rust
/// use gho::prelude::*;
///
/// let mut values = Vector::<i32>::new();
/// values.add(3);
/// values.add(1);
/// values.insert(2, 1)?;
/// assert_eq!(values.to_gho_string(), "{ 3, 2, 1 }");
///
/// values.sort();
/// assert_eq!(values.find(&2), Some(1));
/// # Ok::<(), GhoError>(())
/// ```
pub struct Vector<T, C: GhoConfig = DefaultConfig> {
    items: Vec<T>,
    capacity: usize,
    _config: PhantomData<C>,
}

impl<T> Vector<T, DefaultConfig> {
    /// Creates an empty vector with the default configuration
    pub fn new() -> Self {
        Self::with_config()
    }
}

impl<T, C: GhoConfig> Vector<T, C> {
    /// Creates an empty vector with capacity `C::VECTOR_INITIAL_CAPACITY`
    pub fn with_config() -> Self {
        Self {
            items: Vec::with_capacity(C::VECTOR_INITIAL_CAPACITY),
            capacity: C::VECTOR_INITIAL_CAPACITY,
            _config: PhantomData,
        }
    }

    /// Removes every element, keeping the capacity
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Number of elements the vector holds before growing
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the vector holds no element
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Raises the capacity to `n` if it is smaller
    pub fn reserve(&mut self, n: usize) {
        if n > self.capacity {
            self.items.reserve(n - self.items.len());
            self.capacity = n;
        }
    }

    /// Element at position `i`
    pub fn at(&self, i: usize) -> GhoResult<&T> {
        let size = self.size();
        self.items
            .get(i)
            .ok_or_else(|| ContainerError::out_of_range("at", i, size).into())
    }

    /// Mutable element at position `i`
    pub fn at_mut(&mut self, i: usize) -> GhoResult<&mut T> {
        let size = self.size();
        self.items
            .get_mut(i)
            .ok_or_else(|| ContainerError::out_of_range("at_mut", i, size).into())
    }

    /// Replaces the element at position `i`
    pub fn set(&mut self, i: usize, value: T) -> GhoResult<()> {
        let size = self.size();
        let slot = self
            .items
            .get_mut(i)
            .ok_or(ContainerError::out_of_range("set", i, size))?;
        *slot = value;
        Ok(())
    }

    /// Appends an element, growing by `C::VECTOR_GROWTH_STEP` when full
    pub fn add(&mut self, value: T) {
        self.grow_if_full();
        self.items.push(value);
    }

    /// Inserts an element before position `i`; `i == size` appends
    pub fn insert(&mut self, value: T, i: usize) -> GhoResult<()> {
        if i > self.size() {
            return Err(ContainerError::out_of_range("insert", i, self.size()).into());
        }
        self.grow_if_full();
        self.items.insert(i, value);
        Ok(())
    }

    /// Removes and returns the element at position `i`
    pub fn remove(&mut self, i: usize) -> GhoResult<T> {
        if self.is_empty() {
            return Err(ContainerError::Empty { operation: "remove" }.into());
        }
        if i >= self.size() {
            return Err(ContainerError::out_of_range("remove", i, self.size()).into());
        }
        Ok(self.items.remove(i))
    }

    /// Removes and returns the last element
    pub fn remove_last(&mut self) -> GhoResult<T> {
        self.items.pop().ok_or_else(|| {
            ContainerError::Empty {
                operation: "remove_last",
            }
            .into()
        })
    }

    /// Iterates over the elements
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably over the elements
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Borrows the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn grow_if_full(&mut self) {
        if self.items.len() >= self.capacity {
            let grown = self.capacity + C::VECTOR_GROWTH_STEP;
            tracing::trace!(from = self.capacity, to = grown, "vector capacity grows");
            self.reserve(grown);
        }
    }
}

impl<T: Element, C: GhoConfig> Vector<T, C> {
    /// Creates `n` freshly created elements, with capacity `n`
    pub fn with_len(n: usize) -> Self {
        Self::from_elem(n, &T::create())
    }

    /// Creates `n` copies of `value`, with capacity `n`
    pub fn from_elem(n: usize, value: &T) -> Self {
        Self {
            items: vec![value.clone(); n],
            capacity: n,
            _config: PhantomData,
        }
    }

    /// Grows with created elements or truncates to `n` elements
    pub fn resize(&mut self, n: usize) {
        self.reserve(n);
        self.items.resize_with(n, T::create);
    }

    /// Appends copies of every element of `other`
    pub fn add_vector(&mut self, other: &Vector<T, impl GhoConfig>) {
        let needed = self.size() + other.size();
        if needed > self.capacity {
            self.reserve(needed);
        }
        self.items.extend(other.items.iter().cloned());
    }

    /// Compares the first `n` elements
    ///
    /// False when either vector holds fewer than `n` elements.
    pub fn equal_n(&self, other: &Self, n: usize) -> bool {
        if self.size() < n || other.size() < n {
            return false;
        }
        self.items[..n] == other.items[..n]
    }

    /// Position of the first element equal to `value`
    pub fn find(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Wraps a copy of the vector in an [`Any`]
    pub fn to_any(&self) -> Any {
        Any::from_value(self.clone())
    }
}

impl<T: Ord, C: GhoConfig> Vector<T, C> {
    /// Sorts the elements in ascending order
    pub fn sort(&mut self) {
        self.items.sort();
    }

    /// Lexicographic comparison, returning -1, 0 or 1
    pub fn compare(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl<T: AsOperand, C: GhoConfig> Vector<T, C> {
    /// Mutable operand over the element at position `i`
    pub fn operand_at(&mut self, i: usize) -> GhoResult<Operand<'_, C>> {
        Ok(Operand::with_config(self.at_mut(i)?))
    }

    /// Read-only operand over the element at position `i`
    pub fn coperand_at(&self, i: usize) -> GhoResult<Coperand<'_, C>> {
        Ok(Coperand::with_config(self.at(i)?))
    }
}

impl<T, C: GhoConfig> Default for Vector<T, C> {
    fn default() -> Self {
        Self::with_config()
    }
}

impl<T: Clone, C: GhoConfig> Clone for Vector<T, C> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            capacity: self.capacity,
            _config: PhantomData,
        }
    }
}

impl<T: fmt::Debug, C: GhoConfig> fmt::Debug for Vector<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Equality compares elements only, not capacity
impl<T: PartialEq, C: GhoConfig> PartialEq for Vector<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, C: GhoConfig> Eq for Vector<T, C> {}

impl<T: Ord, C: GhoConfig> PartialOrd for Vector<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic, then shorter first
impl<T: Ord, C: GhoConfig> Ord for Vector<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.cmp(&other.items)
    }
}

impl<T, C: GhoConfig> From<Vec<T>> for Vector<T, C> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len().max(C::VECTOR_INITIAL_CAPACITY);
        Self {
            items,
            capacity,
            _config: PhantomData,
        }
    }
}

impl<T, C: GhoConfig> FromIterator<T> for Vector<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T, C: GhoConfig> IntoIterator for Vector<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C: GhoConfig> IntoIterator for &'a Vector<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C: GhoConfig> Typed for Vector<T, C> {
    const TYPE_TAG: TypeTag = TypeTag::Vector;
}

impl<T: Element, C: GhoConfig> Element for Vector<T, C> {
    fn create() -> Self {
        Self::with_config()
    }
}

impl<T: Printable, C: GhoConfig> Printable for Vector<T, C> {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_indent(out, indent)?;
        write_braced(out, &self.items)
    }
}

impl<T: Readable, C: GhoConfig> Readable for Vector<T, C> {
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        let mut vector = Self::with_config();
        read_braced(source, |source| {
            vector.add(T::read_from(source)?);
            Ok(())
        })?;
        Ok(vector)
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, C: GhoConfig> Serialize for Vector<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Vector", 2)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, C: GhoConfig> Deserialize<'de> for Vector<T, C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Vector")]
        struct Raw<T> {
            items: Vec<T>,
            capacity: usize,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        if raw.capacity < raw.items.len() {
            return Err(serde::de::Error::custom("capacity is smaller than the element count"));
        }
        Ok(Self {
            items: raw.items,
            capacity: raw.capacity,
            _config: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::CompactConfig;
    use crate::error::GhoError;
    use crate::string::GhoString;

    #[test]
    fn test_creation() {
        let empty = Vector::<i32>::new();
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.capacity(), 10);
        assert!(empty.is_empty());

        let filled = Vector::<char>::with_len(3);
        assert_eq!(filled.as_slice(), &['a', 'a', 'a']);
        assert_eq!(filled.capacity(), 3);

        let copies = Vector::<i64>::from_elem(2, &7);
        assert_eq!(copies.as_slice(), &[7, 7]);
    }

    #[test]
    fn test_growth_steps() {
        let mut vector = Vector::<i32>::new();
        for value in 0..10 {
            vector.add(value);
        }
        assert_eq!(vector.capacity(), 10);
        vector.add(10);
        assert_eq!(vector.capacity(), 20);

        let mut compact = Vector::<i32, CompactConfig>::with_config();
        compact.add(1);
        compact.add(2);
        assert_eq!(compact.capacity(), 2);
    }

    #[test]
    fn test_reserve_never_shrinks() {
        let mut vector = Vector::<i32>::new();
        vector.reserve(4);
        assert_eq!(vector.capacity(), 10);
        vector.reserve(32);
        assert_eq!(vector.capacity(), 32);
        vector.resize(2);
        assert_eq!(vector.size(), 2);
        assert_eq!(vector.capacity(), 32);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut vector: Vector<i32> = vec![1, 3].into();
        vector.insert(2, 1).unwrap();
        vector.insert(4, 3).unwrap();
        assert_eq!(vector.as_slice(), &[1, 2, 3, 4]);
        assert!(vector.insert(9, 9).is_err());

        assert_eq!(vector.remove(0).unwrap(), 1);
        assert_eq!(vector.remove_last().unwrap(), 4);
        assert_eq!(
            vector.remove(5),
            Err(GhoError::Container(ContainerError::IndexOutOfRange {
                operation: "remove",
                index: 5,
                size: 2
            }))
        );

        let mut empty = Vector::<i32>::new();
        assert_eq!(
            empty.remove(0),
            Err(GhoError::Container(ContainerError::Empty { operation: "remove" }))
        );
    }

    #[test]
    fn test_add_vector_reserves() {
        let mut a = Vector::<i32>::from_elem(8, &1);
        let b = Vector::<i32>::from_elem(8, &2);
        a.add_vector(&b);
        assert_eq!(a.size(), 16);
        assert_eq!(a.capacity(), 16);
    }

    #[test]
    fn test_equality_and_ordering() {
        let a: Vector<i32> = vec![1, 2, 3].into();
        let b: Vector<i32> = vec![1, 2, 4].into();
        let prefix: Vector<i32> = vec![1, 2].into();

        assert!(a.equal_n(&b, 2));
        assert!(!a.equal_n(&b, 3));
        assert!(!a.equal_n(&prefix, 3));
        assert_eq!(a.compare(&b), -1);
        assert_eq!(prefix.compare(&a), -1);
        assert_eq!(a.compare(&a.clone()), 0);
    }

    #[test]
    fn test_print_format() {
        let vector: Vector<i32> = vec![1, 2, 3].into();
        let mut out = String::new();
        vector.sprinti(&mut out, 2);
        assert_eq!(out, "  { 1, 2, 3 }");
        assert_eq!(Vector::<i32>::new().to_gho_string(), "{ }");
    }

    #[test]
    fn test_read_round_trip() {
        let vector: Vector<GhoString> =
            vec![GhoString::from("x"), GhoString::from("yz")].into();
        let text = vector.to_gho_string();
        let (read, rest) = Vector::<GhoString>::sread(text.as_str()).unwrap();
        assert_eq!(read, vector);
        assert!(rest.is_empty());

        let (read, _) = Vector::<i32>::sread("{1 2,3}").unwrap();
        assert_eq!(read.as_slice(), &[1, 2, 3]);
        assert!(Vector::<i32>::sread("{ 1, 2").is_err());
    }

    #[test]
    fn test_operand_over_element() {
        let mut vector: Vector<i64> = vec![5, 6].into();
        vector.operand_at(1).unwrap().add_i64(4).unwrap();
        assert_eq!(vector.as_slice(), &[5, 10]);
        assert!(vector.coperand_at(1).unwrap().equal_i64(10).unwrap());
        assert!(vector.operand_at(2).is_err());
    }
}
