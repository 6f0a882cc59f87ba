//! Row-major rectangular matrix
//!
//! Rows and columns can be inserted or removed at any position. New cells are
//! filled with [`Element::create`]. The column count is stored explicitly so
//! that a matrix without rows still remembers its width.

use core::fmt;
use core::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::any::Any;
use crate::config::{DefaultConfig, GhoConfig};
use crate::containers::Vector;
use crate::error::{ContainerError, GhoResult, ParseError};
use crate::io::{CharSource, write_indent};
use crate::operand::{AsOperand, Coperand, Operand};
use crate::traits::printable::write_braced;
use crate::traits::readable::read_braced;
use crate::traits::{Element, Printable, Readable};
use crate::types::{TypeTag, Typed};

/// Dense 2-D matrix of elements
///
/// # Example
/// ```rust
/// use gho::prelude::*;
///
/// let mut grid = Matrix::<i32>::with_size(2, 2);
/// grid.set(0, 1, 5)?;
/// grid.add_col();
/// assert_eq!(grid.nb_col(), 3);
/// assert_eq!(*grid.at(0, 1)?, 5);
/// # Ok::<(), GhoError>(())
/// ```
pub struct Matrix<T, C: GhoConfig = DefaultConfig> {
    rows: Vec<Vec<T>>,
    nb_col: usize,
    _config: PhantomData<C>,
}

impl<T> Matrix<T, DefaultConfig> {
    /// Creates a 0×0 matrix with the default configuration
    pub fn new() -> Self {
        Self::with_config()
    }
}

impl<T, C: GhoConfig> Matrix<T, C> {
    /// Creates a 0×0 matrix
    pub fn with_config() -> Self {
        Self {
            rows: Vec::new(),
            nb_col: 0,
            _config: PhantomData,
        }
    }

    /// Removes every row and column
    pub fn reset(&mut self) {
        self.rows.clear();
        self.nb_col = 0;
    }

    /// Number of rows
    pub fn nb_row(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn nb_col(&self) -> usize {
        self.nb_col
    }

    /// Returns true if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.nb_row() == 0 || self.nb_col == 0
    }

    /// Element at row `i`, column `j`
    pub fn at(&self, i: usize, j: usize) -> GhoResult<&T> {
        self.check_cell("at", i, j)?;
        Ok(&self.rows[i][j])
    }

    /// Mutable element at row `i`, column `j`
    pub fn at_mut(&mut self, i: usize, j: usize) -> GhoResult<&mut T> {
        self.check_cell("at_mut", i, j)?;
        Ok(&mut self.rows[i][j])
    }

    /// Replaces the element at row `i`, column `j`
    pub fn set(&mut self, i: usize, j: usize, value: T) -> GhoResult<()> {
        *self.at_mut(i, j)? = value;
        Ok(())
    }

    /// Borrows row `i`
    pub fn row(&self, i: usize) -> GhoResult<&[T]> {
        self.rows
            .get(i)
            .map(Vec::as_slice)
            .ok_or_else(|| ContainerError::out_of_range("row", i, self.nb_row()).into())
    }

    /// Iterates over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Removes row `i`
    pub fn remove_row(&mut self, i: usize) -> GhoResult<()> {
        if self.nb_row() == 0 {
            return Err(ContainerError::Empty {
                operation: "remove_row",
            }
            .into());
        }
        if i >= self.nb_row() {
            return Err(ContainerError::out_of_range("remove_row", i, self.nb_row()).into());
        }
        self.rows.remove(i);
        Ok(())
    }

    /// Removes column `j`
    pub fn remove_col(&mut self, j: usize) -> GhoResult<()> {
        if self.nb_col == 0 {
            return Err(ContainerError::Empty {
                operation: "remove_col",
            }
            .into());
        }
        if j >= self.nb_col {
            return Err(ContainerError::out_of_range("remove_col", j, self.nb_col).into());
        }
        for row in &mut self.rows {
            row.remove(j);
        }
        self.nb_col -= 1;
        Ok(())
    }

    fn check_cell(&self, operation: &'static str, i: usize, j: usize) -> GhoResult<()> {
        if i >= self.nb_row() {
            return Err(ContainerError::out_of_range(operation, i, self.nb_row()).into());
        }
        if j >= self.nb_col {
            return Err(ContainerError::out_of_range(operation, j, self.nb_col).into());
        }
        Ok(())
    }
}

impl<T: Element, C: GhoConfig> Matrix<T, C> {
    /// Creates an `n`×`m` matrix of freshly created elements
    pub fn with_size(n: usize, m: usize) -> Self {
        Self::from_elem(n, m, &T::create())
    }

    /// Creates an `n`×`m` matrix of copies of `value`
    pub fn from_elem(n: usize, m: usize, value: &T) -> Self {
        Self {
            rows: vec![vec![value.clone(); m]; n],
            nb_col: m,
            _config: PhantomData,
        }
    }

    /// Appends a row at the bottom
    pub fn add_row(&mut self) {
        self.insert_row(self.nb_row());
    }

    /// Inserts a row before row `i`; `i == nb_row` appends
    pub fn add_row_before(&mut self, i: usize) -> GhoResult<()> {
        if i > self.nb_row() {
            return Err(ContainerError::out_of_range("add_row_before", i, self.nb_row()).into());
        }
        self.insert_row(i);
        Ok(())
    }

    /// Inserts a row after row `i`
    pub fn add_row_after(&mut self, i: usize) -> GhoResult<()> {
        if i >= self.nb_row() {
            return Err(ContainerError::out_of_range("add_row_after", i, self.nb_row()).into());
        }
        self.insert_row(i + 1);
        Ok(())
    }

    /// Appends a column on the right
    pub fn add_col(&mut self) {
        self.insert_col(self.nb_col);
    }

    /// Inserts a column before column `j`; `j == nb_col` appends
    pub fn add_col_before(&mut self, j: usize) -> GhoResult<()> {
        if j > self.nb_col {
            return Err(ContainerError::out_of_range("add_col_before", j, self.nb_col).into());
        }
        self.insert_col(j);
        Ok(())
    }

    /// Inserts a column after column `j`
    pub fn add_col_after(&mut self, j: usize) -> GhoResult<()> {
        if j >= self.nb_col {
            return Err(ContainerError::out_of_range("add_col_after", j, self.nb_col).into());
        }
        self.insert_col(j + 1);
        Ok(())
    }

    /// Copies row `i` into a vector
    pub fn row_vector(&self, i: usize) -> GhoResult<Vector<T, C>> {
        Ok(self.row(i)?.to_vec().into())
    }

    /// Wraps a copy of the matrix in an [`Any`]
    pub fn to_any(&self) -> Any {
        Any::from_value(self.clone())
    }

    fn insert_row(&mut self, i: usize) {
        tracing::trace!(row = i, nb_col = self.nb_col, "matrix inserts a row");
        self.rows.insert(i, vec![T::create(); self.nb_col]);
    }

    fn insert_col(&mut self, j: usize) {
        tracing::trace!(col = j, nb_row = self.nb_row(), "matrix inserts a column");
        for row in &mut self.rows {
            row.insert(j, T::create());
        }
        self.nb_col += 1;
    }
}

impl<T: AsOperand, C: GhoConfig> Matrix<T, C> {
    /// Mutable operand over the element at row `i`, column `j`
    pub fn operand_at(&mut self, i: usize, j: usize) -> GhoResult<Operand<'_, C>> {
        Ok(Operand::with_config(self.at_mut(i, j)?))
    }

    /// Read-only operand over the element at row `i`, column `j`
    pub fn coperand_at(&self, i: usize, j: usize) -> GhoResult<Coperand<'_, C>> {
        Ok(Coperand::with_config(self.at(i, j)?))
    }
}

impl<T, C: GhoConfig> Default for Matrix<T, C> {
    fn default() -> Self {
        Self::with_config()
    }
}

impl<T: Clone, C: GhoConfig> Clone for Matrix<T, C> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            nb_col: self.nb_col,
            _config: PhantomData,
        }
    }
}

impl<T: fmt::Debug, C: GhoConfig> fmt::Debug for Matrix<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("nb_col", &self.nb_col)
            .finish()
    }
}

/// Matrices without rows hold no cells and compare equal whatever their width
impl<T: PartialEq, C: GhoConfig> PartialEq for Matrix<T, C> {
    fn eq(&self, other: &Self) -> bool {
        if self.rows.is_empty() || other.rows.is_empty() {
            return self.rows.is_empty() && other.rows.is_empty();
        }
        self.nb_col == other.nb_col && self.rows == other.rows
    }
}

impl<T: Eq, C: GhoConfig> Eq for Matrix<T, C> {}

impl<T, C: GhoConfig> Typed for Matrix<T, C> {
    const TYPE_TAG: TypeTag = TypeTag::Matrix;
}

impl<T: Element, C: GhoConfig> Element for Matrix<T, C> {
    fn create() -> Self {
        Self::with_config()
    }
}

impl<T: Printable, C: GhoConfig> Printable for Matrix<T, C> {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_indent(out, indent)?;
        out.write_str("{\n")?;
        for (index, row) in self.rows.iter().enumerate() {
            write_indent(out, indent + C::MATRIX_ROW_INDENT)?;
            write_braced(out, row)?;
            if index + 1 != self.rows.len() {
                out.write_char(',')?;
            }
            out.write_char('\n')?;
        }
        write_indent(out, indent)?;
        out.write_char('}')
    }
}

impl<T: Readable, C: GhoConfig> Readable for Matrix<T, C> {
    fn read_from<S: CharSource + ?Sized>(source: &mut S) -> GhoResult<Self> {
        let mut rows: Vec<Vec<T>> = Vec::new();
        read_braced(source, |source| {
            let row = Vector::<T, C>::read_from(source)?;
            rows.push(row.into_iter().collect());
            Ok(())
        })?;

        let nb_col = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != nb_col)
        {
            tracing::debug!(row, found, expected = nb_col, "ragged matrix text");
            return Err(ParseError::InconsistentRowLength {
                row,
                expected: nb_col,
                found,
            }
            .into());
        }

        Ok(Self {
            rows,
            nb_col,
            _config: PhantomData,
        })
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, C: GhoConfig> Serialize for Matrix<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Matrix", 2)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("nb_col", &self.nb_col)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, C: GhoConfig> Deserialize<'de> for Matrix<T, C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Matrix")]
        struct Raw<T> {
            rows: Vec<Vec<T>>,
            nb_col: usize,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        if raw.rows.iter().any(|row| row.len() != raw.nb_col) {
            return Err(serde::de::Error::custom("matrix rows do not match nb_col"));
        }
        Ok(Self {
            rows: raw.rows,
            nb_col: raw.nb_col,
            _config: PhantomData,
        })
    }
}
