//! Dense row-major matrix storage
//!
//! [`Matrix`] owns a flat `Vec` of elements plus its shape. The element at
//! `(row, column)` always lives at offset `row * columns + column`, and the
//! vector length always equals `rows * columns`.

use gmat_core::validation::{flat_offset, validate_column, validate_element_count, validate_row};
use gmat_core::{DenseMatrix, DenseMatrixMut, MatrixError, MatrixIndex, Result};
use std::ops::{Index, IndexMut};

/// A two-dimensional, row-major, random-access container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<E> {
    pub(crate) data: Vec<E>,
    pub(crate) rows: usize,
    pub(crate) columns: usize,
}

impl<E> Default for Matrix<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> Matrix<E> {
    /// Create a 0x0 matrix
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            columns: 0,
        }
    }

    /// Create a matrix with every cell set to `value`
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`, like `vec!`.
    pub fn filled(value: E, rows: usize, columns: usize) -> Self
    where
        E: Clone,
    {
        let len = rows
            .checked_mul(columns)
            .unwrap_or_else(|| panic!("{}", MatrixError::SizeOverflow));
        Self {
            data: vec![value; len],
            rows,
            columns,
        }
    }

    /// Create a matrix from row-major elements
    ///
    /// Fails with [`MatrixError::ShapeError`] unless `elements.len()` equals
    /// `rows * columns`.
    pub fn from_vec(elements: Vec<E>, rows: usize, columns: usize) -> Result<Self> {
        validate_element_count(elements.len(), rows, columns)?;
        Ok(Self {
            data: elements,
            rows,
            columns,
        })
    }

    /// Create a matrix from a sequence of rows
    ///
    /// The column count is taken from the first row; every other row must
    /// have the same length. No rows gives a 0x0 matrix.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = E>,
    {
        let mut data = Vec::new();
        let mut row_count = 0;
        let mut columns = 0;

        for row in rows {
            let before = data.len();
            data.extend(row);
            let found = data.len() - before;

            if row_count == 0 {
                columns = found;
            } else if found != columns {
                return Err(MatrixError::ShapeError {
                    expected: columns,
                    found,
                });
            }
            row_count += 1;
        }

        Ok(Self {
            data,
            rows: row_count,
            columns,
        })
    }

    /// Create a matrix filled with `value`, with `diagonal` along the main diagonal
    ///
    /// For non-square shapes the diagonal stops at `min(rows, columns)`.
    pub fn filled_with_diagonal(value: E, diagonal: E, rows: usize, columns: usize) -> Self
    where
        E: Clone,
    {
        let mut matrix = Self::filled(value, rows, columns);
        for i in 0..rows.min(columns) {
            matrix.data[flat_offset(i, i, columns)] = diagonal.clone();
        }
        matrix
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Matrix dimensions as `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        DenseMatrix::dimensions(self)
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Whether `index` addresses an existing cell
    pub fn is_valid_index(&self, index: impl Into<MatrixIndex>) -> bool {
        DenseMatrix::is_valid_index(self, index.into())
    }

    /// All elements in row-major order
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// All elements in row-major order, mutably
    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// Consume the matrix, returning its row-major elements
    pub fn into_vec(self) -> Vec<E> {
        self.data
    }

    /// Get the element at `index`, given as a [`MatrixIndex`] or `(row, column)`
    pub fn get(&self, index: impl Into<MatrixIndex>) -> Result<&E> {
        self.get_element(index.into())
    }

    /// Get a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: impl Into<MatrixIndex>) -> Result<&mut E> {
        self.get_element_mut(index.into())
    }

    /// Overwrite the element at `index`, returning the previous value
    pub fn set(&mut self, index: impl Into<MatrixIndex>, value: E) -> Result<E> {
        self.set_element(index.into(), value)
    }

    /// Get a row as a contiguous slice
    pub fn row(&self, row: usize) -> Result<&[E]> {
        self.row_slice(row)
    }

    /// Get a row as a mutable slice
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [E]> {
        self.row_slice_mut(row)
    }

    /// Replace a row, returning the previous values
    ///
    /// `values` must hold exactly `column_count()` elements.
    pub fn set_row(&mut self, row: usize, values: Vec<E>) -> Result<Vec<E>> {
        validate_row(row, self.rows)?;
        if values.len() != self.columns {
            return Err(MatrixError::ShapeError {
                expected: self.columns,
                found: values.len(),
            });
        }

        let start = flat_offset(row, 0, self.columns);
        Ok(self.data.splice(start..start + self.columns, values).collect())
    }

    /// Iterate over the elements of a column, top to bottom
    pub fn column_iter(&self, column: usize) -> Result<impl DoubleEndedIterator<Item = &E> + '_> {
        validate_column(column, self.columns)?;
        Ok(self.data.iter().skip(column).step_by(self.columns))
    }

    /// Get a column as an owned vector
    pub fn column(&self, column: usize) -> Result<Vec<E>>
    where
        E: Clone,
    {
        Ok(self.column_iter(column)?.cloned().collect())
    }

    /// Replace a column, returning the previous values
    ///
    /// `values` must hold exactly `row_count()` elements.
    pub fn set_column(&mut self, column: usize, values: Vec<E>) -> Result<Vec<E>> {
        validate_column(column, self.columns)?;
        if values.len() != self.rows {
            return Err(MatrixError::ShapeError {
                expected: self.rows,
                found: values.len(),
            });
        }

        let columns = self.columns;
        Ok(values
            .into_iter()
            .enumerate()
            .map(|(row, value)| std::mem::replace(&mut self.data[flat_offset(row, column, columns)], value))
            .collect())
    }

    /// Apply `f` to every element, producing a matrix of the same shape
    pub fn map<S, F>(&self, f: F) -> Matrix<S>
    where
        F: FnMut(&E) -> S,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Apply `f` to every element together with its position
    pub fn map_indexed<S, F>(&self, mut f: F) -> Matrix<S>
    where
        F: FnMut(MatrixIndex, &E) -> S,
    {
        Matrix {
            data: self.indexed_iter().map(|(index, value)| f(index, value)).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }
}

impl<E, I: Into<MatrixIndex>> Index<I> for Matrix<E> {
    type Output = E;

    fn index(&self, index: I) -> &E {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<E, I: Into<MatrixIndex>> IndexMut<I> for Matrix<E> {
    fn index_mut(&mut self, index: I) -> &mut E {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<E, const R: usize, const C: usize> From<[[E; C]; R]> for Matrix<E> {
    fn from(rows: [[E; C]; R]) -> Self {
        Self {
            data: rows.into_iter().flatten().collect(),
            rows: R,
            columns: C,
        }
    }
}

impl<E> DenseMatrix for Matrix<E> {
    type Element = E;

    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn as_slice(&self) -> &[E] {
        &self.data
    }
}

impl<E> DenseMatrixMut for Matrix<E> {
    fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }
}
