//! Core matrix access traits
//!
//! These traits describe the read/write contract of a dense row-major
//! matrix. Adapters such as nested-sequence conversion are written against
//! them rather than against a concrete storage type.

use crate::validation::{flat_offset, validate_position};
use crate::{MatrixError, MatrixIndex};

/// Read access to a dense row-major matrix
pub trait DenseMatrix {
    /// The element type stored in this matrix
    type Element;

    /// Number of rows
    fn row_count(&self) -> usize;

    /// Number of columns
    fn column_count(&self) -> usize;

    /// All elements in row-major order
    ///
    /// Implementations must return exactly `row_count() * column_count()`
    /// elements.
    fn as_slice(&self) -> &[Self::Element];

    /// Matrix dimensions as `(rows, columns)`
    fn dimensions(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Whether `index` addresses an existing cell
    fn is_valid_index(&self, index: MatrixIndex) -> bool {
        index.row < self.row_count() && index.column < self.column_count()
    }

    /// Get the element at `index`
    fn get_element(&self, index: MatrixIndex) -> Result<&Self::Element, MatrixError> {
        let offset = validate_position(index, self.row_count(), self.column_count())?;
        Ok(&self.as_slice()[offset])
    }

    /// Get a row as a contiguous slice
    fn row_slice(&self, row: usize) -> Result<&[Self::Element], MatrixError> {
        let (rows, columns) = self.dimensions();
        crate::validation::validate_row(row, rows)?;
        let start = flat_offset(row, 0, columns);
        Ok(&self.as_slice()[start..start + columns])
    }
}

/// Write access to a dense row-major matrix
pub trait DenseMatrixMut: DenseMatrix {
    /// All elements in row-major order, mutably
    fn as_mut_slice(&mut self) -> &mut [Self::Element];

    /// Get a mutable reference to the element at `index`
    fn get_element_mut(&mut self, index: MatrixIndex) -> Result<&mut Self::Element, MatrixError> {
        let offset = validate_position(index, self.row_count(), self.column_count())?;
        Ok(&mut self.as_mut_slice()[offset])
    }

    /// Get a row as a mutable slice
    fn row_slice_mut(&mut self, row: usize) -> Result<&mut [Self::Element], MatrixError> {
        let (rows, columns) = self.dimensions();
        crate::validation::validate_row(row, rows)?;
        let start = flat_offset(row, 0, columns);
        Ok(&mut self.as_mut_slice()[start..start + columns])
    }

    /// Overwrite the element at `index`, returning the previous value
    fn set_element(
        &mut self,
        index: MatrixIndex,
        value: Self::Element,
    ) -> Result<Self::Element, MatrixError> {
        Ok(core::mem::replace(self.get_element_mut(index)?, value))
    }
}
