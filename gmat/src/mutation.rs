//! Structural edits: inserting and removing whole rows and columns
//!
//! These are the only operations that change a matrix's shape after
//! construction. Every precondition is checked before the backing vector is
//! touched, so a failed call leaves the matrix exactly as it was.

use crate::Matrix;
use gmat_core::validation::{
    flat_offset, validate_column, validate_column_insertion, validate_range_bound, validate_row,
    validate_row_insertion,
};
use gmat_core::{MatrixError, MatrixIndex, Result};
use log::trace;
use std::ops::Range;

impl<E> Matrix<E> {
    /// Remove the row at `row`, returning its values
    pub fn remove_row(&mut self, row: usize) -> Result<Vec<E>> {
        validate_row(row, self.rows)?;

        let start = flat_offset(row, 0, self.columns);
        let removed = self.data.drain(start..start + self.columns).collect();
        self.rows -= 1;

        trace!("removed row {row}, now {}x{}", self.rows, self.columns);
        Ok(removed)
    }

    /// Remove the column at `column`, returning its values top to bottom
    pub fn remove_column(&mut self, column: usize) -> Result<Vec<E>> {
        validate_column(column, self.columns)?;

        // Last row first so earlier offsets stay valid
        let mut removed = Vec::with_capacity(self.rows);
        for row in (0..self.rows).rev() {
            removed.push(self.data.remove(flat_offset(row, column, self.columns)));
        }
        removed.reverse();
        self.columns -= 1;

        trace!("removed column {column}, now {}x{}", self.rows, self.columns);
        Ok(removed)
    }

    /// Insert `values` as a new row before `row`
    ///
    /// `values` must hold `column_count()` elements; `row` may equal
    /// `row_count()` to append.
    pub fn insert_row(&mut self, values: Vec<E>, row: usize) -> Result<()> {
        if values.len() != self.columns {
            return Err(MatrixError::ShapeError {
                expected: self.columns,
                found: values.len(),
            });
        }
        validate_row_insertion(row, self.rows)?;

        let start = flat_offset(row, 0, self.columns);
        self.data.splice(start..start, values);
        self.rows += 1;

        trace!("inserted row {row}, now {}x{}", self.rows, self.columns);
        Ok(())
    }

    /// Append `values` as the last row
    pub fn append_row(&mut self, values: Vec<E>) -> Result<()> {
        self.insert_row(values, self.rows)
    }

    /// Insert `values` as a new column before `column`
    ///
    /// `values` must hold `row_count()` elements; `column` may equal
    /// `column_count()` to append.
    pub fn insert_column(&mut self, values: Vec<E>, column: usize) -> Result<()> {
        if values.len() != self.rows {
            return Err(MatrixError::ShapeError {
                expected: self.rows,
                found: values.len(),
            });
        }
        validate_column_insertion(column, self.columns)?;

        // Rows above `row` already carry their new element.
        let widened = self.columns + 1;
        for (row, value) in values.into_iter().enumerate() {
            self.data.insert(flat_offset(row, column, widened), value);
        }
        self.columns = widened;

        trace!("inserted column {column}, now {}x{}", self.rows, self.columns);
        Ok(())
    }

    /// Append `values` as the last column
    pub fn append_column(&mut self, values: Vec<E>) -> Result<()> {
        self.insert_column(values, self.columns)
    }

    /// Replace the row-major span `range.start..range.end` with `values`
    ///
    /// Both bounds are positions; `range.end` may be the past-the-end
    /// sentinel [`Matrix::end_index`]. The span covers every position from
    /// `start` up to but excluding `end`, possibly crossing rows, and
    /// `values` must hold exactly that many elements. Returns the replaced
    /// values.
    pub fn replace_range(&mut self, range: Range<MatrixIndex>, values: Vec<E>) -> Result<Vec<E>> {
        let start = validate_range_bound(range.start, self.rows, self.columns)?;
        let end = validate_range_bound(range.end, self.rows, self.columns)?;
        if start > end {
            return Err(MatrixError::IndexOutOfRange {
                row: range.start.row,
                column: range.start.column,
            });
        }

        let spanned = end - start;
        if values.len() != spanned {
            return Err(MatrixError::ShapeError {
                expected: spanned,
                found: values.len(),
            });
        }

        trace!("replacing {spanned} elements from {}", range.start);
        Ok(self.data.splice(start..end, values).collect())
    }
}
