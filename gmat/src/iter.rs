//! Row-major traversal
//!
//! Positions advance column by column and wrap to the next row. The
//! past-the-end position is `(row_count, 0)`, which is what
//! [`Matrix::index_after`] returns for the last element, so every traversal
//! terminates on the same sentinel. A matrix without elements ends where it
//! starts, at `(0, 0)`.

use crate::Matrix;
use gmat_core::validation::position_of;
use gmat_core::MatrixIndex;
use std::iter::FusedIterator;

impl<E> Matrix<E> {
    /// Position of the first element, `(0, 0)`
    pub fn start_index(&self) -> MatrixIndex {
        MatrixIndex::new(0, 0)
    }

    /// Past-the-end position, `(row_count, 0)`
    ///
    /// Equal to [`Matrix::start_index`] when the matrix has no elements,
    /// including `n x 0` shapes.
    pub fn end_index(&self) -> MatrixIndex {
        if self.is_empty() {
            return self.start_index();
        }
        MatrixIndex::new(self.rows, 0)
    }

    /// Position of the last element, `None` when the matrix is empty
    pub fn last_index(&self) -> Option<MatrixIndex> {
        if self.is_empty() {
            return None;
        }
        Some(MatrixIndex::new(self.rows - 1, self.columns - 1))
    }

    /// The position following `index` in row-major order
    ///
    /// Saturates instead of overflowing for positions near `usize::MAX`.
    pub fn index_after(&self, index: MatrixIndex) -> MatrixIndex {
        match index.column.checked_add(1) {
            Some(column) if column < self.columns => MatrixIndex::new(index.row, column),
            _ => MatrixIndex::new(index.row.saturating_add(1), 0),
        }
    }

    /// The position preceding `index` in row-major order
    ///
    /// Returns `None` for `(0, 0)`.
    pub fn index_before(&self, index: MatrixIndex) -> Option<MatrixIndex> {
        if index.column == 0 {
            Some(MatrixIndex::new(
                index.row.checked_sub(1)?,
                self.columns.checked_sub(1)?,
            ))
        } else {
            Some(MatrixIndex::new(index.row, index.column - 1))
        }
    }

    /// A uniformly random valid position, `None` if either dimension is zero
    #[cfg(feature = "rand")]
    pub fn random_index(&self) -> Option<MatrixIndex> {
        self.random_index_with(&mut rand::thread_rng())
    }

    /// [`Matrix::random_index`] drawing from the given generator
    #[cfg(feature = "rand")]
    pub fn random_index_with<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<MatrixIndex> {
        if self.rows == 0 || self.columns == 0 {
            return None;
        }
        let row = rng.gen_range(0..self.rows);
        let column = rng.gen_range(0..self.columns);
        Some(MatrixIndex::new(row, column))
    }

    /// Iterate over all valid positions in row-major order
    pub fn indices(&self) -> Indices {
        Indices::new(self.rows, self.columns)
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    /// Iterate mutably over elements in row-major order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.data.iter_mut()
    }

    /// Iterate over `(position, element)` pairs in row-major order
    pub fn indexed_iter(&self) -> std::iter::Zip<Indices, std::slice::Iter<'_, E>> {
        self.indices().zip(self.data.iter())
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> Rows<'_, E> {
        Rows {
            matrix: self,
            front: 0,
            back: self.rows,
        }
    }
}

/// Row-major iterator over the positions of a `rows x columns` shape
#[derive(Debug, Clone)]
pub struct Indices {
    front: usize,
    back: usize,
    columns: usize,
}

impl Indices {
    /// Positions of a `rows x columns` shape
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            front: 0,
            back: rows * columns,
            columns,
        }
    }
}

impl Iterator for Indices {
    type Item = MatrixIndex;

    fn next(&mut self) -> Option<MatrixIndex> {
        if self.front >= self.back {
            return None;
        }
        let index = position_of(self.front, self.columns);
        self.front += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<MatrixIndex> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(position_of(self.back, self.columns))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

/// Iterator over the rows of a matrix
#[derive(Debug, Clone)]
pub struct Rows<'a, E> {
    matrix: &'a Matrix<E>,
    front: usize,
    back: usize,
}

impl<'a, E> Rows<'a, E> {
    fn slice(&self, row: usize) -> &'a [E] {
        let columns = self.matrix.columns;
        &self.matrix.data[row * columns..(row + 1) * columns]
    }
}

impl<'a, E> Iterator for Rows<'a, E> {
    type Item = &'a [E];

    fn next(&mut self) -> Option<&'a [E]> {
        if self.front >= self.back {
            return None;
        }
        let row = self.slice(self.front);
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E> DoubleEndedIterator for Rows<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slice(self.back))
    }
}

impl<E> ExactSizeIterator for Rows<'_, E> {}

impl<E> FusedIterator for Rows<'_, E> {}

impl<'a, E> IntoIterator for &'a Matrix<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, E> IntoIterator for &'a mut Matrix<E> {
    type Item = &'a mut E;
    type IntoIter = std::slice::IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<E> IntoIterator for Matrix<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
