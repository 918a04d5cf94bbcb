//! Conversion to and from nested row sequences
//!
//! The nested form is one `Vec` per row, in row order. Conversion out of a
//! matrix only needs the [`DenseMatrix`] read contract.

use crate::Matrix;
use gmat_core::{DenseMatrix, MatrixError};

/// Copy any dense matrix into nested rows
pub fn to_nested<M>(matrix: &M) -> Vec<Vec<M::Element>>
where
    M: DenseMatrix + ?Sized,
    M::Element: Clone,
{
    let columns = matrix.column_count();
    (0..matrix.row_count())
        .map(|row| matrix.as_slice()[row * columns..(row + 1) * columns].to_vec())
        .collect()
}

impl<E: Clone> Matrix<E> {
    /// The matrix as nested rows
    pub fn to_rows(&self) -> Vec<Vec<E>> {
        to_nested(self)
    }
}

impl<E> From<Matrix<E>> for Vec<Vec<E>> {
    fn from(matrix: Matrix<E>) -> Self {
        let columns = matrix.columns;
        let mut elements = matrix.data.into_iter();
        (0..matrix.rows)
            .map(|_| elements.by_ref().take(columns).collect())
            .collect()
    }
}

impl<E> TryFrom<Vec<Vec<E>>> for Matrix<E> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<E>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}
