//! Determinant, cofactor, adjugate and inverse by Laplace expansion
//!
//! The determinant expands recursively along row 0, so it runs in O(n!)
//! time with recursion depth `n`. It is meant for small matrices; no
//! decomposition-based fallback exists.

use crate::Matrix;
use gmat_core::validation::validate_square;
use gmat_core::{FloatingPoint, Result, SignedNumeric};
use log::debug;

impl<E: Clone> Matrix<E> {
    /// The submatrix with `row` and `column` removed
    pub fn minor(&self, row: usize, column: usize) -> Result<Matrix<E>> {
        let mut minor = self.clone();
        minor.remove_row(row)?;
        minor.remove_column(column)?;
        Ok(minor)
    }
}

impl<E: SignedNumeric> Matrix<E> {
    /// The determinant
    ///
    /// Fails with `NotSquare` or `EmptyMatrix`.
    pub fn determinant(&self) -> Result<E> {
        let size = validate_square(self.rows, self.columns)?;
        debug!("determinant of {size}x{size} matrix by cofactor expansion");
        self.expand()
    }

    /// The cofactor matrix: each entry is the signed determinant of its minor
    ///
    /// Fails with `NotSquare` or `EmptyMatrix`. The single cofactor of a
    /// 1x1 matrix is one.
    pub fn cofactor(&self) -> Result<Matrix<E>> {
        let size = validate_square(self.rows, self.columns)?;
        debug!("cofactor matrix of {size}x{size} matrix");

        let mut data = Vec::with_capacity(self.data.len());
        for index in self.indices() {
            let minor = self.minor(index.row, index.column)?;
            let value = if minor.is_empty() {
                E::one()
            } else {
                minor.expand()?
            };
            data.push(if (index.row + index.column) % 2 == 0 {
                value
            } else {
                -value
            });
        }

        Ok(Matrix {
            data,
            rows: size,
            columns: size,
        })
    }

    /// The adjugate: transpose of the cofactor matrix
    pub fn adjugate(&self) -> Result<Matrix<E>> {
        Ok(self.cofactor()?.transpose())
    }

    // Laplace expansion along row 0; the caller has checked for a non-empty square shape.
    fn expand(&self) -> Result<E> {
        if self.rows == 1 {
            return Ok(self.data[0].clone());
        }

        let mut sum = E::zero();
        let mut polarity = E::one();
        for (column, value) in self.data[..self.columns].iter().enumerate() {
            let minor = self.minor(0, column)?;
            sum = sum + polarity.clone() * value.clone() * minor.expand()?;
            polarity = -polarity;
        }
        Ok(sum)
    }
}

impl<E: FloatingPoint> Matrix<E> {
    /// The inverse, `adjugate * (1 / determinant)`
    ///
    /// A zero determinant is not reported as an error: the division follows
    /// floating-point semantics and yields infinite or NaN entries.
    pub fn inverse(&self) -> Result<Matrix<E>> {
        let determinant = self.determinant()?;
        debug!("inverse of {}x{} matrix from its adjugate", self.rows, self.columns);
        Ok(self.adjugate()?.scale(E::one() / determinant))
    }

    /// Whether both matrices have the same shape and every pair of entries
    /// differs by at most `epsilon`
    pub fn approx_eq(&self, other: &Matrix<E>, epsilon: E) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.approx_eq(*b, epsilon))
    }
}
