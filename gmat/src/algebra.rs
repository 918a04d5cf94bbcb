//! Elementwise and product arithmetic
//!
//! Shape checks happen up front and return
//! [`MatrixError::DimensionMismatch`](gmat_core::MatrixError::DimensionMismatch)
//! instead of panicking, so the fallible operations are methods rather than
//! operator overloads. Scalar multiplication and negation cannot fail and are
//! also available as `*` and unary `-`.

use crate::iter::Indices;
use crate::Matrix;
use gmat_core::validation::{flat_offset, validate_same_shape};
use gmat_core::{Additive, MatrixError, Numeric, Result, SignedNumeric};
use std::ops::{Mul, Neg};

impl<E: Clone> Matrix<E> {
    /// The transpose: rows and columns swapped
    pub fn transpose(&self) -> Matrix<E> {
        let data = Indices::new(self.columns, self.rows)
            .map(|index| {
                let source = index.transpose();
                self.data[flat_offset(source.row, source.column, self.columns)].clone()
            })
            .collect();

        Matrix {
            data,
            rows: self.columns,
            columns: self.rows,
        }
    }
}

impl<E: Additive> Matrix<E> {
    fn zip_with(&self, rhs: &Matrix<E>, f: impl Fn(E, E) -> E) -> Result<Matrix<E>> {
        validate_same_shape(self.dimensions(), rhs.dimensions())?;
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
            rows: self.rows,
            columns: self.columns,
        })
    }

    /// Elementwise sum of two equally shaped matrices
    pub fn try_add(&self, rhs: &Matrix<E>) -> Result<Matrix<E>> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Elementwise difference of two equally shaped matrices
    pub fn try_sub(&self, rhs: &Matrix<E>) -> Result<Matrix<E>> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<E: Numeric> Matrix<E> {
    /// The `size x size` identity matrix
    pub fn identity(size: usize) -> Matrix<E> {
        Matrix::filled_with_diagonal(E::zero(), E::one(), size, size)
    }

    /// Multiply every element by `k`
    pub fn scale(&self, k: E) -> Matrix<E> {
        self.map(|value| value.clone() * k.clone())
    }

    /// Sum of elementwise products over the whole matrix
    ///
    /// Both operands must have the same shape. This is the Frobenius inner
    /// product, not a row or column vector dot product.
    pub fn dot(&self, rhs: &Matrix<E>) -> Result<E> {
        validate_same_shape(self.dimensions(), rhs.dimensions())?;
        Ok(sum_of_products(self.data.iter(), rhs.data.iter()))
    }

    /// Matrix-vector product
    ///
    /// `vector` must hold `column_count()` elements; the result holds
    /// `row_count()`.
    pub fn transform(&self, vector: &[E]) -> Result<Vec<E>> {
        if vector.len() != self.columns {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimensions(),
                right: (vector.len(), 1),
            });
        }

        Ok(self
            .rows()
            .map(|row| sum_of_products(row.iter(), vector.iter()))
            .collect())
    }

    /// Matrix product `self * rhs`
    ///
    /// Requires `self.column_count() == rhs.row_count()`; the result is
    /// `self.row_count() x rhs.column_count()`.
    pub fn multiply(&self, rhs: &Matrix<E>) -> Result<Matrix<E>> {
        if self.columns != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimensions(),
                right: rhs.dimensions(),
            });
        }

        let mut data = Vec::with_capacity(self.rows * rhs.columns);
        for row in self.rows() {
            for column in 0..rhs.columns {
                let column_values = rhs.data.iter().skip(column).step_by(rhs.columns);
                data.push(sum_of_products(row.iter(), column_values));
            }
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            columns: rhs.columns,
        })
    }
}

fn sum_of_products<'a, E: Numeric + 'a>(
    left: impl Iterator<Item = &'a E>,
    right: impl Iterator<Item = &'a E>,
) -> E {
    left.zip(right)
        .fold(E::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
}

impl<E: Numeric> Mul<E> for Matrix<E> {
    type Output = Matrix<E>;

    fn mul(self, k: E) -> Matrix<E> {
        self.scale(k)
    }
}

impl<E: Numeric> Mul<E> for &Matrix<E> {
    type Output = Matrix<E>;

    fn mul(self, k: E) -> Matrix<E> {
        self.scale(k)
    }
}

impl<E: SignedNumeric> Neg for Matrix<E> {
    type Output = Matrix<E>;

    fn neg(self) -> Matrix<E> {
        self.map(|value| -value.clone())
    }
}

impl<E: SignedNumeric> Neg for &Matrix<E> {
    type Output = Matrix<E>;

    fn neg(self) -> Matrix<E> {
        self.map(|value| -value.clone())
    }
}

// Scalar on the left: `k * matrix` multiplies as `k * element`.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|value| self * *value)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|value| self * *value)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
