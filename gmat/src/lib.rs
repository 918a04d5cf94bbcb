//! gmat - Dense Generic Matrices
//!
//! This library provides a two-dimensional, row-major, random-access
//! container over any element type, with structural edits and, for numeric
//! element types, cofactor-based linear algebra.
//!
//! ## Architecture
//!
//! gmat follows a definitions/implementation separation:
//!
//! - **gmat-core**: Index type, error taxonomy, element traits and shape validation (no allocation)
//! - **gmat**: The concrete [`Matrix`] with traversal, editing, algebra and encoding
//!
//! ## Quick Start
//!
//! ```rust
//! use gmat::{Matrix, MatrixIndex};
//!
//! fn example() -> gmat::Result<()> {
//!     let mut m = Matrix::from_vec(vec![1, 3, 5, 9, 1, 3, 1, 7, 4, 3, 9, 7, 5, 2, 0, 9], 4, 4)?;
//!     assert_eq!(m.determinant()?, -376);
//!
//!     m.remove_row(3)?;
//!     m.remove_column(3)?;
//!     assert_eq!(m[MatrixIndex::new(2, 2)], 9);
//!     assert_eq!(m.transform(&[1, 0, 0])?, vec![1, 1, 4]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Row-major storage**: `(row, column)` always maps to `row * columns + column`
//! - **Structural edits**: insert/remove rows and columns, replace row-major spans
//! - **Linear algebra**: transpose, sums, products, determinant, cofactor, adjugate, inverse
//! - **serde** (default): matrices encode as nested rows, indices as `[row, column]`
//! - **rand** (default): uniformly random valid positions
//!
//! Determinants use Laplace expansion and take O(n!) time; they are
//! intended for small matrices.

// Re-export core abstractions
pub use gmat_core::{
    // Core traits
    Additive, DenseMatrix, DenseMatrixMut, FloatingPoint, Numeric, SignedNumeric,
    // Positions
    MatrixIndex,
    // Error handling
    ErrorCategory, MatrixError, Result,
};

// Implementation modules
pub mod algebra;
pub mod cofactor;
pub mod display;
pub mod iter;
pub mod matrix;
pub mod mutation;
pub mod nested;
#[cfg(feature = "serde")]
pub mod codec;

// Public exports
pub use display::{MatrixDisplay, PrintConfig};
pub use iter::{Indices, Rows};
pub use matrix::Matrix;
pub use nested::to_nested;
