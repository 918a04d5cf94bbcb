//! Abstract interfaces for dense matrices
//!
//! This module defines the element capability traits and the access
//! contract shared by matrix implementations.

pub mod element;
pub mod matrix;

pub use element::{Additive, FloatingPoint, Numeric, SignedNumeric};
pub use matrix::{DenseMatrix, DenseMatrixMut};
