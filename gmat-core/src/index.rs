//! Positional index for dense matrices
//!
//! A [`MatrixIndex`] is a plain `(row, column)` pair. It carries no reference
//! to any matrix; whether it addresses a real cell is decided by the matrix
//! it is used with.

use core::fmt;
use core::str::FromStr;

use crate::validation::parse_index;
use crate::MatrixError;

/// A logical `(row, column)` position
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatrixIndex {
    /// Row of the addressed element
    pub row: usize,
    /// Column of the addressed element
    pub column: usize,
}

impl MatrixIndex {
    /// Create a new index
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The index with row and column swapped
    pub const fn transpose(self) -> Self {
        Self {
            row: self.column,
            column: self.row,
        }
    }
}

impl From<(usize, usize)> for MatrixIndex {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl From<MatrixIndex> for (usize, usize) {
    fn from(index: MatrixIndex) -> Self {
        (index.row, index.column)
    }
}

impl fmt::Display for MatrixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

impl FromStr for MatrixIndex {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_index(s)
    }
}

// Encoded as the two-element sequence `[row, column]`.
#[cfg(feature = "serde")]
impl serde::Serialize for MatrixIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.row, self.column).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MatrixIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (row, column) = <(usize, usize)>::deserialize(deserializer)?;
        Ok(Self { row, column })
    }
}
