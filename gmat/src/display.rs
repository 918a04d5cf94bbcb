//! Human-readable rendering
//!
//! Matrices print one row per line:
//!
//! ```text
//! [[1, 2],
//!  [3, 4]]
//! ```
//!
//! [`PrintConfig`] controls decimal places and how many rows and columns are
//! shown before the rest is elided with `...`.

use crate::Matrix;
use std::fmt;

/// Configuration for rendering a matrix as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    /// Decimal places for floating-point elements; ignored by integers
    pub precision: Option<usize>,
    /// Maximum number of rows shown
    pub max_rows: Option<usize>,
    /// Maximum number of columns shown
    pub max_columns: Option<usize>,
}

impl PrintConfig {
    /// Set the number of decimal places
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Limit the number of rows shown
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Limit the number of columns shown
    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = Some(max_columns);
        self
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            precision: None,
            max_rows: Some(20),
            max_columns: Some(20),
        }
    }
}

/// A matrix paired with a [`PrintConfig`], implementing `Display`
#[derive(Debug)]
pub struct MatrixDisplay<'a, E> {
    matrix: &'a Matrix<E>,
    config: PrintConfig,
}

impl<E> Matrix<E> {
    /// Render with the given configuration
    pub fn display_with(&self, config: PrintConfig) -> MatrixDisplay<'_, E> {
        MatrixDisplay {
            matrix: self,
            config,
        }
    }
}

impl<E: fmt::Display> MatrixDisplay<'_, E> {
    fn write_value(&self, f: &mut fmt::Formatter<'_>, value: &E) -> fmt::Result {
        match self.config.precision {
            Some(precision) => write!(f, "{value:.precision$}"),
            None => write!(f, "{value}"),
        }
    }
}

impl<E: fmt::Display> fmt::Display for MatrixDisplay<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, columns) = self.matrix.dimensions();
        let shown_rows = self.config.max_rows.map_or(rows, |max| max.min(rows));
        let shown_columns = self.config.max_columns.map_or(columns, |max| max.min(columns));

        write!(f, "[")?;
        for (i, row) in self.matrix.rows().take(shown_rows).enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().take(shown_columns).enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                self.write_value(f, value)?;
            }
            if shown_columns < columns {
                write!(f, "{}...", if shown_columns > 0 { ", " } else { "" })?;
            }
            write!(f, "]")?;
        }
        if shown_rows < rows {
            write!(f, "{}...", if shown_rows > 0 { ",\n " } else { "" })?;
        }
        write!(f, "]")
    }
}

impl<E: fmt::Display> fmt::Display for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(PrintConfig::default()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "[[1, 2],\n [3, 4]]");
        assert_eq!(Matrix::<i32>::empty().to_string(), "[]");
    }

    #[test]
    fn test_precision() {
        let m = Matrix::from([[0.5, 1.0 / 3.0]]);
        let config = PrintConfig::default().with_precision(2);
        assert_eq!(m.display_with(config).to_string(), "[[0.50, 0.33]]");
    }

    #[test]
    fn test_elision() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let config = PrintConfig::default().with_max_rows(2).with_max_columns(1);
        assert_eq!(
            m.display_with(config).to_string(),
            "[[1, ...],\n [4, ...],\n ...]"
        );
        let config = PrintConfig::default().with_max_rows(0);
        assert_eq!(m.display_with(config).to_string(), "[...]");
    }
}
