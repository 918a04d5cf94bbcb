//! Error types for matrix operations

/// Broad grouping of [`MatrixError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A position, row or column outside the current shape
    Addressing,
    /// Element counts that do not match the shape they are applied to
    Shape,
    /// Operands whose shapes are incompatible for the requested arithmetic
    Arithmetic,
    /// Malformed textual input
    Parse,
}

/// Errors that can occur during matrix operations
///
/// Out-of-range addressing is split by what was addressed: a single cell
/// reports [`MatrixError::IndexOutOfRange`], while whole-row and whole-column
/// operations (access, insertion, removal) report
/// [`MatrixError::RowOutOfRange`] or [`MatrixError::ColumnOutOfRange`] with
/// the bound that was exceeded. All three share
/// [`ErrorCategory::Addressing`], so callers matching on the category treat
/// them alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixError {
    /// Cell position outside `[0, rows) x [0, columns)`
    IndexOutOfRange { row: usize, column: usize },
    /// Row index outside the valid range for the operation
    RowOutOfRange { row: usize, rows: usize },
    /// Column index outside the valid range for the operation
    ColumnOutOfRange { column: usize, columns: usize },
    /// Element count does not match the required count
    ShapeError { expected: usize, found: usize },
    /// Operand shapes are incompatible, as `(rows, columns)` pairs
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Operation requires a square matrix
    NotSquare { rows: usize, columns: usize },
    /// Operation requires at least one element
    EmptyMatrix,
    /// `rows * columns` does not fit in `usize`
    SizeOverflow,
    /// Index string could not be parsed
    InvalidIndex,
}

impl MatrixError {
    /// The category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::IndexOutOfRange { .. }
            | MatrixError::RowOutOfRange { .. }
            | MatrixError::ColumnOutOfRange { .. } => ErrorCategory::Addressing,
            MatrixError::ShapeError { .. } | MatrixError::SizeOverflow => ErrorCategory::Shape,
            MatrixError::DimensionMismatch { .. }
            | MatrixError::NotSquare { .. }
            | MatrixError::EmptyMatrix => ErrorCategory::Arithmetic,
            MatrixError::InvalidIndex => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::IndexOutOfRange { row, column } => {
                write!(f, "Index [{row}, {column}] out of range")
            }
            MatrixError::RowOutOfRange { row, rows } => {
                write!(f, "Row {row} out of range for {rows} rows")
            }
            MatrixError::ColumnOutOfRange { column, columns } => {
                write!(f, "Column {column} out of range for {columns} columns")
            }
            MatrixError::ShapeError { expected, found } => {
                write!(f, "Expected {expected} elements, found {found}")
            }
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "Dimension mismatch: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::NotSquare { rows, columns } => {
                write!(f, "Matrix is not square ({rows}x{columns})")
            }
            MatrixError::EmptyMatrix => write!(f, "Matrix is empty"),
            MatrixError::SizeOverflow => write!(f, "Matrix size overflows usize"),
            MatrixError::InvalidIndex => write!(f, "Invalid matrix index"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
