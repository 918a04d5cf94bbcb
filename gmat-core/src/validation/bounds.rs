//! Shape, bounds and flat-offset arithmetic for row-major storage
//!
//! Pure functions over `(rows, columns)` shapes. Every flat offset in the
//! workspace is computed here, so the `row * columns + column` mapping lives
//! in one place.

use crate::{MatrixError, MatrixIndex};

/// Flat row-major offset of `(row, column)` in a matrix with `columns` columns
///
/// Performs no bounds checking.
#[inline]
pub const fn flat_offset(row: usize, column: usize, columns: usize) -> usize {
    row * columns + column
}

/// Inverse of [`flat_offset`]
///
/// `columns` must be non-zero.
#[inline]
pub const fn position_of(offset: usize, columns: usize) -> MatrixIndex {
    MatrixIndex::new(offset / columns, offset % columns)
}

/// Validate the element count for a `rows x columns` shape
///
/// Returns the required element count with overflow protection.
pub const fn validate_shape(rows: usize, columns: usize) -> Result<usize, MatrixError> {
    match rows.checked_mul(columns) {
        Some(count) => Ok(count),
        None => Err(MatrixError::SizeOverflow),
    }
}

/// Validate that `found` elements fill a `rows x columns` shape exactly
pub const fn validate_element_count(
    found: usize,
    rows: usize,
    columns: usize,
) -> Result<usize, MatrixError> {
    let expected = match validate_shape(rows, columns) {
        Ok(expected) => expected,
        Err(e) => return Err(e),
    };

    if found != expected {
        return Err(MatrixError::ShapeError { expected, found });
    }

    Ok(expected)
}

/// Validate a cell position and return its flat offset
pub const fn validate_position(
    index: MatrixIndex,
    rows: usize,
    columns: usize,
) -> Result<usize, MatrixError> {
    if index.row >= rows || index.column >= columns {
        return Err(MatrixError::IndexOutOfRange {
            row: index.row,
            column: index.column,
        });
    }

    Ok(flat_offset(index.row, index.column, columns))
}

/// Validate a row index for reading, replacing or removing
pub const fn validate_row(row: usize, rows: usize) -> Result<(), MatrixError> {
    if row >= rows {
        return Err(MatrixError::RowOutOfRange { row, rows });
    }
    Ok(())
}

/// Validate a column index for reading, replacing or removing
pub const fn validate_column(column: usize, columns: usize) -> Result<(), MatrixError> {
    if column >= columns {
        return Err(MatrixError::ColumnOutOfRange { column, columns });
    }
    Ok(())
}

/// Validate a row insertion point; `rows` itself (append) is allowed
pub const fn validate_row_insertion(row: usize, rows: usize) -> Result<(), MatrixError> {
    if row > rows {
        return Err(MatrixError::RowOutOfRange { row, rows });
    }
    Ok(())
}

/// Validate a column insertion point; `columns` itself (append) is allowed
pub const fn validate_column_insertion(column: usize, columns: usize) -> Result<(), MatrixError> {
    if column > columns {
        return Err(MatrixError::ColumnOutOfRange { column, columns });
    }
    Ok(())
}

/// Validate a range bound and return its flat offset
///
/// Accepts any valid cell position plus the past-the-end sentinel
/// `(rows, 0)`, which is `(0, 0)` for shapes without elements.
pub const fn validate_range_bound(
    index: MatrixIndex,
    rows: usize,
    columns: usize,
) -> Result<usize, MatrixError> {
    if index.column == 0 && (index.row == rows || (index.row == 0 && columns == 0)) {
        return Ok(flat_offset(rows, 0, columns));
    }
    validate_position(index, rows, columns)
}

/// Validate that two shapes are identical
pub const fn validate_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatrixError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Validate a square, non-empty shape
pub const fn validate_square(rows: usize, columns: usize) -> Result<usize, MatrixError> {
    if rows != columns {
        return Err(MatrixError::NotSquare { rows, columns });
    }
    if rows == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_offset_round_trip() {
        for columns in 1..5 {
            for offset in 0..20 {
                let index = position_of(offset, columns);
                assert!(index.column < columns);
                assert_eq!(flat_offset(index.row, index.column, columns), offset);
            }
        }
    }

    #[test]
    fn test_validate_shape() {
        assert_eq!(validate_shape(3, 4), Ok(12));
        assert_eq!(validate_shape(0, 7), Ok(0));
        assert_eq!(validate_shape(usize::MAX, 2), Err(MatrixError::SizeOverflow));

        assert_eq!(validate_element_count(6, 2, 3), Ok(6));
        assert_eq!(
            validate_element_count(5, 2, 3),
            Err(MatrixError::ShapeError {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn test_validate_position() {
        assert_eq!(validate_position(MatrixIndex::new(1, 2), 2, 3), Ok(5));
        assert_eq!(
            validate_position(MatrixIndex::new(2, 0), 2, 3),
            Err(MatrixError::IndexOutOfRange { row: 2, column: 0 })
        );
        assert_eq!(
            validate_position(MatrixIndex::new(0, 3), 2, 3),
            Err(MatrixError::IndexOutOfRange { row: 0, column: 3 })
        );
        // Nothing is addressable in an empty shape
        assert!(validate_position(MatrixIndex::new(0, 0), 0, 0).is_err());
    }

    #[test]
    fn test_insertion_points() {
        assert_eq!(validate_row_insertion(2, 2), Ok(()));
        assert_eq!(
            validate_row_insertion(3, 2),
            Err(MatrixError::RowOutOfRange { row: 3, rows: 2 })
        );
        assert_eq!(validate_column_insertion(0, 0), Ok(()));
        assert_eq!(
            validate_column(0, 0),
            Err(MatrixError::ColumnOutOfRange {
                column: 0,
                columns: 0
            })
        );
    }

    #[test]
    fn test_range_bound() {
        assert_eq!(validate_range_bound(MatrixIndex::new(3, 0), 3, 2), Ok(6));
        assert_eq!(validate_range_bound(MatrixIndex::new(2, 1), 3, 2), Ok(5));
        assert!(validate_range_bound(MatrixIndex::new(3, 1), 3, 2).is_err());
        assert_eq!(validate_range_bound(MatrixIndex::new(0, 0), 4, 0), Ok(0));
        assert_eq!(validate_range_bound(MatrixIndex::new(0, 0), 0, 4), Ok(0));
        assert!(validate_range_bound(MatrixIndex::new(1, 0), 4, 0).is_err());
    }

    #[test]
    fn test_validate_square() {
        assert_eq!(validate_square(3, 3), Ok(3));
        assert_eq!(
            validate_square(2, 3),
            Err(MatrixError::NotSquare {
                rows: 2,
                columns: 3
            })
        );
        assert_eq!(validate_square(0, 0), Err(MatrixError::EmptyMatrix));
    }
}
