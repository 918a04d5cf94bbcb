//! Parsing utilities for textual matrix indices
//!
//! Pure parsing functions with no allocation.

use crate::{MatrixError, MatrixIndex};
use core::num::{IntErrorKind, ParseIntError};

/// Parse an index string in the format "[row, column]", "row,column" or "row:column"
///
/// Surrounding brackets and whitespace around each component are optional.
pub fn parse_index(index_str: &str) -> Result<MatrixIndex, MatrixError> {
    let trimmed = index_str.trim();
    if trimmed.is_empty() {
        return Err(MatrixError::InvalidIndex);
    }

    let inner = match (trimmed.strip_prefix('['), trimmed.strip_suffix(']')) {
        (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
        (None, None) => trimmed,
        // Unbalanced brackets
        _ => return Err(MatrixError::InvalidIndex),
    };

    let separator = inner
        .find(|c| c == ',' || c == ':')
        .ok_or(MatrixError::InvalidIndex)?;

    let row = parse_usize(inner[..separator].trim())?;
    let column = parse_usize(inner[separator + 1..].trim())?;

    Ok(MatrixIndex::new(row, column))
}

/// Parse a usize from a string with error handling
fn parse_usize(s: &str) -> Result<usize, MatrixError> {
    if s.starts_with('+') {
        return Err(MatrixError::InvalidIndex);
    }
    s.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => MatrixError::SizeOverflow,
        _ => MatrixError::InvalidIndex,
    })
}
