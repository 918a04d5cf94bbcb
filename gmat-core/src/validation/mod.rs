//! Shape validation utilities for dense matrices
//!
//! This module contains pure validation functions with no allocation.
//! All functions are arithmetic on shapes, positions and flat offsets.

pub mod bounds;
pub mod parsing;

pub use bounds::{
    flat_offset, position_of, validate_column, validate_column_insertion, validate_element_count,
    validate_position, validate_range_bound, validate_row, validate_row_insertion,
    validate_same_shape, validate_shape, validate_square,
};
pub use parsing::parse_index;
