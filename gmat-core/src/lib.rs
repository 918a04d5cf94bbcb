#![no_std]

//! gmat Core - Dense Matrix Definitions
//!
//! This crate provides the index type, error taxonomy, element capability
//! traits and pure shape validation shared by dense matrix implementations.
//! It performs no allocation and no I/O.

pub mod error;
pub mod index;
pub mod traits;
pub mod validation;

pub use error::*;
pub use index::MatrixIndex;
pub use traits::*;
