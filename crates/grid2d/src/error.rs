//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid grid dimensions, invalid configuration, and strict out-of-bounds writes.
//! Lenient grid operations never produce an error; they return [`Option`] or do nothing.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid dimension: {name} must be finite and > 0, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}
