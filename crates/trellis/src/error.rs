//! Error types for the component layer.
//!
//! Nothing in this layer performs I/O; errors exist to keep invariants
//! checkable at the seams (names, geometry) and are always locally
//! recoverable.

use thiserror::Error;

/// Result type used throughout trellis.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the component layer.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A geometry or layout computation failed.
    #[error("geometry: {0}")]
    Geometry(String),
    /// A value failed validation.
    #[error("invalid: {0}")]
    Invalid(String),
}
