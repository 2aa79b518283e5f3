//! Error types for isosurface-rs.

use thiserror::Error;

use crate::grid::Axis;

/// The main error type for isosurface mesh generation.
#[derive(Error, Debug)]
pub enum IsosurfaceError {
    /// One of the tick arrays has no entries.
    #[error("axis {axis} has no ticks")]
    EmptyAxis { axis: Axis },

    /// The scalar array does not match the product of the axis lengths.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An explicit slice location does not exist on its axis.
    #[error("slice index {index} on axis {axis} is out of range (axis has {len} ticks)")]
    SliceOutOfRange { axis: Axis, index: usize, len: usize },

    /// A vertex index does not refer to an emitted vertex.
    #[error("vertex index {index} out of range ({len} vertices)")]
    VertexOutOfRange { index: usize, len: usize },

    /// A fill fraction that is negative or not a number.
    #[error("invalid fill fraction {value}")]
    InvalidFill { value: f64 },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for isosurface operations.
pub type Result<T> = std::result::Result<T, IsosurfaceError>;
