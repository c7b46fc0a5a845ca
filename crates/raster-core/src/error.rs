//! Errors reported by [`Grid`](crate::Grid) construction and accessors.
//!
//! These signal misuse (bad dimensions, out-of-range access, missing
//! arguments). Traversals never produce them: "nothing to do" outcomes are
//! reported through sentinel return values instead.

/// Precondition violations on grid operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Width or height was zero or negative.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
    /// A bulk buffer was empty, had empty columns, or was ragged.
    #[error("invalid buffer shape: {0}")]
    InvalidShape(String),
    /// Direct coordinate access outside `[0, width) x [0, height)`.
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// A resize factor was not strictly positive.
    #[error("scale factors must be positive, got ({sx}, {sy})")]
    InvalidScale { sx: f64, sy: f64 },
    /// A line or rectangle endpoint was absent.
    #[error("missing endpoint")]
    NullEndpoint,
    /// A circle center was absent.
    #[error("missing center")]
    NullCenter,
}

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
