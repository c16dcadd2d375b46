use thiserror::Error;

/// Errors raised while building or emitting a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The sampling range `[0, max)` is empty or unbounded.
    #[error("upper bound must be a finite positive number, got {0}")]
    InvalidBound(f64),

    /// A vector does not share the dimensionality of the first one.
    #[error("vector {index} has {found} components, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to serialize dataset")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write dataset")]
    Io(#[from] std::io::Error),
}
