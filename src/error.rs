#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a search space is declared with zero dimensions.
    #[error("search space must have at least one dimension")]
    ZeroDimensions,

    /// Returned when a parameter vector does not match the problem's
    /// declared dimensionality.
    #[error("dimension mismatch: expected {expected} parameters, got {got}")]
    DimensionMismatch {
        /// The dimensionality declared by the problem.
        expected: usize,
        /// The length of the offending parameter vector.
        got: usize,
    },

    /// Returned when an archive is created with capacity zero.
    #[error("archive capacity must be at least 1")]
    InvalidCapacity,

    /// Returned when a registry lookup names a function that is not registered.
    #[error("unknown benchmark function '{name}'")]
    UnknownFunction {
        /// The name that failed to resolve.
        name: String,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
