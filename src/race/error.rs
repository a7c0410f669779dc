use thiserror::Error;

/// Errors raised before a race starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    #[error("array size must be a positive integer, got {0:?}")]
    InvalidSize(String),

    #[error("array size must be greater than zero")]
    ZeroSize,

    #[error("array size {size} exceeds the configured maximum of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("no sort algorithms enabled")]
    NoAlgorithms,
}
