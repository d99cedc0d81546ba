use thiserror::Error;

/// Precondition and configuration failures of the sort entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid threshold {0}: must be at least 1")]
    InvalidThreshold(i64),

    #[error("malformed threshold {0:?}: expected a positive integer")]
    MalformedThreshold(String),

    #[error("range [{left}, {right}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("midpoint {mid} lies outside range [{left}, {right}]")]
    InvalidMidpoint {
        left: usize,
        mid: usize,
        right: usize,
    },
}
