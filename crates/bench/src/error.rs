use std::io;
use std::path::PathBuf;

use hybrid_sort::SortError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidValueRange { min: i64, max: i64 },

    #[error("invalid swap ratio {0}: must be a finite value in [0, 1]")]
    InvalidSwapRatio(f64),

    #[error("requested subarray of {requested} elements from a source of {available}")]
    SubarrayTooLong { requested: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {field}: {source}")]
    Threshold {
        field: &'static str,
        #[source]
        source: SortError,
    },

    #[error("trials must be at least 1")]
    NoTrials,

    #[error("size_step must be at least 1")]
    ZeroStep,

    #[error("size_start {start} is greater than size_end {end}")]
    EmptySizeRange { start: usize, end: usize },

    #[error("{field} = {size} exceeds generator base_len {base_len}")]
    SizeExceedsBase {
        field: &'static str,
        size: usize,
        base_len: usize,
    },

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("at least one trial is required")]
    NoTrials,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
