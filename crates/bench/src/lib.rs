//! Measurement harness for the hybrid sort.
//!
//! Generates random, reverse-sorted and nearly-sorted inputs, times
//! [`hybrid_sort`] variants over repeated trials, and reports the median of
//! each configuration as CSV tables.

mod analysis;
mod config;
mod error;
mod generator;
mod report;
mod stats;
mod sweep;
mod trial;

pub use analysis::{AnalysisReport, run_analysis};
pub use config::{AnalysisConfig, GeneratorConfig, OutputConfig, SweepConfig};
pub use error::{ConfigError, GeneratorError, HarnessError};
pub use generator::{ALL_SHAPES, ArrayGenerator, InputShape, RNG_SEED, default_rng};
pub use report::{SIZE_HEADER, THRESHOLD_HEADER, write_table};
pub use stats::{TrialSummary, as_micros, median};
pub use sweep::{BaseArrays, BenchmarkRecord, measure, size_sweep, threshold_sweep};
pub use trial::{DEFAULT_TRIALS, run_trials};
