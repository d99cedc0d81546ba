//! Analysis configuration, loadable from an `analysis.toml` file.
//!
//! Every section and field has a default, so a partial file only overrides
//! what it names. Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use hybrid_sort::{DEFAULT_THRESHOLD, Threshold};
use serde::{Deserialize, Serialize};

use crate::generator::{
    ArrayGenerator, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_SWAP_RATIO, RNG_SEED,
};
use crate::trial::DEFAULT_TRIALS;
use crate::{ConfigError, GeneratorError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Shape of the base arrays every sweep draws its inputs from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Length of each base array; the largest size any sweep may request
    #[serde(default = "default_base_len")]
    pub base_len: usize,
    #[serde(default = "default_min_value")]
    pub min_value: i64,
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    /// Fraction of positions swapped in the nearly-sorted shape
    #[serde(default = "default_swap_ratio")]
    pub swap_ratio: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_len: default_base_len(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            swap_ratio: default_swap_ratio(),
            seed: default_seed(),
        }
    }
}

fn default_base_len() -> usize {
    100_000
}
fn default_min_value() -> i64 {
    DEFAULT_MIN_VALUE
}
fn default_max_value() -> i64 {
    DEFAULT_MAX_VALUE
}
fn default_swap_ratio() -> f64 {
    DEFAULT_SWAP_RATIO
}
fn default_seed() -> u64 {
    RNG_SEED
}

/// Size and threshold sweep parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Independent trials per measurement; the median is reported
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default = "default_size_start")]
    pub size_start: usize,
    #[serde(default = "default_size_end")]
    pub size_end: usize,
    #[serde(default = "default_size_step")]
    pub size_step: usize,
    /// Threshold used by the hybrid size sweep
    #[serde(default = "default_hybrid_threshold")]
    pub hybrid_threshold: i64,
    /// Input size held fixed during the threshold sweep
    #[serde(default = "default_threshold_size")]
    pub threshold_size: usize,
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<i64>,
    /// Log progress whenever the size is a multiple of this (0 disables)
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            size_start: default_size_start(),
            size_end: default_size_end(),
            size_step: default_size_step(),
            hybrid_threshold: default_hybrid_threshold(),
            threshold_size: default_threshold_size(),
            thresholds: default_thresholds(),
            progress_every: default_progress_every(),
        }
    }
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}
fn default_size_start() -> usize {
    500
}
fn default_size_end() -> usize {
    100_000
}
fn default_size_step() -> usize {
    100
}
fn default_hybrid_threshold() -> i64 {
    DEFAULT_THRESHOLD as i64
}
fn default_threshold_size() -> usize {
    10_000
}
fn default_thresholds() -> Vec<i64> {
    vec![5, 10, 15, 20, 25, 30, 50]
}
fn default_progress_every() -> usize {
    10_000
}

impl SweepConfig {
    pub fn sizes(&self) -> impl Iterator<Item = usize> + use<> {
        (self.size_start..=self.size_end).step_by(self.size_step.max(1))
    }

    pub fn hybrid_threshold(&self) -> Result<Threshold, ConfigError> {
        Threshold::from_signed(self.hybrid_threshold).map_err(|source| ConfigError::Threshold {
            field: "hybrid_threshold",
            source,
        })
    }

    pub fn thresholds(&self) -> Result<Vec<Threshold>, ConfigError> {
        self.thresholds
            .iter()
            .map(|&t| {
                Threshold::from_signed(t).map_err(|source| ConfigError::Threshold {
                    field: "thresholds",
                    source,
                })
            })
            .collect()
    }
}

/// Where the three CSV tables are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_merge_file")]
    pub merge_file: String,
    #[serde(default = "default_hybrid_file")]
    pub hybrid_file: String,
    #[serde(default = "default_threshold_file")]
    pub threshold_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            merge_file: default_merge_file(),
            hybrid_file: default_hybrid_file(),
            threshold_file: default_threshold_file(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}
fn default_merge_file() -> String {
    "merge_sort_results.csv".to_string()
}
fn default_hybrid_file() -> String {
    "hybrid_sort_results.csv".to_string()
}
fn default_threshold_file() -> String {
    "threshold_analysis.csv".to_string()
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sweep = &self.sweep;
        let generator_cfg = &self.generator;

        if sweep.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if sweep.size_step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if sweep.size_start > sweep.size_end {
            return Err(ConfigError::EmptySizeRange {
                start: sweep.size_start,
                end: sweep.size_end,
            });
        }
        for (field, size) in [
            ("size_end", sweep.size_end),
            ("threshold_size", sweep.threshold_size),
        ] {
            if size > generator_cfg.base_len {
                return Err(ConfigError::SizeExceedsBase {
                    field,
                    size,
                    base_len: generator_cfg.base_len,
                });
            }
        }
        sweep.hybrid_threshold()?;
        sweep.thresholds()?;
        self.build_generator()?;
        Ok(())
    }

    pub fn build_generator(&self) -> Result<ArrayGenerator, GeneratorError> {
        let g = &self.generator;
        ArrayGenerator::with_params(g.seed, g.min_value, g.max_value, g.swap_ratio)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Hybrid sort analysis configuration

[generator]
# Length of the base arrays; every sweep size must fit inside it
base_len = 100000
# Inclusive range of the random shape
min_value = 0
max_value = 6000
# Fraction of index pairs swapped in the nearly-sorted shape
swap_ratio = 0.01
# Fixed seed for reproducible inputs (0x5EED_2026)
seed = 1592598566

[sweep]
# Trials per measurement, the median is reported
trials = 5
# Size sweep bounds (inclusive) and step
size_start = 500
size_end = 100000
size_step = 100
# Threshold for the hybrid size sweep
hybrid_threshold = 15
# Fixed input size and candidates for the threshold sweep
threshold_size = 10000
thresholds = [5, 10, 15, 20, 25, 30, 50]
# Log progress at sizes divisible by this (0 disables)
progress_every = 10000

[output]
directory = "."
merge_file = "merge_sort_results.csv"
hybrid_file = "hybrid_sort_results.csv"
threshold_file = "threshold_analysis.csv"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.sweep.trials, 5);
        assert_eq!(config.sweep.thresholds, vec![5, 10, 15, 20, 25, 30, 50]);
        assert_eq!(config.generator.seed, 0x5EED_2026);
        assert_eq!(config.output.merge_file, "merge_sort_results.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_toml_matches_defaults() {
        let parsed = AnalysisConfig::from_toml_str(&AnalysisConfig::default_toml()).unwrap();
        assert_eq!(parsed, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            [sweep]
            trials = 9
            thresholds = [1, 64]
        "#,
        )
        .unwrap();
        assert_eq!(config.sweep.trials, 9);
        assert_eq!(config.sweep.size_step, 100);
        assert_eq!(config.generator.base_len, 100_000);
        let thresholds: Vec<usize> = config
            .sweep
            .thresholds()
            .unwrap()
            .into_iter()
            .map(Threshold::get)
            .collect();
        assert_eq!(thresholds, vec![1, 64]);
    }

    #[test]
    fn test_sizes_are_inclusive() {
        let sweep = SweepConfig {
            size_start: 500,
            size_end: 800,
            size_step: 100,
            ..SweepConfig::default()
        };
        assert_eq!(sweep.sizes().collect::<Vec<_>>(), vec![500, 600, 700, 800]);
    }

    #[test]
    fn test_rejects_non_positive_thresholds() {
        for bad in [0, -5] {
            let mut config = AnalysisConfig::default();
            config.sweep.thresholds = vec![5, bad];
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Threshold {
                    field: "thresholds",
                    ..
                })
            ));
        }

        let mut config = AnalysisConfig::default();
        config.sweep.hybrid_threshold = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Threshold {
                field: "hybrid_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_sweep_bounds() {
        let mut config = AnalysisConfig::default();
        config.sweep.trials = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoTrials)));

        let mut config = AnalysisConfig::default();
        config.sweep.size_step = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroStep)));

        let mut config = AnalysisConfig::default();
        config.sweep.size_start = 2_000;
        config.sweep.size_end = 1_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySizeRange { .. })
        ));

        let mut config = AnalysisConfig::default();
        config.generator.base_len = 5_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SizeExceedsBase {
                field: "size_end",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_generator() {
        let mut config = AnalysisConfig::default();
        config.generator.min_value = 10;
        config.generator.max_value = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Generator(GeneratorError::InvalidValueRange { .. }))
        ));

        let mut config = AnalysisConfig::default();
        config.generator.swap_ratio = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Generator(GeneratorError::InvalidSwapRatio(_)))
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = AnalysisConfig::from_toml_str("[sweep]\ntrials = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AnalysisConfig::load("/nonexistent/analysis.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
