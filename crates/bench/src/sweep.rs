use std::time::Duration;

use hybrid_sort::{SortAlgorithm, algorithm_name};
use tracing::info;

use crate::HarnessError;
use crate::config::SweepConfig;
use crate::generator::{ALL_SHAPES, ArrayGenerator, InputShape};
use crate::trial::run_trials;

/// One table row: a size or threshold and the median time for each shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BenchmarkRecord {
    pub key: usize,
    pub random: Duration,
    pub reverse: Duration,
    pub nearly_sorted: Duration,
}

impl BenchmarkRecord {
    pub fn time(&self, shape: InputShape) -> Duration {
        match shape {
            InputShape::Random => self.random,
            InputShape::Reverse => self.reverse,
            InputShape::NearlySorted => self.nearly_sorted,
        }
    }
}

/// One generated array per shape; sweep inputs are prefixes of these.
#[derive(Clone, Debug)]
pub struct BaseArrays {
    random: Vec<i64>,
    reverse: Vec<i64>,
    nearly_sorted: Vec<i64>,
}

impl BaseArrays {
    pub fn generate(generator: &mut ArrayGenerator, len: usize) -> Self {
        let random = generator.generate(InputShape::Random, len);
        let reverse = generator.generate(InputShape::Reverse, len);
        let nearly_sorted = generator.generate(InputShape::NearlySorted, len);
        Self {
            random,
            reverse,
            nearly_sorted,
        }
    }

    pub fn get(&self, shape: InputShape) -> &[i64] {
        match shape {
            InputShape::Random => &self.random,
            InputShape::Reverse => &self.reverse,
            InputShape::NearlySorted => &self.nearly_sorted,
        }
    }
}

/// Median times of `algo` on the first `size` elements of every base array.
pub fn measure(
    bases: &BaseArrays,
    key: usize,
    size: usize,
    algo: SortAlgorithm,
    trials: usize,
) -> Result<BenchmarkRecord, HarnessError> {
    let mut medians = [Duration::ZERO; 3];
    for (slot, &shape) in medians.iter_mut().zip(ALL_SHAPES.iter()) {
        let input = ArrayGenerator::subarray(bases.get(shape), size)?;
        *slot = run_trials(input, algo, trials)?.median;
    }
    let [random, reverse, nearly_sorted] = medians;
    Ok(BenchmarkRecord {
        key,
        random,
        reverse,
        nearly_sorted,
    })
}

pub fn size_sweep(
    bases: &BaseArrays,
    algo: SortAlgorithm,
    sweep: &SweepConfig,
) -> Result<Vec<BenchmarkRecord>, HarnessError> {
    let mut records = Vec::new();
    for size in sweep.sizes() {
        records.push(measure(bases, size, size, algo, sweep.trials)?);
        if sweep.progress_every > 0 && size % sweep.progress_every == 0 {
            info!(algorithm = algorithm_name(algo), size, "completed size");
        }
    }
    Ok(records)
}

pub fn threshold_sweep(
    bases: &BaseArrays,
    sweep: &SweepConfig,
) -> Result<Vec<BenchmarkRecord>, HarnessError> {
    let thresholds = sweep.thresholds()?;
    let mut records = Vec::with_capacity(thresholds.len());
    for threshold in thresholds {
        let algo = SortAlgorithm::HybridSort(threshold);
        records.push(measure(
            bases,
            threshold.get(),
            sweep.threshold_size,
            algo,
            sweep.trials,
        )?);
        info!(%threshold, size = sweep.threshold_size, "completed threshold");
    }
    Ok(records)
}
