use std::hint::black_box;
use std::time::Instant;

use hybrid_sort::{SortAlgorithm, algorithm_name, sort_with_algorithm};
use tracing::{debug, warn};

use crate::HarnessError;
use crate::stats::TrialSummary;

pub const DEFAULT_TRIALS: usize = 5;

/// Sorts a fresh copy of `input` once per trial and summarises the wall-clock times.
pub fn run_trials(
    input: &[i64],
    algo: SortAlgorithm,
    trials: usize,
) -> Result<TrialSummary, HarnessError> {
    if trials == 0 {
        return Err(HarnessError::NoTrials);
    }

    let mut samples = Vec::with_capacity(trials);
    for _ in 0..trials {
        let mut data = input.to_vec();
        let start = Instant::now();
        sort_with_algorithm(algo, &mut data);
        samples.push(start.elapsed());
        black_box(&data);
    }

    let summary = TrialSummary::from_samples(samples).ok_or(HarnessError::NoTrials)?;
    debug!(
        algorithm = algorithm_name(algo),
        len = input.len(),
        trials,
        median_ns = summary.median.as_nanos() as u64,
        "trials finished"
    );
    if summary.is_below_resolution() && !input.is_empty() {
        warn!(
            algorithm = algorithm_name(algo),
            len = input.len(),
            median_ns = summary.median.as_nanos() as u64,
            "median below 1us timer resolution, reported as 0"
        );
    }
    Ok(summary)
}
