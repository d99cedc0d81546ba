//! Hybrid merge/insertion sort over `i64` sequences.
//!
//! Ranges are closed intervals `[left, right]`. A range with `left > right` is
//! empty and every operation treats it as a no-op. Ranges of at most
//! `threshold` elements are finished by insertion sort, larger ones are split at
//! `left + (right - left) / 2` and merged.

mod algorithms;
mod error;

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use algorithms::common;

pub use error::SortError;

/// Insertion-sort cutoff used by [`sort`] and the stdin sorter.
pub const DEFAULT_THRESHOLD: usize = 15;

/// Largest range length still handed to insertion sort. Always at least 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Threshold(NonZeroUsize);

impl Threshold {
    pub const DEFAULT: Self = match NonZeroUsize::new(DEFAULT_THRESHOLD) {
        Some(n) => Self(n),
        None => panic!("default threshold must be non-zero"),
    };

    pub fn new(value: usize) -> Result<Self, SortError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(SortError::InvalidThreshold(0))
    }

    /// Accepts signed input so that negative values surface as a threshold
    /// error instead of a parse failure.
    pub fn from_signed(value: i64) -> Result<Self, SortError> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(SortError::InvalidThreshold(value))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<usize> for Threshold {
    type Error = SortError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Threshold {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| SortError::MalformedThreshold(s.to_string()))?;
        Self::from_signed(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    MergeSort,
    HybridSort(Threshold),
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::HybridSort(_) => "hybrid_sort",
    }
}

/// Sorts the whole slice with the given algorithm.
pub fn sort_with_algorithm(algo: SortAlgorithm, data: &mut [i64]) {
    let Some(right) = data.len().checked_sub(1) else {
        return;
    };
    match algo {
        SortAlgorithm::MergeSort => algorithms::merge_sort_top_down::sort_range(data, 0, right),
        SortAlgorithm::HybridSort(threshold) => {
            algorithms::hybrid::sort_range(data, 0, right, threshold.get())
        }
    }
}

/// Sorts `data` ascending in place using [`DEFAULT_THRESHOLD`].
pub fn sort(data: &mut [i64]) {
    sort_with_threshold(data, Threshold::DEFAULT);
}

pub fn sort_with_threshold(data: &mut [i64], threshold: Threshold) {
    sort_with_algorithm(SortAlgorithm::HybridSort(threshold), data);
}

/// Insertion sort restricted to `[left, right]`.
pub fn insertion_sort(data: &mut [i64], left: usize, right: usize) -> Result<(), SortError> {
    if common::check_range(data.len(), left, right)? {
        algorithms::insertion_sort::sort_range(data, left, right);
    }
    Ok(())
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]`.
///
/// `mid == right` (an empty right run) is allowed. The runs are trusted to be
/// sorted; an unsorted run produces an unordered result without an error.
pub fn merge(data: &mut [i64], left: usize, mid: usize, right: usize) -> Result<(), SortError> {
    if !common::check_range(data.len(), left, right)? {
        return Ok(());
    }
    if mid < left || mid > right {
        return Err(SortError::InvalidMidpoint { left, mid, right });
    }
    algorithms::merge::merge_range(data, left, mid, right);
    Ok(())
}

/// Hybrid sort of `[left, right]`. A zero threshold is rejected before the
/// range is looked at.
pub fn hybrid_sort(
    data: &mut [i64],
    left: usize,
    right: usize,
    threshold: usize,
) -> Result<(), SortError> {
    let threshold = Threshold::new(threshold)?;
    if common::check_range(data.len(), left, right)? {
        algorithms::hybrid::sort_range(data, left, right, threshold.get());
    }
    Ok(())
}

/// Plain top-down merge sort of `[left, right]`.
pub fn merge_sort(data: &mut [i64], left: usize, right: usize) -> Result<(), SortError> {
    if common::check_range(data.len(), left, right)? {
        algorithms::merge_sort_top_down::sort_range(data, left, right);
    }
    Ok(())
}

pub fn is_sorted(data: &[i64]) -> bool {
    common::is_sorted_non_decreasing(data)
}
