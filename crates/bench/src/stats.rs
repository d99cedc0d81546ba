use std::time::Duration;

/// Middle element after sorting; the upper median for an even count.
pub fn median(samples: &mut [Duration]) -> Option<Duration> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_unstable();
    Some(samples[samples.len() / 2])
}

/// Whole microseconds, the unit of every report column.
#[inline]
pub fn as_micros(duration: Duration) -> u128 {
    duration.as_micros()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrialSummary {
    /// Per-trial times, ascending.
    pub samples: Vec<Duration>,
    pub median: Duration,
}

impl TrialSummary {
    pub fn from_samples(mut samples: Vec<Duration>) -> Option<Self> {
        let median = median(&mut samples)?;
        Some(Self { samples, median })
    }

    pub fn median_micros(&self) -> u128 {
        as_micros(self.median)
    }

    /// Below one microsecond the timer rounds the report column to zero.
    pub fn is_below_resolution(&self) -> bool {
        self.median < Duration::from_micros(1)
    }
}
