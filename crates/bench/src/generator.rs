use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::GeneratorError;

pub const RNG_SEED: u64 = 0x5EED_2026;
pub const DEFAULT_MIN_VALUE: i64 = 0;
pub const DEFAULT_MAX_VALUE: i64 = 6000;
pub const DEFAULT_SWAP_RATIO: f64 = 0.01;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InputShape {
    Random,
    Reverse,
    NearlySorted,
}

pub const ALL_SHAPES: [InputShape; 3] = [
    InputShape::Random,
    InputShape::Reverse,
    InputShape::NearlySorted,
];

impl InputShape {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Reverse => "reverse",
            Self::NearlySorted => "nearly_sorted",
        }
    }

    /// Column header used in the CSV tables.
    pub fn column(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Reverse => "Reverse",
            Self::NearlySorted => "NearlySorted",
        }
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Seeded source of benchmark inputs.
#[derive(Clone, Debug)]
pub struct ArrayGenerator {
    rng: StdRng,
    min_value: i64,
    max_value: i64,
    swap_ratio: f64,
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self {
            rng: default_rng(),
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            swap_ratio: DEFAULT_SWAP_RATIO,
        }
    }
}

impl ArrayGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::default()
        }
    }

    pub fn with_params(
        seed: u64,
        min_value: i64,
        max_value: i64,
        swap_ratio: f64,
    ) -> Result<Self, GeneratorError> {
        if min_value > max_value {
            return Err(GeneratorError::InvalidValueRange {
                min: min_value,
                max: max_value,
            });
        }
        if !swap_ratio.is_finite() || !(0.0..=1.0).contains(&swap_ratio) {
            return Err(GeneratorError::InvalidSwapRatio(swap_ratio));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            min_value,
            max_value,
            swap_ratio,
        })
    }

    /// Independent uniform draws from `[min_value, max_value]`.
    pub fn random(&mut self, size: usize) -> Vec<i64> {
        let (min, max) = (self.min_value, self.max_value);
        (0..size)
            .map(|_| self.rng.random_range(min..=max))
            .collect()
    }

    /// `[size, size - 1, ..., 1]`.
    pub fn reverse_sorted(&self, size: usize) -> Vec<i64> {
        (1..=size as i64).rev().collect()
    }

    /// `[1, ..., size]` with `floor(size * swap_ratio)` random index pairs swapped.
    pub fn nearly_sorted(&mut self, size: usize) -> Vec<i64> {
        let mut data: Vec<i64> = (1..=size as i64).collect();
        if size == 0 {
            return data;
        }

        let swaps = (size as f64 * self.swap_ratio) as usize;
        for _ in 0..swaps {
            let a = self.rng.random_range(0..size);
            let b = self.rng.random_range(0..size);
            data.swap(a, b);
        }
        data
    }

    pub fn generate(&mut self, shape: InputShape, size: usize) -> Vec<i64> {
        match shape {
            InputShape::Random => self.random(size),
            InputShape::Reverse => self.reverse_sorted(size),
            InputShape::NearlySorted => self.nearly_sorted(size),
        }
    }

    /// First `size` elements of `source`, so that a size sweep draws every
    /// input from the same generated distribution.
    pub fn subarray(source: &[i64], size: usize) -> Result<&[i64], GeneratorError> {
        source
            .get(..size)
            .ok_or(GeneratorError::SubarrayTooLong {
                requested: size,
                available: source.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_sorted_counts_down_to_one() {
        let generator = ArrayGenerator::default();
        assert_eq!(generator.reverse_sorted(5), vec![5, 4, 3, 2, 1]);
        assert!(generator.reverse_sorted(0).is_empty());
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut generator = ArrayGenerator::with_params(7, -3, 3, 0.01).unwrap();
        let data = generator.random(2_000);
        assert_eq!(data.len(), 2_000);
        assert!(data.iter().all(|&x| (-3..=3).contains(&x)));
        assert!(data.contains(&-3) && data.contains(&3));
    }

    #[test]
    fn random_defaults_to_0_6000() {
        let data = ArrayGenerator::default().random(1_000);
        assert!(data.iter().all(|&x| (0..=6000).contains(&x)));
    }

    #[test]
    fn same_seed_same_arrays() {
        let mut a = ArrayGenerator::new(99);
        let mut b = ArrayGenerator::new(99);
        for &shape in &ALL_SHAPES {
            assert_eq!(a.generate(shape, 300), b.generate(shape, 300));
        }
    }

    #[test]
    fn nearly_sorted_is_a_light_permutation() {
        let mut generator = ArrayGenerator::default();
        let size = 10_000;
        let data = generator.nearly_sorted(size);

        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(sorted, (1..=size as i64).collect::<Vec<_>>());

        // 100 swaps displace at most 200 positions.
        let displaced = data
            .iter()
            .enumerate()
            .filter(|&(i, &x)| x != i as i64 + 1)
            .count();
        assert!(displaced <= 200, "displaced={displaced}");
        assert!(displaced > 0);
    }

    #[test]
    fn nearly_sorted_small_sizes() {
        let mut generator = ArrayGenerator::default();
        assert!(generator.nearly_sorted(0).is_empty());
        assert_eq!(generator.nearly_sorted(50), (1..=50).collect::<Vec<i64>>());
    }

    #[test]
    fn subarray_takes_prefix() {
        let source = [4, 8, 15, 16, 23, 42];
        assert_eq!(ArrayGenerator::subarray(&source, 3), Ok(&source[..3]));
        assert_eq!(ArrayGenerator::subarray(&source, 0), Ok(&source[..0]));
        assert_eq!(ArrayGenerator::subarray(&source, 6), Ok(&source[..]));
        assert_eq!(
            ArrayGenerator::subarray(&source, 7),
            Err(GeneratorError::SubarrayTooLong {
                requested: 7,
                available: 6
            })
        );
    }

    #[test]
    fn rejects_bad_params() {
        assert_eq!(
            ArrayGenerator::with_params(1, 5, 4, 0.01).unwrap_err(),
            GeneratorError::InvalidValueRange { min: 5, max: 4 }
        );
        assert!(ArrayGenerator::with_params(1, 0, 1, 1.5).is_err());
        assert!(ArrayGenerator::with_params(1, 0, 1, f64::NAN).is_err());
        assert!(ArrayGenerator::with_params(1, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn shape_labels() {
        let columns: Vec<_> = ALL_SHAPES.iter().map(|s| s.column()).collect();
        assert_eq!(columns, ["Random", "Reverse", "NearlySorted"]);
        assert_eq!(InputShape::NearlySorted.label(), "nearly_sorted");
    }
}
