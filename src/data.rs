//! Reproducible input generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::BenchConfig;

/// Generates the benchmark input described by `config`.
///
/// The values are drawn uniformly from `config.min()..=config.max()` by a ChaCha8 generator seeded
/// with `config.seed()`, so the same config always yields the same vector on every platform.
pub fn generate_input(config: &BenchConfig) -> Vec<i32> {
    generate_values(config.items(), config.seed(), config.min(), config.max())
}

/// Generates `count` values in `min..=max` from a generator seeded with `seed`.
///
/// # Panics
/// Panics if `min > max`; [`BenchConfig`] never holds such a range.
pub fn generate_values(count: usize, seed: u64, min: i32, max: i32) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(min..=max)).collect()
}

// TESTS
// ================================================================================================
