//! Benchmark configuration constants.

use std::time::Duration;

/// Measurement time per benchmark group.
pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(10);

/// Sample size per benchmark group.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Seed used for every generated input, matching the binary's default.
pub const INPUT_SEED: u64 = sumsq::config::DEFAULT_SEED;

/// Item counts for reducer benchmarks
pub const REDUCE_INPUT_SIZES: &[usize] = &[
    0,         // Empty input (edge case)
    1,         // Single element
    1_000,     // Fits in L1
    100_000,   // Smoke-test size
    2_000_000, // Binary default
];
