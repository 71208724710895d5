//! Input generation for the reducer benchmarks.

use sumsq::{
    config::{DEFAULT_MAX, DEFAULT_MIN},
    data::generate_values,
};

use super::config::INPUT_SEED;

/// Values drawn from the default range with the shared seed.
pub fn generate_values_random(count: usize) -> Vec<i32> {
    generate_values(count, INPUT_SEED, DEFAULT_MIN, DEFAULT_MAX)
}

/// Values `0, 1, 2, ...` wrapped into the default range.
pub fn generate_values_sequential(count: usize) -> Vec<i32> {
    let span = (DEFAULT_MAX - DEFAULT_MIN + 1) as usize;
    (0..count).map(|i| DEFAULT_MIN + (i % span) as i32).collect()
}
