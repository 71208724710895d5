//! Time and peak-memory measurement of the reducers.
//!
//! Every repetition runs under its own [`MemoryTrace`]; the harness keeps the fastest time and the
//! largest peak seen across repetitions, then combines the two variants into a [`Comparison`].

use core::{fmt, hint::black_box};
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::{config::BenchConfig, data::generate_input, memory::MemoryTrace, reduce::Variant};

mod error;
pub use error::BenchError;


// SAMPLE
// ================================================================================================

/// Time and peak memory of a single instrumented invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub elapsed: Duration,
    pub peak_bytes: usize,
}

/// Invokes `f` on `data` once under a memory trace and returns its output with the sample.
///
/// The trace is released before returning, also when `f` panics.
pub fn sample<T, F>(f: F, data: &[i32]) -> Result<(T, Sample), BenchError>
where
    F: FnOnce(&[i32]) -> T,
{
    let ((output, elapsed), peak_bytes) = MemoryTrace::scope(|| {
        let now = Instant::now();
        let output = black_box(f(black_box(data)));
        (output, now.elapsed())
    })?;

    Ok((output, Sample { elapsed, peak_bytes }))
}

// BENCH RESULT
// ================================================================================================

/// Aggregated measurements of one reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchResult {
    pub name: &'static str,
    /// Fastest repetition.
    #[serde(rename = "best_time_secs", serialize_with = "serialize_secs")]
    pub best_time: Duration,
    /// Largest peak over all repetitions.
    pub peak_bytes: usize,
    pub repeat: usize,
    /// Value the reducer returned.
    pub value: i128,
}

/// Runs `f` on `data` `repeat` times and aggregates the samples.
///
/// # Errors
/// Returns an error if:
/// - `repeat` is zero.
/// - A memory trace is already active.
/// - `f` does not return the same value on every repetition.
pub fn measure<F>(
    name: &'static str,
    mut f: F,
    data: &[i32],
    repeat: usize,
) -> Result<BenchResult, BenchError>
where
    F: FnMut(&[i32]) -> i128,
{
    if repeat == 0 {
        return Err(BenchError::ZeroRepeat);
    }

    let mut best_time = Duration::MAX;
    let mut peak_bytes = 0;
    let mut value = None;

    for round in 0..repeat {
        let (output, sample) = sample(&mut f, data)?;
        debug!(
            variant = name,
            round,
            elapsed_us = sample.elapsed.as_micros() as u64,
            peak_bytes = sample.peak_bytes,
            "repetition finished"
        );

        match value {
            None => value = Some(output),
            Some(previous) if previous != output => {
                return Err(BenchError::UnstableResult { variant: name });
            },
            Some(_) => {},
        }

        best_time = best_time.min(sample.elapsed);
        peak_bytes = peak_bytes.max(sample.peak_bytes);
    }

    Ok(BenchResult {
        name,
        best_time,
        peak_bytes,
        repeat,
        value: value.unwrap_or_default(),
    })
}

/// Measures one of the built-in reducer variants.
pub fn measure_variant(
    variant: Variant,
    data: &[i32],
    repeat: usize,
) -> Result<BenchResult, BenchError> {
    info!(variant = variant.name(), items = data.len(), repeat, "measuring reducer");
    measure(variant.name(), |d| variant.run(d), data, repeat)
}

// SPEEDUP
// ================================================================================================

/// Ratio of the naive time over the optimized time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    Finite(f64),
    /// The optimized time was below clock resolution.
    Infinite,
}

impl Speedup {
    pub fn from_times(naive: Duration, optimized: Duration) -> Self {
        if optimized.is_zero() {
            Speedup::Infinite
        } else {
            Speedup::Finite(naive.as_secs_f64() / optimized.as_secs_f64())
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Speedup::Finite(ratio) => *ratio,
            Speedup::Infinite => f64::INFINITY,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Speedup::Infinite)
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Finite(ratio) => write!(f, "{ratio:.2}x"),
            Speedup::Infinite => f.write_str("infx"),
        }
    }
}

impl Serialize for Speedup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Speedup::Finite(ratio) => serializer.serialize_f64(*ratio),
            Speedup::Infinite => serializer.serialize_str("inf"),
        }
    }
}

// COMPARISON
// ================================================================================================

/// The naive and optimized measurements side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub items: usize,
    pub naive: BenchResult,
    pub optimized: BenchResult,
    pub speedup: Speedup,
    /// Naive peak minus optimized peak; negative if the optimized variant used more.
    pub memory_delta: i64,
}

impl Comparison {
    pub fn new(items: usize, naive: BenchResult, optimized: BenchResult) -> Self {
        let speedup = Speedup::from_times(naive.best_time, optimized.best_time);
        let memory_delta = bytes_as_i64(naive.peak_bytes) - bytes_as_i64(optimized.peak_bytes);

        Self { items, naive, optimized, speedup, memory_delta }
    }
}

/// Measures both variants on `data`.
///
/// # Errors
/// Besides the errors of [`measure`], returns [`BenchError::ResultMismatch`] if the variants
/// return different values.
pub fn compare(data: &[i32], repeat: usize) -> Result<Comparison, BenchError> {
    let naive = measure_variant(Variant::Naive, data, repeat)?;
    let optimized = measure_variant(Variant::Streaming, data, repeat)?;

    if naive.value != optimized.value {
        return Err(BenchError::ResultMismatch {
            naive: naive.value,
            streaming: optimized.value,
        });
    }
    if optimized.peak_bytes > naive.peak_bytes {
        warn!(
            naive = naive.peak_bytes,
            optimized = optimized.peak_bytes,
            "optimized reducer peaked above the naive one"
        );
    }

    let comparison = Comparison::new(data.len(), naive, optimized);
    info!(
        speedup = comparison.speedup.as_f64(),
        memory_delta = comparison.memory_delta,
        "comparison finished"
    );
    Ok(comparison)
}

/// Generates the input described by `config` and compares both variants on it.
pub fn run(config: &BenchConfig) -> Result<Comparison, BenchError> {
    info!(
        items = config.items(),
        seed = config.seed(),
        min = config.min(),
        max = config.max(),
        "generating benchmark input"
    );
    let data = generate_input(config);
    compare(&data, config.repeat())
}

// HELPERS
// ================================================================================================

fn bytes_as_i64(bytes: usize) -> i64 {
    i64::try_from(bytes).unwrap_or(i64::MAX)
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
