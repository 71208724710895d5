//! Two ways to compute a sum of squares, and a harness that measures the difference.
//!
//! [`reduce::sum_of_squares_slow`] materializes the input and an intermediate vector of squares
//! before folding, while [`reduce::sum_of_squares`] streams the squares straight into the sum.
//! The [`bench`] module times both under the [`memory`] tracer and builds a [`bench::Comparison`]
//! which [`report`] renders for humans or as JSON.

pub mod bench;
pub mod config;
pub mod data;
pub mod memory;
pub mod reduce;
pub mod report;

// RE-EXPORTS
// ================================================================================================

pub use bench::{BenchError, BenchResult, Comparison, Speedup};
pub use config::{BenchConfig, ConfigError};
pub use memory::{MemoryTrace, TraceError};
pub use reduce::{Variant, sum_of_squares, sum_of_squares_slow};

// GLOBAL ALLOCATOR
// ================================================================================================

#[global_allocator]
static GLOBAL: memory::TrackingAllocator = memory::TrackingAllocator::new();
