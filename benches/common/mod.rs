//! Shared configuration and input generation for the reducer benchmarks.
//!
//! # Naming Conventions
//!
//! - Benchmark functions: `reduce_<variant>_<data_shape>` (e.g. `reduce_naive_slice`).
//! - Input generation: `generate_<data_shape>` (e.g. `generate_values_random`).

#![allow(dead_code)] // benchmark use doesn't count as "usage" for linting

pub mod config;
pub mod data;
pub mod macros;
