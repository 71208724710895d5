//! Benchmark configuration.
//!
//! The only environment input is `N`, the number of generated items. Everything else has a
//! default which the binary may override from the command line.

use core::num::NonZeroUsize;

use thiserror::Error;

// CONSTANTS
// ================================================================================================

/// Name of the environment variable holding the item count.
pub const ITEMS_ENV_VAR: &str = "N";

/// Number of generated items when `N` is not set.
pub const DEFAULT_ITEMS: usize = 2_000_000;

/// Number of timed repetitions per reducer.
pub const DEFAULT_REPEAT: usize = 5;

/// Seed for the input generator.
pub const DEFAULT_SEED: u64 = 42;

/// Inclusive lower bound of generated values.
pub const DEFAULT_MIN: i32 = -10_000;

/// Inclusive upper bound of generated values.
pub const DEFAULT_MAX: i32 = 10_000;

// ERRORS
// ================================================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("item count must be a positive integer, found `{value}`")]
    InvalidItemCount { value: String },
    #[error("repetition count must be a positive integer, found `{value}`")]
    InvalidRepeat { value: String },
    #[error("value range is empty: min {min} is greater than max {max}")]
    EmptyRange { min: i32, max: i32 },
}

// PARSING
// ================================================================================================

/// Parses a positive item count.
pub fn parse_item_count(value: &str) -> Result<NonZeroUsize, ConfigError> {
    parse_positive(value)
        .ok_or_else(|| ConfigError::InvalidItemCount { value: value.to_string() })
}

/// Parses a positive repetition count.
pub fn parse_repeat(value: &str) -> Result<NonZeroUsize, ConfigError> {
    parse_positive(value).ok_or_else(|| ConfigError::InvalidRepeat { value: value.to_string() })
}

/// Parses a positive decimal integer, allowing single `_` separators between digits.
fn parse_positive(value: &str) -> Option<NonZeroUsize> {
    let value = value.trim();
    let well_formed = !value.starts_with('_')
        && !value.ends_with('_')
        && !value.contains("__")
        && !value.contains("+_");
    if !well_formed {
        return None;
    }
    value.replace('_', "").parse::<usize>().ok().and_then(NonZeroUsize::new)
}

/// Resolves the item count from the raw value of the `N` environment variable.
///
/// An unset variable yields [`DEFAULT_ITEMS`]; a set but empty one is invalid.
pub fn items_from_env_value(value: Option<&str>) -> Result<NonZeroUsize, ConfigError> {
    match value {
        None => Ok(default_items()),
        Some(value) => parse_item_count(value),
    }
}

/// Reads the item count from the process environment.
pub fn items_from_env() -> Result<NonZeroUsize, ConfigError> {
    match std::env::var(ITEMS_ENV_VAR) {
        Ok(value) => items_from_env_value(Some(&value)),
        Err(std::env::VarError::NotPresent) => items_from_env_value(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidItemCount {
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn default_items() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_ITEMS).unwrap_or(NonZeroUsize::MIN)
}

fn default_repeat() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_REPEAT).unwrap_or(NonZeroUsize::MIN)
}

// BENCH CONFIG
// ================================================================================================

/// Validated parameters of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    items: NonZeroUsize,
    repeat: NonZeroUsize,
    seed: u64,
    min: i32,
    max: i32,
}

impl BenchConfig {
    /// Returns a new config with the default parameters.
    pub fn new() -> Self {
        Self {
            items: default_items(),
            repeat: default_repeat(),
            seed: DEFAULT_SEED,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }

    /// Returns the default config with the item count taken from `N`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new().with_items(items_from_env()?))
    }

    pub fn with_items(mut self, items: NonZeroUsize) -> Self {
        self.items = items;
        self
    }

    pub fn with_repeat(mut self, repeat: NonZeroUsize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the inclusive range generated values are drawn from.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyRange`] if `min > max`.
    pub fn with_range(mut self, min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        self.min = min;
        self.max = max;
        Ok(self)
    }

    pub fn items(&self) -> usize {
        self.items.get()
    }

    pub fn repeat(&self) -> usize {
        self.repeat.get()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

// TESTS
// ================================================================================================
