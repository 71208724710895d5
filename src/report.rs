//! Rendering of a [`Comparison`].

use core::fmt::{self, Write};

use crate::bench::{BenchResult, Comparison};

/// Title line of the text report.
pub const TITLE: &str = "Benchmark: sum of squares";

/// Output format of the report.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "executable", derive(clap::ValueEnum))]
pub enum Format {
    /// Six human-readable lines.
    #[default]
    Text,
    /// The comparison as pretty-printed JSON.
    Json,
}

/// Renders `comparison` in the requested format.
pub fn render(comparison: &Comparison, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(render_text(comparison)),
        Format::Json => serde_json::to_string_pretty(comparison),
    }
}

/// Renders the six-line text report.
///
/// ```text
/// Benchmark: sum of squares
/// Items: 2000000
/// Worst (before): sum_of_squares_slow time=0.009850s, peak_mem=24,000,024 B
/// Improved (after): sum_of_squares time=0.001203s, peak_mem=0 B
/// Speedup: 8.19x
/// Peak memory delta: 24,000,024 B
/// ```
pub fn render_text(comparison: &Comparison) -> String {
    let mut out = String::new();
    // writing into a String never fails
    let _ = write_text(&mut out, comparison);
    out
}

fn write_text(out: &mut impl Write, comparison: &Comparison) -> fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "Items: {}", comparison.items)?;
    writeln!(out, "Worst (before): {}", variant_line(&comparison.naive))?;
    writeln!(out, "Improved (after): {}", variant_line(&comparison.optimized))?;
    writeln!(out, "Speedup: {}", comparison.speedup)?;
    writeln!(out, "Peak memory delta: {} B", group_thousands(i128::from(comparison.memory_delta)))
}

fn variant_line(result: &BenchResult) -> String {
    format!(
        "{} time={:.6}s, peak_mem={} B",
        result.name,
        result.best_time.as_secs_f64(),
        group_thousands(result.peak_bytes as i128)
    )
}

/// Formats `value` with a comma between every group of three digits.
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

// TESTS
// ================================================================================================
