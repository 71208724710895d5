//! Sum-of-squares reducers.
//!
//! Both reducers accept anything that iterates over values borrowable as `i32` and return the
//! exact sum as an `i128`. A square of an `i32` is at most `2^62`, so the `i128` accumulator cannot
//! overflow for any sequence whose length fits in a `usize`.

use core::{borrow::Borrow, hint::black_box};

#[cfg(test)]
mod tests;

// REDUCERS
// ================================================================================================

/// Computes the sum of squares of `nums` by materializing everything along the way.
///
/// The input is first collected into a `Vec`, then a second `Vec` holding every square is built,
/// and only then are the squares summed. The two auxiliary vectors are proportional to the input
/// length; this is what [`sum_of_squares`] is measured against.
pub fn sum_of_squares_slow<I>(nums: I) -> i128
where
    I: IntoIterator,
    I::Item: Borrow<i32>,
{
    // black_box keeps the intermediate vectors from being optimized away
    let items: Vec<i32> = black_box(nums.into_iter().map(|x| *x.borrow()).collect());

    let mut squares: Vec<i64> = Vec::new();
    for x in items.iter() {
        squares.push(square(*x));
    }
    let squares = black_box(squares);

    let mut total: i128 = 0;
    for s in squares.iter() {
        total += i128::from(*s);
    }
    total
}

/// Computes the sum of squares of `nums` in a single lazy pass.
///
/// No allocation is made; each square is folded into the running sum as soon as it is produced.
pub fn sum_of_squares<I>(nums: I) -> i128
where
    I: IntoIterator,
    I::Item: Borrow<i32>,
{
    nums.into_iter().map(|x| i128::from(square(*x.borrow()))).sum()
}

#[inline(always)]
fn square(x: i32) -> i64 {
    let x = i64::from(x);
    x * x
}

// VARIANT
// ================================================================================================

/// The reducer implementations compared by the benchmark harness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    /// [`sum_of_squares_slow`]
    Naive,
    /// [`sum_of_squares`]
    Streaming,
}

impl Variant {
    /// All variants, in the order the harness measures them.
    pub const ALL: [Variant; 2] = [Variant::Naive, Variant::Streaming];

    /// Returns the name under which this variant is reported.
    pub const fn name(&self) -> &'static str {
        match self {
            Variant::Naive => "sum_of_squares_slow",
            Variant::Streaming => "sum_of_squares",
        }
    }

    /// Runs this variant over `data`.
    pub fn run(&self, data: &[i32]) -> i128 {
        match self {
            Variant::Naive => sum_of_squares_slow(data),
            Variant::Streaming => sum_of_squares(data),
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
