//! Bounded Random Sampling
//!
//! Every generator draws from closed ranges and reports values rounded to
//! one decimal place. The random source is always passed in so results are
//! reproducible from a seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed numeric range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True if `value` lies within the range (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Shift both ends by `delta`
    pub fn shifted(&self, delta: f64) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }

    /// Clamp `value` into the range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Uniform draw in `[range.min, range.max)`, rounded to one decimal
///
/// A degenerate range (min >= max) returns `min` without consuming
/// randomness.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, range: Range) -> f64 {
    if range.max <= range.min {
        return round1(range.min);
    }
    round1(rng.gen_range(range.min..range.max))
}

/// Bernoulli trial, probability clamped to [0, 1]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
    rng.gen_bool(p)
}
