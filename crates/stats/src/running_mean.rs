//! Incremental mean.
//!
//! Accumulates values one at a time with the same left-to-right running sum
//! as [`average`](crate::average), so both agree bit for bit.

use crate::numeric::AsF64;
use datakit_core::{Error, Result};

/// Running mean over every value added so far.
#[derive(Debug, Clone, Default)]
pub struct RunningMean {
    /// Running sum, in insertion order.
    sum: f64,
    /// Number of values added.
    count: usize,
}

impl RunningMean {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value.
    ///
    /// Returns the mean including this value.
    pub fn add(&mut self, value: impl AsF64) -> Option<f64> {
        self.sum += value.as_f64();
        self.count += 1;
        self.mean()
    }

    /// Add every value from an iterator, in order.
    pub fn extend<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: AsF64,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Current mean, or `None` before the first value.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64)
    }

    /// Current mean, failing like [`average`](crate::average) when empty.
    pub fn try_mean(&self) -> Result<f64> {
        self.mean()
            .ok_or_else(|| Error::division_by_zero("mean of an empty accumulator"))
    }

    /// Number of values added.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of values added.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Whether no values have been added.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        self.sum = 0.0;
        self.count = 0;
    }
}
