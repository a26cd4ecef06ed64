//! Absent-item filtering and whitespace trimming.

use crate::strip::Strip;
use tracing::trace;

/// Drop absent items and trim the rest, preserving order.
///
/// Empty and whitespace-only strings are kept (as `""`); only `None` is
/// skipped. The result is a fresh allocation independent of `items`.
pub fn clean<T: Strip>(items: &[Option<T>]) -> Vec<String> {
    let cleaned = clean_iter(items.iter().map(Option::as_ref));
    trace!(input = items.len(), output = cleaned.len(), "cleaned items");
    cleaned
}

/// [`clean`] over any iterator of optional items.
pub fn clean_iter<I, T>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<T>>,
    T: Strip,
{
    items
        .into_iter()
        .flatten()
        .map(|item| item.strip().to_string())
        .collect()
}

/// Statistics about cleaning runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningStats {
    /// Total items seen.
    pub total_items: u64,
    /// Items that were absent.
    pub absent_items: u64,
    /// Items kept in the output.
    pub kept_items: u64,
}

impl CleaningStats {
    /// Fraction of items that were absent.
    pub fn absent_frac(&self) -> f64 {
        if self.total_items > 0 {
            self.absent_items as f64 / self.total_items as f64
        } else {
            0.0
        }
    }

    /// Reset statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Cleaner that keeps running statistics across batches.
///
/// Each batch is cleaned exactly as [`clean`] does.
#[derive(Debug, Clone, Default)]
pub struct DataCleaner {
    /// Cleaning statistics.
    stats: CleaningStats,
}

impl DataCleaner {
    /// Create a cleaner with empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean a batch of items.
    pub fn clean<T: Strip>(&mut self, items: &[Option<T>]) -> Vec<String> {
        let mut result = Vec::with_capacity(items.len());

        for item in items {
            self.stats.total_items += 1;

            let Some(item) = item else {
                self.stats.absent_items += 1;
                continue;
            };

            self.stats.kept_items += 1;
            result.push(item.strip().to_string());
        }

        trace!(input = items.len(), output = result.len(), "cleaned batch");
        result
    }

    /// Get cleaning statistics.
    pub fn stats(&self) -> &CleaningStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
