//! String cleaning for the datakit utilities.
//!
//! This crate handles:
//! - Dropping absent (`None`) items
//! - Trimming surrounding whitespace from the rest
//! - Batch cleaning with running statistics

pub mod cleaner;
pub mod strip;

pub use cleaner::{clean, clean_iter, CleaningStats, DataCleaner};
pub use strip::Strip;
