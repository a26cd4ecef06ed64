//! Numeric reductions for the datakit utilities.
//!
//! This crate handles:
//! - Arithmetic mean of a numeric slice
//! - Incremental (running) mean
//! - Widening of any primitive number to `f64`

pub mod average;
pub mod numeric;
pub mod running_mean;

pub use average::average;
pub use numeric::AsF64;
pub use running_mean::RunningMean;
