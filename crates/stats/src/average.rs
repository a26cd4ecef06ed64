//! Arithmetic mean.

use crate::numeric::AsF64;
use datakit_core::{Error, Result};
use tracing::{debug, trace};

/// Compute the arithmetic mean of `numbers`.
///
/// Elements are summed left to right starting from `0.0` with no
/// compensation, then divided by the count. NaN and infinities propagate.
///
/// Accepts slices of any primitive integer or float, including `i64`,
/// `u64` and `usize`. Integers above 2^53 in magnitude are rounded to the
/// nearest `f64` before summing.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `numbers` is empty.
pub fn average<T>(numbers: &[T]) -> Result<f64>
where
    T: AsF64,
{
    if numbers.is_empty() {
        debug!("average called with empty input");
        return Err(Error::division_by_zero("mean of an empty sequence"));
    }

    let mut total = 0.0_f64;
    for &n in numbers {
        total += n.as_f64();
    }
    let mean = total / numbers.len() as f64;

    trace!(count = numbers.len(), mean, "computed average");
    Ok(mean)
}
