//! Conversion of primitive numbers to `f64`.

/// A primitive number that can be widened (or rounded) to `f64`.
///
/// Integers wider than 53 bits round to the nearest representable `f64`.
pub trait AsF64: Copy {
    /// Convert to `f64`.
    fn as_f64(self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($ty:ty),*) => {
        $(
            impl AsF64 for $ty {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: AsF64> AsF64 for &T {
    #[inline]
    fn as_f64(self) -> f64 {
        (*self).as_f64()
    }
}
