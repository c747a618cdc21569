//! The numeric element trait accepted by [`crate::SampleBuffer`]

use std::{cmp::Ordering, fmt::Debug};

use num_traits::{ToPrimitive, Zero};

/// A numeric value that can be stored in a [`crate::SampleBuffer`]
///
/// This is implemented for all the primitive integer and floating point types.
/// Statistics are accumulated in `f64` regardless of the element type,
/// so narrow integer types (like the `i16` readings of a 12 bit ADC) don't lose precision when summed.
pub trait Sample: Copy + PartialOrd + Debug + Zero + ToPrimitive {
    /// Total ordering used for selection and sorting
    ///
    /// For floats this is the IEEE 754 total order, so a stray NaN ends up at one of the ends instead of
    /// corrupting the partition.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Combines the two middle values of an even-length buffer into its median
    ///
    /// Integers take the mean rounded half up (toward positive infinity), floats take the exact mean.
    fn midpoint(low: Self, high: Self) -> Self;

    /// Rounds a wide value to the resolution of this type, keeping it in the wide type
    ///
    /// Integers round half up, floats are left as they are.
    fn round_wide(value: f64) -> f64;

    /// Converts the value into the wide accumulator type
    fn widen(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_integer_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn midpoint(low: Self, high: Self) -> Self {
                    // i128 holds the sum of any two 64 bit values, signed or not
                    let sum = low as i128 + high as i128;
                    (sum + 1).div_euclid(2) as $t
                }

                #[inline]
                fn round_wide(value: f64) -> f64 {
                    (value + 0.5).floor()
                }
            }
        )*
    };
}

macro_rules! impl_float_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                #[inline]
                fn midpoint(low: Self, high: Self) -> Self {
                    low / 2.0 + high / 2.0
                }

                #[inline]
                fn round_wide(value: f64) -> f64 {
                    value
                }

                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_sample!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_sample!(f32, f64);
