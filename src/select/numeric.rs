//! `is_power_of_two` for integers and floats.
//!
//! The integer body uses `v & (v - 1)`, which does not exist for floats; the
//! float body inspects the IEEE-754 bits, which integers do not have. Each
//! body is only ever instantiated for the types it makes sense for.

use crate::primitives::{Absent, Bool, Present};
use super::{Branch, Choose, select};

/// A primitive number, tagged with whether it is integral.
pub trait Numeric: Copy + PartialOrd + 'static {
    type Integral: Bool;
}

pub trait Integer: Numeric {
    /// Exactly one bit set, and positive.
    fn single_bit(self) -> bool;
}

pub trait Float: Numeric {
    /// Positive, finite, and `frexp` would return a mantissa of exactly 0.5.
    fn unit_mantissa(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Integral = Present;
            }

            impl Integer for $t {
                #[inline]
                fn single_bit(self) -> bool {
                    self > 0 && (self & (self - 1)) == 0
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($t:ty, $bits:ty, $frac:expr, $exp:expr) => {
        impl Numeric for $t {
            type Integral = Absent;
        }

        impl Float for $t {
            fn unit_mantissa(self) -> bool {
                if self.is_nan() || self.is_infinite() || self <= 0.0 {
                    return false;
                }
                let bits = self.to_bits();
                let frac = bits & (((1 as $bits) << $frac) - 1);
                let exp = (bits >> $frac) & (((1 as $bits) << $exp) - 1);
                if exp == 0 {
                    // subnormal: the value is frac * 2^min, so one bit must be set
                    frac.is_power_of_two()
                } else {
                    frac == 0
                }
            }
        }
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, u32, 23, 8);
impl_float!(f64, u64, 52, 11);

/// Body for integral types.
pub struct IntegerTest;

/// Body for floating-point types.
pub struct FloatTest;

impl<N: Integer> Branch<N> for IntegerTest {
    type Output = bool;

    #[inline]
    fn run(value: N) -> bool {
        value.single_bit()
    }
}

impl<N: Float> Branch<N> for FloatTest {
    type Output = bool;

    #[inline]
    fn run(value: N) -> bool {
        value.unit_mantissa()
    }
}

/// Is `value` an exact, positive power of two?
pub fn is_power_of_two<N>(value: N) -> bool
where
    N: Numeric,
    N::Integral: Choose<IntegerTest, FloatTest, N, Output = bool>,
{
    select::<N::Integral, IntegerTest, FloatTest, N>(value)
}
