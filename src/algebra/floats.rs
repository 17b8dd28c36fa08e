#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Element type of every matrix in densecore.
///
/// Storage and engines are written once against `FloatT` and the
/// trait is implemented automatically for anything meeting its bounds,
/// which in practice means `f32` and `f64`.  Most of the arithmetic
/// comes from [`num_traits`](num_traits).
pub trait FloatT:
    'static + Send + Sync + Float + NumAssign + FromPrimitive + Default + Display + LowerExp + Debug
{
}

impl<T> FloatT for T where
    T: 'static + Send + Sync + Float + NumAssign + FromPrimitive + Default + Display + LowerExp + Debug
{
}

/// Conversion of primitive constants to a [`FloatT`](crate::algebra::FloatT),
/// so that a default can be written `(0.).as_T()` in generic code.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T: FloatT> AsFloatT<T> for $ty {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap_or_else(T::nan)
            }
        }
    };
}
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);
