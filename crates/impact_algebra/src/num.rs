//! Numbers and numerics.

use num_traits as nt;
use rand::Rng;
use std::fmt;

/// Gathers traits useful for working with generic floating point scalars in
/// the complex and quaternion algebras.
pub trait Float:
    nt::Float
    + nt::FromPrimitive
    + nalgebra::Scalar
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + fmt::Display
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;

    /// Draws a value from the uniform distribution over `[0, 1)`.
    fn sample_unit_interval<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;

            #[inline]
            fn sample_unit_interval<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.random::<$f>()
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
