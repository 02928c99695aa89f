//! Complex numbers.

use crate::num::Float;
use nalgebra::{Matrix2, Vector2};
use rand::Rng;
use std::fmt;

/// A complex number `x + y i`.
///
/// All operations return new values, except for the assignment operators and
/// [`Self::set`], which modify the number in place. Operations that divide by
/// the norm ([`Self::inverse`], [`Self::normalized`] and complex division)
/// produce non-finite components when the norm is zero. Use
/// [`Self::try_inverse`] or [`Self::try_normalized`] to detect that case.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
    /// The real part.
    pub x: T,
    /// The imaginary part.
    pub y: T,
}

/// A single precision complex number.
pub type Complexf = Complex<f32>;

impl<T: Float> Complex<T> {
    /// The additive identity.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self::new(T::ONE, T::ZERO);

    /// The imaginary unit.
    pub const I: Self = Self::new(T::ZERO, T::ONE);

    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a complex number with the given real part and no imaginary part.
    #[inline]
    pub const fn from_real(real: T) -> Self {
        Self::new(real, T::ZERO)
    }

    /// Creates a complex number whose real and imaginary parts are the first
    /// and second components of the given vector.
    #[inline]
    pub fn from_vector(vector: &Vector2<T>) -> Self {
        Self::new(vector.x, vector.y)
    }

    /// Creates a complex number from a vector containing the radius and angle
    /// (in radians) of its polar representation.
    #[inline]
    pub fn from_polar(polar: &Vector2<T>) -> Self {
        let (radius, angle) = (polar.x, polar.y);
        let (sin_angle, cos_angle) = angle.sin_cos();
        Self::new(radius * cos_angle, radius * sin_angle)
    }

    /// Creates a complex number with both parts drawn independently from the
    /// uniform distribution over `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(T::sample_unit_interval(rng), T::sample_unit_interval(rng))
    }

    /// Creates a complex number of unit norm by normalizing the output of
    /// [`Self::random`].
    ///
    /// The resulting angle is confined to the first quadrant and is not
    /// uniformly distributed within it.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng).normalized()
    }

    /// Overwrites both parts and returns the number for further chaining.
    #[inline]
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn real(&self) -> T {
        self.x
    }

    #[inline]
    pub fn imag(&self) -> T {
        self.y
    }

    #[inline]
    pub fn to_vector(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.x, -self.y)
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (self - other).norm_squared()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Returns the normalized number, or [`None`] if the norm is zero.
    #[inline]
    pub fn try_normalized(&self) -> Option<Self> {
        let norm = self.norm();
        (norm != T::ZERO).then(|| self / norm)
    }

    /// Computes the multiplicative inverse as the conjugate divided by the
    /// squared norm.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Returns the multiplicative inverse, or [`None`] if the norm is zero.
    #[inline]
    pub fn try_inverse(&self) -> Option<Self> {
        let norm_squared = self.norm_squared();
        (norm_squared != T::ZERO).then(|| self.conjugate() / norm_squared)
    }

    /// Computes the argument (angle from the positive real axis) in the range
    /// `(-pi, pi]`.
    #[inline]
    pub fn arg(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Returns a complex number holding the norm as its real part and the
    /// argument as its imaginary part.
    #[inline]
    pub fn to_polar(&self) -> Self {
        Self::new(self.norm(), self.arg())
    }

    /// Computes `e^(x + y i) = e^x (cos y + i sin y)`.
    #[inline]
    pub fn exp(&self) -> Self {
        let (sin_y, cos_y) = self.y.sin_cos();
        Self::new(cos_y, sin_y) * self.x.exp()
    }

    /// Returns the real 2x2 matrix that performs multiplication by this number
    /// when applied to the vector form of another complex number.
    #[inline]
    pub fn to_matrix(&self) -> Matrix2<T> {
        Matrix2::new(
            self.x, -self.y, //
            self.y, self.x,
        )
    }
}

impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.x, self.y)
    }
}

impl_unary_op!(Neg, neg, T, Complex<T>, Complex<T>, |a| {
    Complex::new(-a.x, -a.y)
});

impl_binop!(Add, add, T, Complex<T>, Complex<T>, Complex<T>, |a, b| {
    Complex::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, T, Complex<T>, Complex<T>, Complex<T>, |a, b| {
    Complex::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, T, Complex<T>, Complex<T>, Complex<T>, |a, b| {
    Complex::new(a.x * b.x - a.y * b.y, a.x * b.y + a.y * b.x)
});

impl_binop!(Div, div, T, Complex<T>, Complex<T>, Complex<T>, |a, b| {
    a * b.inverse()
});

impl_binop!(Mul, mul, T, Complex<T>, T, Complex<T>, |a, f| {
    Complex::new(a.x * *f, a.y * *f)
});

impl_binop!(Div, div, T, Complex<T>, T, Complex<T>, |a, f| {
    Complex::new(a.x / *f, a.y / *f)
});

impl_binop_assign!(AddAssign, add_assign, T, Complex<T>, Complex<T>, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, T, Complex<T>, Complex<T>, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, T, Complex<T>, Complex<T>, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(DivAssign, div_assign, T, Complex<T>, Complex<T>, |a, b| {
    *a = *a / b;
});

impl_binop_assign!(MulAssign, mul_assign, T, Complex<T>, T, |a, f| {
    *a = *a * f;
});

impl_binop_assign!(DivAssign, div_assign, T, Complex<T>, T, |a, f| {
    *a = *a / f;
});

impl_abs_diff_eq!(T, Complex<T>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
});

impl_relative_eq!(T, Complex<T>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative) && a.y.relative_eq(&b.y, epsilon, max_relative)
});

impl_pod_for_scalar_struct!(T, Complex<T>);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::random::SplitMix64;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn complex_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
        ) -> Complexf {
            Complexf::new(x, y)
        }
    }

    prop_compose! {
        fn nonzero_complex_strategy(max_component: f32)(
            c in complex_strategy(max_component)
                .prop_filter("norm too small", |c| c.norm() > 1e-2)
        ) -> Complexf {
            c
        }
    }

    #[test]
    fn norm_of_three_four_is_five() {
        assert_eq!(Complexf::new(3.0, 4.0).norm(), 5.0);
        assert_eq!(Complexf::new(3.0, 4.0).norm_squared(), 25.0);
    }

    #[test]
    fn one_times_i_is_i() {
        assert_eq!(Complexf::new(1.0, 0.0) * Complexf::new(0.0, 1.0), Complexf::I);
    }

    #[test]
    fn i_squared_is_minus_one() {
        assert_eq!(Complexf::I * Complexf::I, -Complexf::ONE);
    }

    #[test]
    fn multiplication_follows_complex_product() {
        let a = Complexf::new(1.0, 2.0);
        let b = Complexf::new(3.0, -1.0);
        assert_eq!(a * b, Complexf::new(5.0, 5.0));
    }

    #[test]
    fn addition_and_subtraction_are_componentwise() {
        let a = Complexf::new(1.0, 2.0);
        let b = Complexf::new(-3.0, 0.5);
        assert_eq!(&a + &b, Complexf::new(-2.0, 2.5));
        assert_eq!(&a - b, Complexf::new(4.0, 1.5));
    }

    #[test]
    fn scalar_multiplication_and_division_are_componentwise() {
        let a = Complexf::new(1.0, -2.0);
        assert_eq!(a * 2.0, Complexf::new(2.0, -4.0));
        assert_eq!(a / 2.0, Complexf::new(0.5, -1.0));
    }

    #[test]
    fn assignment_operators_modify_in_place() {
        let mut a = Complexf::new(1.0, 1.0);
        a += Complexf::new(1.0, 0.0);
        assert_eq!(a, Complexf::new(2.0, 1.0));
        a -= &Complexf::new(0.0, 2.0);
        assert_eq!(a, Complexf::new(2.0, -1.0));
        a *= Complexf::I;
        assert_eq!(a, Complexf::new(1.0, 2.0));
        a *= 3.0;
        assert_eq!(a, Complexf::new(3.0, 6.0));
        a /= 3.0;
        assert_eq!(a, Complexf::new(1.0, 2.0));
        a /= Complexf::new(1.0, 2.0);
        assert_abs_diff_eq!(a, Complexf::ONE, epsilon = EPSILON);
    }

    #[test]
    fn set_overwrites_and_chains() {
        let mut a = Complexf::ZERO;
        a.set(1.0, 2.0).set(3.0, 4.0);
        assert_eq!(a, Complexf::new(3.0, 4.0));
    }

    #[test]
    fn real_and_imag_accessors_work() {
        let a = Complexf::new(-1.5, 2.5);
        assert_eq!(a.real(), -1.5);
        assert_eq!(a.imag(), 2.5);
        assert_eq!(Complexf::from_real(4.0), Complexf::new(4.0, 0.0));
    }

    #[test]
    fn vector_conversion_keeps_component_order() {
        let v = Vector2::new(1.0, 2.0);
        let a = Complexf::from_vector(&v);
        assert_eq!(a, Complexf::new(1.0, 2.0));
        assert_eq!(a.to_vector(), v);
    }

    #[test]
    fn conjugate_negates_imaginary_part() {
        assert_eq!(Complexf::new(1.0, 2.0).conjugate(), Complexf::new(1.0, -2.0));
    }

    #[test]
    fn distance_is_norm_of_difference() {
        let a = Complexf::new(1.0, 1.0);
        let b = Complexf::new(4.0, 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn arg_of_axis_directions_works() {
        assert_abs_diff_eq!(Complexf::ONE.arg(), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Complexf::I.arg(), FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(Complexf::new(-1.0, 0.0).arg(), PI, epsilon = EPSILON);
        assert_abs_diff_eq!((-Complexf::I).arg(), -FRAC_PI_2, epsilon = EPSILON);
    }

    #[test]
    fn polar_form_holds_norm_and_arg() {
        let polar = Complexf::new(0.0, 2.0).to_polar();
        assert_abs_diff_eq!(polar.x, 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(polar.y, FRAC_PI_2, epsilon = EPSILON);
    }

    #[test]
    fn from_polar_scales_both_parts_by_radius() {
        let a = Complexf::from_polar(&Vector2::new(2.0, FRAC_PI_2));
        assert_abs_diff_eq!(a, Complexf::new(0.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn exp_of_zero_is_one() {
        assert_eq!(Complexf::ZERO.exp(), Complexf::ONE);
    }

    #[test]
    fn exp_of_i_pi_is_minus_one() {
        assert_abs_diff_eq!(
            Complexf::new(0.0, PI).exp(),
            -Complexf::ONE,
            epsilon = EPSILON
        );
    }

    #[test]
    fn exp_scales_by_exponential_of_real_part() {
        let a = Complexf::new(1.0, FRAC_PI_2).exp();
        assert_abs_diff_eq!(a, Complexf::new(0.0, 1.0_f32.exp()), epsilon = 1e-5);
    }

    #[test]
    fn inverse_of_zero_is_not_finite() {
        let inverse = Complexf::ZERO.inverse();
        assert!(!inverse.x.is_finite());
        assert!(Complexf::ZERO.try_inverse().is_none());
        assert!(Complexf::ZERO.try_normalized().is_none());
    }

    #[test]
    fn try_variants_agree_with_unchecked_for_nonzero_numbers() {
        let a = Complexf::new(3.0, -4.0);
        assert_eq!(a.try_inverse(), Some(a.inverse()));
        assert_eq!(a.try_normalized(), Some(a.normalized()));
    }

    #[test]
    fn display_renders_both_parts() {
        assert_eq!(Complexf::new(1.5, -2.0).to_string(), "1.5 + -2i");
    }

    #[test]
    fn complex_slices_cast_to_flat_scalars() {
        let numbers = [Complexf::new(1.0, 2.0), Complexf::new(3.0, 4.0)];
        let scalars: &[f32] = bytemuck::cast_slice(&numbers);
        assert_eq!(scalars, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn random_numbers_are_in_unit_square() {
        let mut rng = SplitMix64::seed_from_u64(0);
        for _ in 0..100 {
            let a = Complexf::random(&mut rng);
            assert!((0.0..1.0).contains(&a.x));
            assert!((0.0..1.0).contains(&a.y));
        }
    }

    #[test]
    fn random_unit_numbers_have_unit_norm() {
        let mut rng = SplitMix64::seed_from_u64(1);
        for _ in 0..100 {
            assert_abs_diff_eq!(Complexf::random_unit(&mut rng).norm(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn random_numbers_are_reproducible_from_seed() {
        let mut rng_a = SplitMix64::seed_from_u64(42);
        let mut rng_b = SplitMix64::seed_from_u64(42);
        assert_eq!(Complexf::random(&mut rng_a), Complexf::random(&mut rng_b));
    }

    proptest! {
        #[test]
        fn should_multiply_to_one_with_inverse(a in nonzero_complex_strategy(1e2)) {
            prop_assert!(abs_diff_eq!(a * a.inverse(), Complexf::ONE, epsilon = 1e-4));
        }
    }

    proptest! {
        #[test]
        fn should_recover_number_from_double_conjugate(a in complex_strategy(1e3)) {
            prop_assert_eq!(a.conjugate().conjugate(), a);
        }
    }

    proptest! {
        #[test]
        fn should_have_squared_norm_equal_to_norm_squared(a in complex_strategy(1e2)) {
            let norm = a.norm();
            prop_assert!(abs_diff_eq!(norm * norm, a.norm_squared(), epsilon = 1e-2));
        }
    }

    proptest! {
        #[test]
        fn should_reproduce_product_with_matrix(
            a in complex_strategy(1e2),
            b in complex_strategy(1e2),
        ) {
            let product = Complexf::from_vector(&(a.to_matrix() * b.to_vector()));
            prop_assert!(abs_diff_eq!(product, a * b, epsilon = 1e-2));
        }
    }

    proptest! {
        #[test]
        fn should_recover_number_from_polar_form(a in nonzero_complex_strategy(1e2)) {
            let polar = a.to_polar();
            let recovered = Complexf::from_polar(&polar.to_vector());
            prop_assert!(abs_diff_eq!(recovered, a, epsilon = 1e-3));
        }
    }

    proptest! {
        #[test]
        fn should_divide_as_inverse_of_multiplication(
            a in complex_strategy(1e2),
            b in nonzero_complex_strategy(1e2),
        ) {
            prop_assert!(abs_diff_eq!((a * b) / b, a, epsilon = 1e-2));
        }
    }
}
