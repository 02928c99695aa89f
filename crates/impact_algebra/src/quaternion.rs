//! Quaternions.

use crate::num::Float;
use nalgebra::{Matrix4, Vector3, Vector4};
use rand::Rng;
use std::fmt;

/// A quaternion `x + y i + z j + w k`.
///
/// The real part is `x` and the imaginary (vector) part is `(y, z, w)`. A
/// quaternion of unit norm represents a rotation in 3D space.
///
/// Multiplication is the Hamilton product and is not commutative. As for
/// [`Complex`](crate::complex::Complex), operations dividing by the norm
/// produce non-finite components when the norm is zero.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// A single precision quaternion.
pub type Quaternionf = Quaternion<f32>;

impl<T: Float> Quaternion<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// The multiplicative identity, also the rotation by zero angle.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    pub const I: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const J: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const K: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_real(real: T) -> Self {
        Self::new(real, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Creates a quaternion from the given real part and imaginary vector.
    #[inline]
    pub fn from_parts(real: T, imag: &Vector3<T>) -> Self {
        Self::new(real, imag.x, imag.y, imag.z)
    }

    /// Creates a pure imaginary quaternion from the given 3D vector.
    #[inline]
    pub fn from_imag(imag: &Vector3<T>) -> Self {
        Self::from_parts(T::ZERO, imag)
    }

    #[inline]
    pub fn from_vector(vector: &Vector4<T>) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }

    /// Creates the rotation by the given angle (in radians) about the x-axis.
    #[inline]
    pub fn rotation_x(angle: T) -> Self {
        let (sin_half, cos_half) = (angle * T::ONE_HALF).sin_cos();
        Self::new(cos_half, sin_half, T::ZERO, T::ZERO)
    }

    /// Creates the rotation by the given angle (in radians) about the y-axis.
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        let (sin_half, cos_half) = (angle * T::ONE_HALF).sin_cos();
        Self::new(cos_half, T::ZERO, sin_half, T::ZERO)
    }

    /// Creates the rotation by the given angle (in radians) about the z-axis.
    #[inline]
    pub fn rotation_z(angle: T) -> Self {
        let (sin_half, cos_half) = (angle * T::ONE_HALF).sin_cos();
        Self::new(cos_half, T::ZERO, T::ZERO, sin_half)
    }

    /// Creates the rotation given by the roll, pitch and yaw angles in the
    /// given vector. Roll is applied first (about x), then pitch (about y),
    /// then yaw (about z). This is the inverse of [`Self::euler_angles`].
    #[inline]
    pub fn from_euler_angles(angles: &Vector3<T>) -> Self {
        Self::rotation_z(angles.z) * Self::rotation_y(angles.y) * Self::rotation_x(angles.x)
    }

    /// Creates the rotation by the given angle (in radians) about the given
    /// axis. The axis is used as is and must be normalized for the result to be
    /// a unit quaternion.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let (sin_half, cos_half) = (angle * T::ONE_HALF).sin_cos();
        Self::new(
            cos_half,
            axis.x * sin_half,
            axis.y * sin_half,
            axis.z * sin_half,
        )
    }

    /// Creates a quaternion with all four components drawn independently from
    /// the uniform distribution over `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            T::sample_unit_interval(rng),
            T::sample_unit_interval(rng),
            T::sample_unit_interval(rng),
            T::sample_unit_interval(rng),
        )
    }

    /// Creates a unit quaternion by normalizing the output of [`Self::random`].
    /// The result is biased towards the corners of the unit hypercube, use
    /// [`Self::random_rotation`] for uniformly distributed rotations.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng).normalized()
    }

    /// Creates a unit quaternion uniformly distributed over the unit 3-sphere,
    /// and thus a uniformly distributed random rotation.
    ///
    /// Candidates are drawn uniformly from the cube `[-1, 1)^4` and rejected
    /// until one falls inside the unit 4-ball, which is then normalized.
    pub fn random_rotation<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut n_rejected: u32 = 0;
        loop {
            let candidate = Self::random(rng) * T::TWO - Self::new(T::ONE, T::ONE, T::ONE, T::ONE);
            let norm_squared = candidate.norm_squared();

            if norm_squared > T::ZERO && norm_squared <= T::ONE {
                log::trace!("Accepted random rotation candidate after {n_rejected} rejections");
                return candidate / norm_squared.sqrt();
            }
            n_rejected += 1;
        }
    }

    /// Overwrites all components and returns the quaternion for further
    /// chaining.
    #[inline]
    pub fn set(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    #[inline]
    pub fn real(&self) -> T {
        self.x
    }

    #[inline]
    pub fn imag(&self) -> Vector3<T> {
        Vector3::new(self.y, self.z, self.w)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.x, -self.y, -self.z, -self.w)
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
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

    /// Returns the normalized quaternion, or [`None`] if the norm is zero.
    #[inline]
    pub fn try_normalized(&self) -> Option<Self> {
        let norm = self.norm();
        (norm != T::ZERO).then(|| self / norm)
    }

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

    /// Computes the roll, pitch and yaw angles of the rotation represented by
    /// this unit quaternion, returned as the x, y and z components of a vector.
    ///
    /// Near gimbal lock (pitch close to +-pi/2) roll and yaw become
    /// ill-conditioned. The sine of the pitch is clamped to `[-1, 1]` so the
    /// result stays finite.
    pub fn euler_angles(&self) -> Vector3<T> {
        let Self { x, y, z, w } = *self;

        let roll = (T::TWO * (x * y + z * w)).atan2(T::ONE - T::TWO * (y * y + z * z));

        let sin_pitch = (T::TWO * (x * z - w * y)).max(T::NEG_ONE).min(T::ONE);
        let pitch = sin_pitch.asin();

        let yaw = (T::TWO * (x * w + y * z)).atan2(T::ONE - T::TWO * (z * z + w * w));

        Vector3::new(roll, pitch, yaw)
    }

    /// Computes the quaternion exponential `e^x (cos |v| + v sin|v| / |v|)`,
    /// where `v` is the imaginary part.
    ///
    /// For a vanishing imaginary part, the limit `sin|v| / |v| -> 1` is used,
    /// so that the exponential of a real quaternion is real.
    pub fn exp(&self) -> Self {
        let scale = self.x.exp();
        let imag_norm = (self.y * self.y + self.z * self.z + self.w * self.w).sqrt();

        if imag_norm == T::ZERO {
            return Self::from_real(scale);
        }

        let (sin_norm, cos_norm) = imag_norm.sin_cos();
        let imag_scale = scale * sin_norm / imag_norm;

        Self::new(
            scale * cos_norm,
            self.y * imag_scale,
            self.z * imag_scale,
            self.w * imag_scale,
        )
    }

    /// Returns the 4x4 matrix that performs left-multiplication by this
    /// quaternion when applied to the vector form of another quaternion.
    #[rustfmt::skip]
    pub fn to_left_multiplication_matrix(&self) -> Matrix4<T> {
        let Self { x, y, z, w } = *self;
        Matrix4::new(
            x, -y, -z, -w,
            y,  x, -w,  z,
            z,  w,  x, -y,
            w, -z,  y,  x,
        )
    }

    /// Returns the homogeneous 4x4 matrix for the 3D rotation represented by
    /// this quaternion.
    ///
    /// The quaternion must be normalized, otherwise the matrix will not be a
    /// pure rotation.
    #[rustfmt::skip]
    pub fn to_rotation_matrix(&self) -> Matrix4<T> {
        let Self { x, y, z, w } = *self;
        let one = T::ONE;
        let two = T::TWO;
        let zero = T::ZERO;
        Matrix4::new(
            one - two * (z * z + w * w), two * (y * z - w * x),       two * (y * w + z * x),       zero,
            two * (y * z + w * x),       one - two * (y * y + w * w), two * (z * w - y * x),       zero,
            two * (y * w - z * x),       two * (z * w + y * x),       one - two * (y * y + z * z), zero,
            zero,                        zero,                        zero,                        one,
        )
    }

    /// Rotates the given vector with the sandwich product `q v q^-1`.
    ///
    /// The quaternion does not have to be normalized, since the scale cancels
    /// with that of the inverse.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        (self * Self::from_imag(vector) * self.inverse()).imag()
    }
}

impl<T: Float> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.x, self.y, self.z, self.w)
    }
}

impl_unary_op!(Neg, neg, T, Quaternion<T>, Quaternion<T>, |a| {
    Quaternion::new(-a.x, -a.y, -a.z, -a.w)
});

impl_binop!(Add, add, T, Quaternion<T>, Quaternion<T>, Quaternion<T>, |a, b| {
    Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, T, Quaternion<T>, Quaternion<T>, Quaternion<T>, |a, b| {
    Quaternion::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, T, Quaternion<T>, Quaternion<T>, Quaternion<T>, |a, b| {
    Quaternion::new(
        a.x * b.x - a.y * b.y - a.z * b.z - a.w * b.w,
        a.x * b.y + a.y * b.x + a.z * b.w - a.w * b.z,
        a.x * b.z - a.y * b.w + a.z * b.x + a.w * b.y,
        a.x * b.w + a.y * b.z - a.z * b.y + a.w * b.x,
    )
});

impl_binop!(Div, div, T, Quaternion<T>, Quaternion<T>, Quaternion<T>, |a, b| {
    a * b.inverse()
});

impl_binop!(Mul, mul, T, Quaternion<T>, T, Quaternion<T>, |a, f| {
    let f = *f;
    Quaternion::new(a.x * f, a.y * f, a.z * f, a.w * f)
});

impl_binop!(Div, div, T, Quaternion<T>, T, Quaternion<T>, |a, f| {
    let f = *f;
    Quaternion::new(a.x / f, a.y / f, a.z / f, a.w / f)
});

impl_binop_assign!(AddAssign, add_assign, T, Quaternion<T>, Quaternion<T>, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, T, Quaternion<T>, Quaternion<T>, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, T, Quaternion<T>, Quaternion<T>, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(DivAssign, div_assign, T, Quaternion<T>, Quaternion<T>, |a, b| {
    *a = *a / b;
});

impl_binop_assign!(MulAssign, mul_assign, T, Quaternion<T>, T, |a, f| {
    *a = *a * f;
});

impl_binop_assign!(DivAssign, div_assign, T, Quaternion<T>, T, |a, f| {
    *a = *a / f;
});

impl_abs_diff_eq!(T, Quaternion<T>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(T, Quaternion<T>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl_pod_for_scalar_struct!(T, Quaternion<T>);
