//! Utility macros for implementing operators on types generic over a
//! [`Float`](crate::num::Float) scalar.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $s:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, $s: $crate::num::Float> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$s: $crate::num::Float> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, $s: $crate::num::Float> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$s: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $s:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$s: $crate::num::Float> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$s: $crate::num::Float> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $s:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<$s: $crate::num::Float> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$s: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($s:ident, $t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<$s: $crate::num::Float> ::approx::AbsDiffEq for $t {
            type Epsilon = $s;

            fn default_epsilon() -> Self::Epsilon {
                $s::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($s:ident, $t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<$s: $crate::num::Float> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                $s::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements `bytemuck::Zeroable` and `bytemuck::Pod` for a `#[repr(C)]`
/// type whose fields are all of the scalar type.
macro_rules! impl_pod_for_scalar_struct {
    ($s:ident, $t:ty) => {
        // SAFETY: The type is `#[repr(C)]` and consists only of fields of the
        // scalar type, so it has no padding and the all-zero bit pattern is
        // valid whenever it is valid for the scalar.
        unsafe impl<$s: $crate::num::Float + ::bytemuck::Zeroable> ::bytemuck::Zeroable for $t {}

        // SAFETY: See above.
        unsafe impl<$s: $crate::num::Float + ::bytemuck::Pod> ::bytemuck::Pod for $t {}
    };
}
