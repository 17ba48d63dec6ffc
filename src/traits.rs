//! Floating-point width tag
//!
//! [`FastFloat`] is the closed set of widths the approximation kernels are
//! tuned for. It is sealed: the kernels carry per-width magic constants and
//! thresholds, so a third width cannot be added from outside the crate.
//!
//! Each method forwards to the width-specific kernel in [`crate::math`]. The
//! `fast_` prefix keeps the methods from colliding with the inherent `std`
//! methods of the same name on `f32`/`f64`.

use num_traits::float::FloatCore;
use num_traits::AsPrimitive;

use crate::constants::Constants;
use crate::math::{atan, exp, frexp, log, pow, sqrt, tanh, trig};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar width accepted by the approximation kernels (`f32` or `f64`)
///
/// # Example
///
/// ```rust
/// use quickmath::FastFloat;
///
/// fn decay<F: FastFloat>(rate: F, time: F) -> F {
///     (rate * time).fast_exp()
/// }
///
/// assert!((decay(-5.0_f32, 0.1) - 0.606_530_6).abs() < 1e-5);
/// assert!((decay(-5.0_f64, 0.1) - 0.606_530_659_712_633_4).abs() < 1e-6);
/// ```
pub trait FastFloat:
    FloatCore
    + Constants
    + AsPrimitive<i64>
    + AsPrimitive<i32>
    + AsPrimitive<u32>
    + AsPrimitive<f64>
    + core::fmt::Debug
    + core::fmt::Display
    + sealed::Sealed
{
    /// One half, the rounding offset used by [`crate::general::round`]
    const HALF: Self;

    /// Largest argument whose e^x is still finite, rounded down
    ///
    /// `exp` of anything noticeably above this overflows to infinity.
    const MAX_LN: Self;

    /// Converts a truncated integer back to this width
    fn from_i64(value: i64) -> Self;

    /// Bit-trick square root, see [`crate::math::sqrt`]
    fn fast_sqrt(self) -> Self;

    /// Mantissa/exponent decomposition, see [`crate::math::frexp`]
    fn fast_frexp(self) -> (Self, i32);

    /// e^self, see [`crate::math::exp`]
    fn fast_exp(self) -> Self;

    /// ln(self), see [`crate::math::log`]
    fn fast_ln(self) -> Self;

    /// log₂(self)
    fn fast_log2(self) -> Self;

    /// log₁₀(self)
    fn fast_log10(self) -> Self;

    /// 2^self, see [`crate::math::pow`]
    fn fast_pow2(self) -> Self;

    /// 10^self
    fn fast_pow10(self) -> Self;

    /// self^exponent
    fn fast_pow(self, exponent: Self) -> Self;

    /// cos(self), see [`crate::math::trig`]
    fn fast_cos(self) -> Self;

    /// sin(self)
    fn fast_sin(self) -> Self;

    /// tan(self)
    fn fast_tan(self) -> Self;

    /// atan(self), see [`crate::math::atan`]
    fn fast_atan(self) -> Self;

    /// tanh(self), see [`crate::math::tanh`]
    fn fast_tanh(self) -> Self;
}

impl FastFloat for f32 {
    const HALF: f32 = 0.5;
    const MAX_LN: f32 = 88.722_83;

    #[inline(always)]
    fn from_i64(value: i64) -> f32 {
        value as f32
    }

    #[inline(always)]
    fn fast_sqrt(self) -> f32 {
        sqrt::sqrt_f32(self)
    }

    #[inline(always)]
    fn fast_frexp(self) -> (f32, i32) {
        frexp::frexp_f32(self)
    }

    #[inline(always)]
    fn fast_exp(self) -> f32 {
        exp::exp_f32(self)
    }

    #[inline(always)]
    fn fast_ln(self) -> f32 {
        log::ln_f32(self)
    }

    #[inline(always)]
    fn fast_log2(self) -> f32 {
        log::log2_f32(self)
    }

    #[inline(always)]
    fn fast_log10(self) -> f32 {
        log::log10_f32(self)
    }

    #[inline(always)]
    fn fast_pow2(self) -> f32 {
        pow::pow2_f32(self)
    }

    #[inline(always)]
    fn fast_pow10(self) -> f32 {
        pow::pow10_f32(self)
    }

    #[inline(always)]
    fn fast_pow(self, exponent: f32) -> f32 {
        pow::pow_f32(self, exponent)
    }

    #[inline(always)]
    fn fast_cos(self) -> f32 {
        trig::cos_f32(self)
    }

    #[inline(always)]
    fn fast_sin(self) -> f32 {
        trig::sin_f32(self)
    }

    #[inline(always)]
    fn fast_tan(self) -> f32 {
        trig::tan_f32(self)
    }

    #[inline(always)]
    fn fast_atan(self) -> f32 {
        atan::atan_f32(self)
    }

    #[inline(always)]
    fn fast_tanh(self) -> f32 {
        tanh::tanh_f32(self)
    }
}

impl FastFloat for f64 {
    const HALF: f64 = 0.5;
    #[allow(clippy::excessive_precision)]
    const MAX_LN: f64 = 709.782_712_893_383_973_096;

    #[inline(always)]
    fn from_i64(value: i64) -> f64 {
        value as f64
    }

    #[inline(always)]
    fn fast_sqrt(self) -> f64 {
        sqrt::sqrt_f64(self)
    }

    #[inline(always)]
    fn fast_frexp(self) -> (f64, i32) {
        frexp::frexp_f64(self)
    }

    #[inline(always)]
    fn fast_exp(self) -> f64 {
        exp::exp_f64(self)
    }

    #[inline(always)]
    fn fast_ln(self) -> f64 {
        log::ln_f64(self)
    }

    #[inline(always)]
    fn fast_log2(self) -> f64 {
        log::log2_f64(self)
    }

    #[inline(always)]
    fn fast_log10(self) -> f64 {
        log::log10_f64(self)
    }

    #[inline(always)]
    fn fast_pow2(self) -> f64 {
        pow::pow2_f64(self)
    }

    #[inline(always)]
    fn fast_pow10(self) -> f64 {
        pow::pow10_f64(self)
    }

    #[inline(always)]
    fn fast_pow(self, exponent: f64) -> f64 {
        pow::pow_f64(self, exponent)
    }

    #[inline(always)]
    fn fast_cos(self) -> f64 {
        trig::cos_f64(self)
    }

    #[inline(always)]
    fn fast_sin(self) -> f64 {
        trig::sin_f64(self)
    }

    #[inline(always)]
    fn fast_tan(self) -> f64 {
        trig::tan_f64(self)
    }

    #[inline(always)]
    fn fast_atan(self) -> f64 {
        atan::atan_f64(self)
    }

    #[inline(always)]
    fn fast_tanh(self) -> f64 {
        tanh::tanh_f64(self)
    }
}
