//! General numeric primitives
//!
//! Comparison and sign helpers work on any numeric type. The floating-point
//! helpers (`sqrt`, `trunc`, `fmod`, `round`, `round_u`) take a [`FastFloat`]
//! so both operands of a binary call always share one width: `fmod(1.0_f32,
//! 2.0_f64)` does not type-check.

use num_traits::{AsPrimitive, Num, Signed};

use crate::traits::FastFloat;

/// Returns the larger of the two values (`right` on ties)
///
/// # Example
///
/// ```rust
/// use quickmath::max;
///
/// assert_eq!(max(3, 7), 7);
/// assert_eq!(max(-1.5_f32, -2.5), -1.5);
/// ```
#[inline(always)]
pub fn max<T: Num + PartialOrd>(left: T, right: T) -> T {
    if left > right {
        left
    } else {
        right
    }
}

/// Returns the smaller of the two values (`right` on ties)
#[inline(always)]
pub fn min<T: Num + PartialOrd>(left: T, right: T) -> T {
    if left < right {
        left
    } else {
        right
    }
}

/// Absolute value of any signed numeric type
///
/// # Example
///
/// ```rust
/// use quickmath::abs;
///
/// assert_eq!(abs(-4_i32), 4);
/// assert_eq!(abs(-0.25_f64), 0.25);
/// ```
#[inline(always)]
pub fn abs<T: Signed + PartialOrd>(x: T) -> T {
    if x < T::zero() {
        -x
    } else {
        x
    }
}

/// Fast approximate square root (~5 significant digits)
///
/// Meaningless for negative input. See [`crate::math::sqrt`].
///
/// # Example
///
/// ```rust
/// use quickmath::sqrt;
///
/// assert!((sqrt(4.0_f32) - 2.0).abs() < 1e-4);
/// assert!((sqrt(2.0_f64) - 1.414_213_56).abs() < 1e-4);
/// ```
#[inline(always)]
pub fn sqrt<F: FastFloat>(x: F) -> F {
    x.fast_sqrt()
}

/// Truncates toward zero through a cast to `i64`
///
/// Magnitudes beyond `i64::MAX` saturate.
#[inline(always)]
pub fn trunc<F: FastFloat>(x: F) -> F {
    let whole = <F as AsPrimitive<i64>>::as_(x);
    F::from_i64(whole)
}

/// Floating-point remainder `x - trunc(x / y) * y`
///
/// The result carries the sign of `x`.
///
/// # Example
///
/// ```rust
/// use quickmath::fmod;
///
/// assert_eq!(fmod(7.5_f32, 2.0), 1.5);
/// assert_eq!(fmod(-7.5_f64, 2.0), -1.5);
/// ```
#[inline(always)]
pub fn fmod<F: FastFloat>(x: F, y: F) -> F {
    x - trunc(x / y) * y
}

/// Rounds half up to an `i32` (saturating)
///
/// Negative inputs round toward zero past the halfway point: `round(-1.5) == -1`.
#[inline(always)]
pub fn round<F: FastFloat>(x: F) -> i32 {
    <F as AsPrimitive<i32>>::as_(x + F::HALF)
}

/// Rounds half up to a `u32`
///
/// Only meaningful for non-negative input; negative values saturate to `0`.
#[inline(always)]
pub fn round_u<F: FastFloat>(x: F) -> u32 {
    <F as AsPrimitive<u32>>::as_(x + F::HALF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_min_integers_and_floats() {
        assert_eq!(max(1, 2), 2);
        assert_eq!(max(2_u8, 1), 2);
        assert_eq!(min(1_i64, -2), -2);
        assert_eq!(min(0.5_f64, 0.25), 0.25);
        assert_eq!(max(-0.5_f32, -0.25), -0.25);
    }

    #[test]
    fn test_abs_signed_types() {
        assert_eq!(abs(-3_i8), 3);
        assert_eq!(abs(3_i64), 3);
        assert_eq!(abs(-2.5_f32), 2.5);
        assert_eq!(abs(0.0_f64), 0.0);
    }

    #[test]
    fn test_trunc_toward_zero() {
        assert_eq!(trunc(2.9_f32), 2.0);
        assert_eq!(trunc(-2.9_f32), -2.0);
        assert_eq!(trunc(1e15_f64 + 0.5), 1e15);
        assert_eq!(trunc(0.999_f64), 0.0);
    }

    #[test]
    fn test_fmod_sign_follows_dividend() {
        assert_eq!(fmod(5.0_f64, 3.0), 2.0);
        assert_eq!(fmod(-5.0_f64, 3.0), -2.0);
        assert_eq!(fmod(5.0_f32, -3.0), 2.0);
        assert_eq!(fmod(1.0_f32, 2.0), 1.0);
    }

    #[test]
    fn test_fmod_two_pi() {
        let tau = core::f64::consts::TAU;
        let reduced = fmod(3.0 * tau + 1.0, tau);
        assert!((reduced - 1.0).abs() < 1e-12, "reduced: {}", reduced);
    }

    #[test]
    fn test_round_variants() {
        assert_eq!(round(2.5_f32), 3);
        assert_eq!(round(2.49_f64), 2);
        assert_eq!(round(-1.5_f64), -1);
        assert_eq!(round_u(7.5_f32), 8);
        assert_eq!(round_u(0.2_f64), 0);
    }

    #[test]
    fn test_round_saturates() {
        assert_eq!(round(1e20_f64), i32::MAX);
        assert_eq!(round_u(-10.0_f32), 0);
    }

    #[test]
    fn test_sqrt_dispatch() {
        let root = sqrt(9.0_f64);
        assert!((root - 3.0).abs() < 1e-4, "sqrt(9) = {}", root);
    }
}
