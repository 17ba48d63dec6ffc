//! Power function approximations
//!
//! `pow2` and `pow10` split on whether the exponent is an exact integer:
//!
//! - Integer exponent: repeated multiplication by the base, reciprocal for
//!   negative exponents. Exact for every representable power of two and
//!   correctly rounded per step for powers of ten.
//! - Fractional exponent: `exp(x * ln(base))`, inheriting the error of
//!   [`crate::math::exp`].
//!
//! `pow(base, exponent)` is `pow2(exponent * log2(base))`, so it carries the
//! error of both [`crate::math::log`] and the fractional `pow2` path.
//!
//! # Performance
//!
//! The integer path is linear in `|x|`. The loop stops as soon as the
//! accumulated power overflows to `∞`, so it runs at most ~128 (`f32`) or
//! ~1024 (`f64`) iterations for base 2 and far fewer for base 10.
//!
//! # Domain
//!
//! `pow` requires `base > 0`; other bases give an unspecified result.

use super::exp::{exp_f32, exp_f64};
use super::log::{log2_f32, log2_f64, LN_10_F32, LN_10_F64, LN_2_F32, LN_2_F64};

/// `base^|integer|` by repeated multiplication, stopping once it overflows
#[inline(always)]
fn integer_power_f32(base: f32, integer: i32) -> f32 {
    let mut out = 1.0_f32;
    for _ in 0..integer.unsigned_abs() {
        out *= base;
        if out.is_infinite() {
            break;
        }
    }
    if integer < 0 {
        1.0 / out
    } else {
        out
    }
}

#[inline(always)]
fn integer_power_f64(base: f64, integer: i32) -> f64 {
    let mut out = 1.0_f64;
    for _ in 0..integer.unsigned_abs() {
        out *= base;
        if out.is_infinite() {
            break;
        }
    }
    if integer < 0 {
        1.0 / out
    } else {
        out
    }
}

/// Fast 2^x for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::pow::pow2_f32;
///
/// assert_eq!(pow2_f32(3.0), 8.0);
/// assert_eq!(pow2_f32(-2.0), 0.25);
/// assert!((pow2_f32(0.5) - core::f32::consts::SQRT_2).abs() < 1e-5);
/// ```
#[inline]
pub fn pow2_f32(x: f32) -> f32 {
    let integer = x as i32;
    if integer as f32 != x {
        // Fractional, NaN, or too large for the integer path
        return exp_f32(x * LN_2_F32);
    }
    integer_power_f32(2.0, integer)
}

/// Fast 2^x for `f64`
#[inline]
pub fn pow2_f64(x: f64) -> f64 {
    let integer = x as i32;
    if integer as f64 != x {
        return exp_f64(x * LN_2_F64);
    }
    integer_power_f64(2.0, integer)
}

/// Fast 10^x for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::pow::pow10_f32;
///
/// assert_eq!(pow10_f32(3.0), 1000.0);
/// assert!((pow10_f32(-2.0) - 0.01).abs() < 1e-7);
/// ```
#[inline]
pub fn pow10_f32(x: f32) -> f32 {
    let integer = x as i32;
    if integer as f32 != x {
        return exp_f32(x * LN_10_F32);
    }
    integer_power_f32(10.0, integer)
}

/// Fast 10^x for `f64`
#[inline]
pub fn pow10_f64(x: f64) -> f64 {
    let integer = x as i32;
    if integer as f64 != x {
        return exp_f64(x * LN_10_F64);
    }
    integer_power_f64(10.0, integer)
}

/// Fast base^exponent for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::pow::pow_f32;
///
/// let squared = pow_f32(3.5, 2.0);
/// assert!((squared - 12.25).abs() < 0.01);
/// ```
#[inline]
pub fn pow_f32(base: f32, exponent: f32) -> f32 {
    pow2_f32(exponent * log2_f32(base))
}

/// Fast base^exponent for `f64`
#[inline]
pub fn pow_f64(base: f64, exponent: f64) -> f64 {
    pow2_f64(exponent * log2_f64(base))
}
