//! Exponential function approximation
//!
//! Uses a Padé[4/4] rational approximant that is only accurate on a narrow
//! window, plus an additive range reduction that walks the argument into that
//! window in steps of 2.
#![allow(clippy::excessive_precision)]
//!
//! # Algorithm
//!
//! ```text
//! exp(x) = exp(x - 2k) * (e^2)^k      for x > 2
//! exp(x) = exp(x + 2k) * (e^-2)^k     for x < -3
//! ```
//!
//! The reduction is a bounded loop rather than recursion: at most
//! [`MAX_EXP_STEPS_F32`] / [`MAX_EXP_STEPS_F64`] steps are taken, which
//! already covers every argument whose result is representable. Beyond the
//! cap the result has long since saturated to `0` or `∞`.
//!
//! # Error Bounds
//!
//! - `[-1, 1]`: <2e-7 relative
//! - `[-10, 10]`: <2e-3 relative (worst case just above every `-3 - 2k`,
//!   where the reduced argument sits at the lower edge of the window)
//! - NaN propagates; no clamping or overflow protection is applied

/// Maximum reduction steps for `f32` (|x| ≤ 128 is reduced fully)
pub const MAX_EXP_STEPS_F32: u32 = 64;

/// Maximum reduction steps for `f64` (|x| ≤ 1024 is reduced fully)
pub const MAX_EXP_STEPS_F64: u32 = 512;

/// Lower edge of the accurate window
const WINDOW_LOW: f64 = -3.0;

/// Upper edge of the accurate window
const WINDOW_HIGH: f64 = 2.0;

const E_SQUARED_F32: f32 = 7.389_056_098_930_650_227_230_427_460_575_007_813_180_3;
const E_MINUS_SQUARED_F32: f32 = 0.135_335_283_236_612_691_893_999_494_972_484_403_407_6;

const E_SQUARED_F64: f64 = 7.389_056_098_930_650_227_230_427_460_575_007_813_180_3;
const E_MINUS_SQUARED_F64: f64 = 0.135_335_283_236_612_691_893_999_494_972_484_403_407_6;

/// Padé[4/4] approximant of e^x, accurate on `[-3, 2]`
#[inline(always)]
fn exp_helper_f32(x: f32) -> f32 {
    let numerator = 1680.0 + x * (840.0 + x * (180.0 + x * (20.0 + x)));
    let denominator = 1680.0 + x * (-840.0 + x * (180.0 + x * (-20.0 + x)));
    numerator / denominator
}

/// Padé[4/4] approximant of e^x, accurate on `[-3, 2]`
#[inline(always)]
fn exp_helper_f64(x: f64) -> f64 {
    let numerator = 1680.0 + x * (840.0 + x * (180.0 + x * (20.0 + x)));
    let denominator = 1680.0 + x * (-840.0 + x * (180.0 + x * (-20.0 + x)));
    numerator / denominator
}

/// Fast e^x for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::exp::exp_f32;
///
/// // Envelope decay, the common audio case
/// let envelope = exp_f32(-2.0);
/// assert!((envelope - 0.135_335_28).abs() < 1e-5);
/// ```
#[inline]
pub fn exp_f32(x: f32) -> f32 {
    let low = WINDOW_LOW as f32;
    let high = WINDOW_HIGH as f32;

    let (step, multiplier) = if x < 0.0 {
        (-2.0, E_MINUS_SQUARED_F32)
    } else {
        (2.0, E_SQUARED_F32)
    };

    let mut reduced = x;
    let mut steps = 0;
    while (reduced < low || reduced > high) && steps < MAX_EXP_STEPS_F32 {
        reduced -= step;
        steps += 1;
    }

    let mut result = exp_helper_f32(reduced);
    for _ in 0..steps {
        result *= multiplier;
    }
    result
}

/// Fast e^x for `f64`
///
/// Same approximant as [`exp_f32`]; the wider type removes rounding noise but
/// not the approximation error of the Padé window.
#[inline]
pub fn exp_f64(x: f64) -> f64 {
    let (step, multiplier) = if x < 0.0 {
        (-2.0, E_MINUS_SQUARED_F64)
    } else {
        (2.0, E_SQUARED_F64)
    };

    let mut reduced = x;
    let mut steps = 0;
    while (reduced < WINDOW_LOW || reduced > WINDOW_HIGH) && steps < MAX_EXP_STEPS_F64 {
        reduced -= step;
        steps += 1;
    }

    let mut result = exp_helper_f64(reduced);
    for _ in 0..steps {
        result *= multiplier;
    }
    result
}
