//! Cosine, sine and tangent approximations
//!
//! Both approximants only see a reduced argument. The input is first wrapped
//! into `(-2π, 2π)` with [`crate::general::fmod`], then folded onto the
//! approximant's accurate interval by quadrant (cosine) or octant (tangent),
//! and the symmetry used for the fold is undone on the result.
//!
//! # Cosine
//!
//! Even minimax polynomial of degree 12 on `[0, π/2]`:
//!
//! ```text
//! quadrant 0:  cos(a) =  p(a)
//! quadrant 1:  cos(a) = -p(π - a)
//! quadrant 2:  cos(a) = -p(a - π)
//! quadrant 3:  cos(a) =  p(2π - a)
//! ```
//!
//! `sin(x)` is evaluated as `cos(π/2 - x)`.
//!
//! # Tangent
//!
//! Rational approximant `t(u) ≈ tan(u·π/4)` for `u ∈ [0, 1]`. The angle is
//! wrapped into `[0, 2π)` and each of the eight octants maps onto `t` through
//! a reflection, a reciprocal, or both.
#![allow(clippy::excessive_precision)]
//!
//! # Error Bounds
//!
//! - `cos`/`sin`: <1e-12 absolute for `f64`, <3e-6 absolute for `f32`
//! - `tan`: <1e-12 relative for `f64` away from the poles, ~1e-5 for `f32`
//!
//! # Special Values
//!
//! Infinite input leaves the quadrant/octant range after reduction and falls
//! through to the `0` fallback. NaN propagates.

use crate::constants::Constants;
use crate::general::fmod;

/// Even polynomial approximating cos(x) on `[0, π/2]`
#[inline(always)]
fn cos_helper_f32(x: f32) -> f32 {
    const C1: f32 = 0.999_999_999_999_251_82;
    const C2: f32 = -0.499_999_999_970_240_12;
    const C3: f32 = 0.041_666_666_473_384_543;
    const C4: f32 = -0.001_388_888_418_000_423;
    const C5: f32 = 0.000_024_801_040_648_455_8;
    const C6: f32 = -0.000_000_275_246_963_843_2;
    const C7: f32 = 0.000_000_001_990_785_685_4;

    let x2 = x * x;
    C1 + x2 * (C2 + x2 * (C3 + x2 * (C4 + x2 * (C5 + x2 * (C6 + C7 * x2)))))
}

/// Even polynomial approximating cos(x) on `[0, π/2]`
#[inline(always)]
fn cos_helper_f64(x: f64) -> f64 {
    const C1: f64 = 0.999_999_999_999_251_82;
    const C2: f64 = -0.499_999_999_970_240_12;
    const C3: f64 = 0.041_666_666_473_384_543;
    const C4: f64 = -0.001_388_888_418_000_423;
    const C5: f64 = 0.000_024_801_040_648_455_8;
    const C6: f64 = -0.000_000_275_246_963_843_2;
    const C7: f64 = 0.000_000_001_990_785_685_4;

    let x2 = x * x;
    C1 + x2 * (C2 + x2 * (C3 + x2 * (C4 + x2 * (C5 + x2 * (C6 + C7 * x2)))))
}

/// Rational approximant of tan(u·π/4) for `u ∈ [0, 1]`
#[inline(always)]
fn tan_helper_f32(u: f32) -> f32 {
    const C1: f32 = -34_287.466_257_735_956_810_962_4;
    const C2: f32 = 2_566.717_546_231_505_042_329_5;
    const C3: f32 = -26.536_637_195_173_132_543_8;
    const C4: f32 = -43_656.157_928_129_237_557_957_9;
    const C5: f32 = 12_244.483_955_674_742_692_779_3;
    const C6: f32 = -336.611_376_245_464_339_493;

    let u2 = u * u;
    u * (C1 + u2 * (C2 + u2 * C3)) / (C4 + u2 * (C5 + u2 * (C6 + u2)))
}

/// Rational approximant of tan(u·π/4) for `u ∈ [0, 1]`
#[inline(always)]
fn tan_helper_f64(u: f64) -> f64 {
    const C1: f64 = -34_287.466_257_735_956_810_962_4;
    const C2: f64 = 2_566.717_546_231_505_042_329_5;
    const C3: f64 = -26.536_637_195_173_132_543_8;
    const C4: f64 = -43_656.157_928_129_237_557_957_9;
    const C5: f64 = 12_244.483_955_674_742_692_779_3;
    const C6: f64 = -336.611_376_245_464_339_493;

    let u2 = u * u;
    u * (C1 + u2 * (C2 + u2 * C3)) / (C4 + u2 * (C5 + u2 * (C6 + u2)))
}

/// Fast cosine for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::trig::cos_f32;
///
/// assert!((cos_f32(0.0) - 1.0).abs() < 1e-6);
/// assert!((cos_f32(core::f32::consts::PI) + 1.0).abs() < 1e-5);
/// ```
#[inline]
pub fn cos_f32(angle: f32) -> f32 {
    let mut angle = fmod(angle, f32::TWO_PI);
    if angle < 0.0 {
        angle = -angle;
    }

    // Rounding can put an angle just below 2π on the boundary of quadrant 4
    match (angle * f32::TWO_OVER_PI) as i32 {
        0 => cos_helper_f32(angle),
        1 => -cos_helper_f32(f32::PI - angle),
        2 => -cos_helper_f32(angle - f32::PI),
        3 | 4 => cos_helper_f32(f32::TWO_PI - angle),
        _ => 0.0,
    }
}

/// Fast cosine for `f64`
#[inline]
pub fn cos_f64(angle: f64) -> f64 {
    let mut angle = fmod(angle, f64::TWO_PI);
    if angle < 0.0 {
        angle = -angle;
    }

    match (angle * f64::TWO_OVER_PI) as i32 {
        0 => cos_helper_f64(angle),
        1 => -cos_helper_f64(f64::PI - angle),
        2 => -cos_helper_f64(angle - f64::PI),
        3 | 4 => cos_helper_f64(f64::TWO_PI - angle),
        _ => 0.0,
    }
}

/// Fast sine for `f32`
#[inline]
pub fn sin_f32(angle: f32) -> f32 {
    cos_f32(f32::PI_OVER_2 - angle)
}

/// Fast sine for `f64`
#[inline]
pub fn sin_f64(angle: f64) -> f64 {
    cos_f64(f64::PI_OVER_2 - angle)
}

/// Fast tangent for `f32`
///
/// Poles at `π/2 + kπ` give large finite values or `±∞`.
///
/// # Example
///
/// ```rust
/// use quickmath::math::trig::tan_f32;
///
/// assert!((tan_f32(core::f32::consts::FRAC_PI_4) - 1.0).abs() < 1e-4);
/// ```
#[inline]
pub fn tan_f32(angle: f32) -> f32 {
    let mut angle = fmod(angle, f32::TWO_PI);
    if angle < 0.0 {
        angle += f32::TWO_PI;
    }
    let scale = f32::FOUR_OVER_PI;

    match (angle * scale) as i32 {
        0 => tan_helper_f32(angle * scale),
        1 => 1.0 / tan_helper_f32((f32::PI_OVER_2 - angle) * scale),
        2 => -1.0 / tan_helper_f32((angle - f32::PI_OVER_2) * scale),
        3 => -tan_helper_f32((f32::PI - angle) * scale),
        4 => tan_helper_f32((angle - f32::PI) * scale),
        5 => 1.0 / tan_helper_f32((f32::THREE_PI_OVER_2 - angle) * scale),
        6 => -1.0 / tan_helper_f32((angle - f32::THREE_PI_OVER_2) * scale),
        7 | 8 => -tan_helper_f32((f32::TWO_PI - angle) * scale),
        _ => 0.0,
    }
}

/// Fast tangent for `f64`
#[inline]
pub fn tan_f64(angle: f64) -> f64 {
    let mut angle = fmod(angle, f64::TWO_PI);
    if angle < 0.0 {
        angle += f64::TWO_PI;
    }
    let scale = f64::FOUR_OVER_PI;

    match (angle * scale) as i32 {
        0 => tan_helper_f64(angle * scale),
        1 => 1.0 / tan_helper_f64((f64::PI_OVER_2 - angle) * scale),
        2 => -1.0 / tan_helper_f64((angle - f64::PI_OVER_2) * scale),
        3 => -tan_helper_f64((f64::PI - angle) * scale),
        4 => tan_helper_f64((angle - f64::PI) * scale),
        5 => 1.0 / tan_helper_f64((f64::THREE_PI_OVER_2 - angle) * scale),
        6 => -1.0 / tan_helper_f64((angle - f64::THREE_PI_OVER_2) * scale),
        7 | 8 => -tan_helper_f64((f64::TWO_PI - angle) * scale),
        _ => 0.0,
    }
}
