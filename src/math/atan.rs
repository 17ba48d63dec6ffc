//! Arctangent approximation
//!
//! A rational approximant accurate on `[0, tan(π/12)]`, reached through three
//! independent reductions:
//!
//! ```text
//! sign:        atan(-x) = -atan(x)
//! complement:  atan(x)  = π/2 - atan(1/x)                       for x > 1
//! region:      atan(x)  = π/6 + atan((x - t) / (1 + t·x))        for x > tan(π/12), t = tan(π/6)
//! ```
//!
//! The corrections are undone in reverse order: region offset, complement,
//! then sign.
#![allow(clippy::excessive_precision)]
//!
//! # Error Bounds
//!
//! - Maximum absolute error: <2e-7 for `f32`, <1e-14 for `f64`
//! - `atan(±∞) = ±π/2`, NaN propagates

use crate::constants::Constants;

/// tan(π/12), upper edge of the approximant's accurate interval
const TAN_PI_OVER_12: f64 = 0.267_949_192_431_122_7;

/// tan(π/6), the region shift
const TAN_PI_OVER_6: f64 = 0.577_350_269_189_625_7;

#[inline(always)]
fn atan_helper_f32(x: f32) -> f32 {
    const C1: f32 = 48.701_070_044_048_983_84;
    const C2: f32 = 49.532_626_377_225_434_5;
    const C3: f32 = 9.406_042_442_316_24;
    const C4: f32 = 48.701_070_044_049_961_66;
    const C5: f32 = 65.766_316_390_895_629_9;
    const C6: f32 = 21.587_934_067_020_262;

    let x2 = x * x;
    x * (C1 + x2 * (C2 + x2 * C3)) / (C4 + x2 * (C5 + x2 * (C6 + x2)))
}

#[inline(always)]
fn atan_helper_f64(x: f64) -> f64 {
    const C1: f64 = 48.701_070_044_048_983_84;
    const C2: f64 = 49.532_626_377_225_434_5;
    const C3: f64 = 9.406_042_442_316_24;
    const C4: f64 = 48.701_070_044_049_961_66;
    const C5: f64 = 65.766_316_390_895_629_9;
    const C6: f64 = 21.587_934_067_020_262;

    let x2 = x * x;
    x * (C1 + x2 * (C2 + x2 * C3)) / (C4 + x2 * (C5 + x2 * (C6 + x2)))
}

/// Fast arctangent for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::atan::atan_f32;
///
/// assert!((atan_f32(1.0) - core::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// assert!((atan_f32(-1.0) + core::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// ```
#[inline]
pub fn atan_f32(x: f32) -> f32 {
    let tan_pi_over_12 = TAN_PI_OVER_12 as f32;
    let tan_pi_over_6 = TAN_PI_OVER_6 as f32;

    let mut x = x;
    let sign = x < 0.0;
    if sign {
        x = -x;
    }
    let complement = x > 1.0;
    if complement {
        x = 1.0 / x;
    }
    let region = x > tan_pi_over_12;
    if region {
        x = (x - tan_pi_over_6) / (1.0 + tan_pi_over_6 * x);
    }

    let mut y = atan_helper_f32(x);
    if region {
        y += f32::PI_OVER_6;
    }
    if complement {
        y = f32::PI_OVER_2 - y;
    }
    if sign {
        y = -y;
    }
    y
}

/// Fast arctangent for `f64`
#[inline]
pub fn atan_f64(x: f64) -> f64 {
    let mut x = x;
    let sign = x < 0.0;
    if sign {
        x = -x;
    }
    let complement = x > 1.0;
    if complement {
        x = 1.0 / x;
    }
    let region = x > TAN_PI_OVER_12;
    if region {
        x = (x - TAN_PI_OVER_6) / (1.0 + TAN_PI_OVER_6 * x);
    }

    let mut y = atan_helper_f64(x);
    if region {
        y += f64::PI_OVER_6;
    }
    if complement {
        y = f64::PI_OVER_2 - y;
    }
    if sign {
        y = -y;
    }
    y
}
