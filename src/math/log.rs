//! Logarithm approximations
//!
//! Built on a Padé approximant of `ln(1 + t)` that is accurate for
//! `t ∈ (-0.5, 5)`. Arguments outside that band are scaled into it with the
//! product rule:
//!
//! ```text
//! ln(x) = ln(x / 6)   + ln(6)      while x - 1 >= 5
//! ln(x) = ln(x / 0.5) + ln(0.5)    while x - 1 <= -0.5
//! ```
#![allow(clippy::excessive_precision)]
//!
//! # Error Bounds
//!
//! - Maximum absolute error: ~4.2e-4 (worst just below `t = 5`)
//! - Error does not accumulate with the number of scaling steps: the boundary
//!   logarithms are stored to full precision
//!
//! # Domain
//!
//! `x` must be positive. `x <= 0` never leaves the lower scaling loop, so the
//! loop is capped ([`MAX_LN_STEPS_F32`], [`MAX_LN_STEPS_F64`]) and the result
//! is an unspecified value (finite for zero, NaN once a negative argument
//! overflows during scaling).

/// Maximum scaling steps for `f32`; covers the full range down to subnormals
pub const MAX_LN_STEPS_F32: u32 = 256;

/// Maximum scaling steps for `f64`; covers the full range down to subnormals
pub const MAX_LN_STEPS_F64: u32 = 2048;

/// Upper edge of the accurate band of `ln(1 + t)`
const BAND_HIGH: f64 = 5.0;

/// Lower edge of the accurate band of `ln(1 + t)`
const BAND_LOW: f64 = -0.5;

pub(crate) const LN_2_F32: f32 = 0.693_147_180_559_945_309_417_232_121_458_176_568;
pub(crate) const LN_10_F32: f32 = 2.302_585_092_994_045_684_017_991_454_684_364_208;
const LN_6_F32: f32 = 1.791_759_469_228_055_000_812_477_358_380_702_272;

pub(crate) const LN_2_F64: f64 = 0.693_147_180_559_945_309_417_232_121_458_176_568;
pub(crate) const LN_10_F64: f64 = 2.302_585_092_994_045_684_017_991_454_684_364_208;
const LN_6_F64: f64 = 1.791_759_469_228_055_000_812_477_358_380_702_272;

/// Padé approximant of `ln(1 + t)`, accurate for `t ∈ (-0.5, 5)`
#[inline(always)]
fn ln_x_plus_1_f32(t: f32) -> f32 {
    let numerator = t * (7560.0 + t * (15120.0 + t * (9870.0 + t * (2310.0 + t * 137.0))));
    let denominator =
        7560.0 + t * (18900.0 + t * (16800.0 + t * (6300.0 + t * (900.0 + 30.0 * t))));
    numerator / denominator
}

/// Padé approximant of `ln(1 + t)`, accurate for `t ∈ (-0.5, 5)`
#[inline(always)]
fn ln_x_plus_1_f64(t: f64) -> f64 {
    let numerator = t * (7560.0 + t * (15120.0 + t * (9870.0 + t * (2310.0 + t * 137.0))));
    let denominator =
        7560.0 + t * (18900.0 + t * (16800.0 + t * (6300.0 + t * (900.0 + 30.0 * t))));
    numerator / denominator
}

/// Fast natural logarithm for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::log::ln_f32;
///
/// let ln_1000 = ln_f32(1000.0);
/// assert!((ln_1000 - 6.907_755).abs() < 1e-3);
/// ```
#[inline]
pub fn ln_f32(x: f32) -> f32 {
    let high = BAND_HIGH as f32;
    let low = BAND_LOW as f32;

    let mut reduced = x;
    let mut offset = 0.0_f32;
    let mut steps = 0;

    while reduced - 1.0 >= high && steps < MAX_LN_STEPS_F32 {
        reduced /= high + 1.0;
        offset += LN_6_F32;
        steps += 1;
    }
    while reduced - 1.0 <= low && steps < MAX_LN_STEPS_F32 {
        reduced /= low + 1.0;
        offset -= LN_2_F32;
        steps += 1;
    }

    offset + ln_x_plus_1_f32(reduced - 1.0)
}

/// Fast natural logarithm for `f64`
#[inline]
pub fn ln_f64(x: f64) -> f64 {
    let mut reduced = x;
    let mut offset = 0.0_f64;
    let mut steps = 0;

    while reduced - 1.0 >= BAND_HIGH && steps < MAX_LN_STEPS_F64 {
        reduced /= BAND_HIGH + 1.0;
        offset += LN_6_F64;
        steps += 1;
    }
    while reduced - 1.0 <= BAND_LOW && steps < MAX_LN_STEPS_F64 {
        reduced /= BAND_LOW + 1.0;
        offset -= LN_2_F64;
        steps += 1;
    }

    offset + ln_x_plus_1_f64(reduced - 1.0)
}

/// Fast log₂(x) for `f32`
#[inline]
pub fn log2_f32(x: f32) -> f32 {
    ln_f32(x) / LN_2_F32
}

/// Fast log₂(x) for `f64`
#[inline]
pub fn log2_f64(x: f64) -> f64 {
    ln_f64(x) / LN_2_F64
}

/// Fast log₁₀(x) for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::log::log10_f32;
///
/// // Amplitude to decibels
/// let db = 20.0 * log10_f32(0.5);
/// assert!((db - (-6.0206)).abs() < 0.01);
/// ```
#[inline]
pub fn log10_f32(x: f32) -> f32 {
    ln_f32(x) / LN_10_F32
}

/// Fast log₁₀(x) for `f64`
#[inline]
pub fn log10_f64(x: f64) -> f64 {
    ln_f64(x) / LN_10_F64
}
