//! Bit-trick square root
//!
//! Classic magic-number inverse square root: reinterpret the float's bits as a
//! signed integer, subtract half of it from a tuned constant to get a first
//! guess of 1/√x, refine with two Newton steps, then multiply by `x`.
//!
//! # Error Bounds
//!
//! - Maximum relative error: ~4.7e-6 for positive normal input (both widths)
//! - `sqrt(0) == 0`
//! - Negative, subnormal, infinite and NaN input give unspecified results
//!
//! The magic constants are empirical and must not be changed.

/// Initial-guess constant for `f32`
pub const MAGIC_F32: i32 = 0x5F37_5A86;

/// Initial-guess constant for `f64`
pub const MAGIC_F64: i64 = 0x5FE6_EC85_E7DE_30DA;

/// Fast √x for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::sqrt::sqrt_f32;
///
/// assert!((sqrt_f32(16.0) - 4.0).abs() < 1e-4);
/// ```
#[inline(always)]
pub fn sqrt_f32(x: f32) -> f32 {
    let x_half = 0.5 * x;
    let bits = x.to_bits() as i32;
    let mut y = f32::from_bits(MAGIC_F32.wrapping_sub(bits >> 1) as u32);

    y *= 1.5 - x_half * y * y;
    y *= 1.5 - x_half * y * y;

    x * y
}

/// Fast √x for `f64`
///
/// Same shape as [`sqrt_f32`], so it stays at ~5 significant digits despite
/// the wider type.
#[inline(always)]
pub fn sqrt_f64(x: f64) -> f64 {
    let x_half = 0.5 * x;
    let bits = x.to_bits() as i64;
    let mut y = f64::from_bits(MAGIC_F64.wrapping_sub(bits >> 1) as u64);

    y *= 1.5 - x_half * y * y;
    y *= 1.5 - x_half * y * y;

    x * y
}
