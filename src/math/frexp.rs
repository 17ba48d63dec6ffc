//! Mantissa/exponent decomposition via IEEE 754 bit manipulation
//!
//! Splits `x` into `mantissa * 2^exponent` with `|mantissa| ∈ [0.5, 1)`.
//!
//! # Algorithm
//!
//! ```text
//! biased = (bits >> MANTISSA_BITS) & EXPONENT_MASK
//! exponent = biased - (BIAS - 1)
//! mantissa bits = (bits & (SIGN | MANTISSA)) | bits(0.5)
//! ```
//!
//! Forcing the exponent field to that of `0.5` keeps the sign and fraction
//! bits and lands the mantissa in `[0.5, 1)`.
//!
//! # Special Values
//!
//! - `±0` → `(±0, 0)`
//! - Subnormals are scaled by 2^64 first, then the exponent is corrected
//! - `±∞`, NaN → returned unchanged with exponent `0`

/// 2^64, the subnormal rescale factor for `f32`
const TWO_POW_64_F32: f32 = 18_446_744_073_709_551_616.0;

/// 2^64, the subnormal rescale factor for `f64`
const TWO_POW_64_F64: f64 = 18_446_744_073_709_551_616.0;

/// Decomposes an `f32` into `(mantissa, exponent)`
///
/// # Example
///
/// ```rust
/// use quickmath::math::frexp::frexp_f32;
///
/// assert_eq!(frexp_f32(1.0), (0.5, 1));
/// assert_eq!(frexp_f32(0.0), (0.0, 0));
/// assert_eq!(frexp_f32(-6.0), (-0.75, 3));
/// ```
#[inline]
pub fn frexp_f32(x: f32) -> (f32, i32) {
    let bits = x.to_bits();
    let biased = ((bits >> 23) & 0xff) as i32;

    if biased == 0 {
        if x == 0.0 {
            return (x, 0);
        }
        // Subnormal: scaled value is normal, so this recurses exactly once
        let (mantissa, exponent) = frexp_f32(x * TWO_POW_64_F32);
        return (mantissa, exponent - 64);
    }
    if biased == 0xff {
        return (x, 0);
    }

    let mantissa_bits = (bits & 0x807f_ffff) | 0x3f00_0000;
    (f32::from_bits(mantissa_bits), biased - 0x7e)
}

/// Decomposes an `f64` into `(mantissa, exponent)`
///
/// # Example
///
/// ```rust
/// use quickmath::math::frexp::frexp_f64;
///
/// assert_eq!(frexp_f64(1.0), (0.5, 1));
/// assert_eq!(frexp_f64(0.1), (0.8, -3));
/// ```
#[inline]
pub fn frexp_f64(x: f64) -> (f64, i32) {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;

    if biased == 0 {
        if x == 0.0 {
            return (x, 0);
        }
        let (mantissa, exponent) = frexp_f64(x * TWO_POW_64_F64);
        return (mantissa, exponent - 64);
    }
    if biased == 0x7ff {
        return (x, 0);
    }

    let mantissa_bits = (bits & 0x800f_ffff_ffff_ffff) | 0x3fe0_0000_0000_0000;
    (f64::from_bits(mantissa_bits), biased - 0x3fe)
}
