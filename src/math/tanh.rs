//! Hyperbolic tangent approximation
//!
//! Degree-3/degree-3 rational fit on `x >= 0`, mirrored for negative input
//! (`tanh(-x) = -tanh(x)`). No periodic reduction is involved.
//!
//! # Error Bounds
//!
//! - `[-3, 3]`: <3e-5 absolute
//! - `tanh(0)` is `-2.7e-5`, not exactly zero (the fit has a constant term)
//! - Not clamped: beyond `|x| ≈ 4` the fit drifts above 1 and tends to
//!   `±1.168`. Clamp at the call site if saturation matters.
#![allow(clippy::excessive_precision)]

#[inline(always)]
fn tanh_positive_f32(a: f32) -> f32 {
    let numerator = -0.674_368_118_32e-5
        + (0.246_814_911_071_204_0 + (0.058_369_106_639_517_5 + 0.033_573_350_442_800_75 * a) * a)
            * a;
    let denominator = 0.246_484_598_638_372_5
        + (0.060_934_719_706_049_1 + (0.108_620_259_922_857_2 + 0.028_747_079_224_759_63 * a) * a)
            * a;
    numerator / denominator
}

#[inline(always)]
fn tanh_positive_f64(a: f64) -> f64 {
    let numerator = -0.674_368_118_32e-5
        + (0.246_814_911_071_204_0 + (0.058_369_106_639_517_5 + 0.033_573_350_442_800_75 * a) * a)
            * a;
    let denominator = 0.246_484_598_638_372_5
        + (0.060_934_719_706_049_1 + (0.108_620_259_922_857_2 + 0.028_747_079_224_759_63 * a) * a)
            * a;
    numerator / denominator
}

/// Fast tanh(x) for `f32`
///
/// # Example
///
/// ```rust
/// use quickmath::math::tanh::tanh_f32;
///
/// // Soft clipping of a sample
/// let clipped = tanh_f32(0.8);
/// assert!((clipped - 0.664_036_8).abs() < 1e-4);
/// ```
#[inline]
pub fn tanh_f32(x: f32) -> f32 {
    if x < 0.0 {
        -tanh_positive_f32(-x)
    } else {
        tanh_positive_f32(x)
    }
}

/// Fast tanh(x) for `f64`
#[inline]
pub fn tanh_f64(x: f64) -> f64 {
    if x < 0.0 {
        -tanh_positive_f64(-x)
    } else {
        tanh_positive_f64(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tanh_near_zero() {
        assert!(tanh_f64(0.0).abs() < 1e-4);
        assert!(tanh_f32(0.0).abs() < 1e-4);
    }

    #[test]
    fn test_tanh_odd() {
        for i in 1..100 {
            let x = i as f64 * 0.05;
            assert_eq!(tanh_f64(-x), -tanh_f64(x), "tanh(±{})", x);
            assert_eq!(tanh_f32(-x as f32), -tanh_f32(x as f32), "tanhf(±{})", x);
        }
    }

    #[test]
    fn test_tanh_against_reference() {
        let mut x = -3.0_f64;
        while x <= 3.0 {
            let error = (tanh_f64(x) - libm::tanh(x)).abs();
            assert!(error < 1e-4, "tanh({}) error: {}", x, error);
            let error = (tanh_f32(x as f32) - libm::tanhf(x as f32)).abs();
            assert!(error < 1e-4, "tanhf({}) error: {}", x, error);
            x += 0.01;
        }
    }

    #[test]
    fn test_tanh_not_clamped() {
        // Documented drift: large input exceeds 1
        assert!(tanh_f64(100.0) > 1.0);
        assert!(tanh_f64(-100.0) < -1.0);
    }
}
