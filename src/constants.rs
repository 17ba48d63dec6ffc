//! π-derived constants per floating-point width
//!
//! Each width carries its own table so the reduction steps in [`crate::math`]
//! use values rounded once to the target precision.

/// Compile-time table of π fractions used by the trigonometric kernels
///
/// # Example
///
/// ```rust
/// use quickmath::Constants;
///
/// assert_eq!(<f32 as Constants>::PI_OVER_2, core::f32::consts::FRAC_PI_2);
/// assert_eq!(<f64 as Constants>::TWO_PI, core::f64::consts::TAU);
/// ```
pub trait Constants: Copy {
    /// π
    const PI: Self;
    /// 2π
    const TWO_PI: Self;
    /// 2/π
    const TWO_OVER_PI: Self;
    /// π/2
    const PI_OVER_2: Self;
    /// 3π/2
    const THREE_PI_OVER_2: Self;
    /// 4/π
    const FOUR_OVER_PI: Self;
    /// π/4
    const PI_OVER_4: Self;
    /// π/6
    const PI_OVER_6: Self;
    /// π/12
    const PI_OVER_12: Self;
    /// Positive infinity
    const INFINITY: Self;
}

impl Constants for f32 {
    const PI: f32 = core::f32::consts::PI;
    const TWO_PI: f32 = 2.0 * core::f32::consts::PI;
    const TWO_OVER_PI: f32 = 2.0 / core::f32::consts::PI;
    const PI_OVER_2: f32 = core::f32::consts::PI / 2.0;
    const THREE_PI_OVER_2: f32 = 3.0 * (core::f32::consts::PI / 2.0);
    const FOUR_OVER_PI: f32 = 4.0 / core::f32::consts::PI;
    const PI_OVER_4: f32 = core::f32::consts::PI / 4.0;
    const PI_OVER_6: f32 = core::f32::consts::PI / 6.0;
    const PI_OVER_12: f32 = core::f32::consts::PI / 12.0;
    const INFINITY: f32 = f32::INFINITY;
}

impl Constants for f64 {
    const PI: f64 = core::f64::consts::PI;
    const TWO_PI: f64 = 2.0 * core::f64::consts::PI;
    const TWO_OVER_PI: f64 = 2.0 / core::f64::consts::PI;
    const PI_OVER_2: f64 = core::f64::consts::PI / 2.0;
    const THREE_PI_OVER_2: f64 = 3.0 * (core::f64::consts::PI / 2.0);
    const FOUR_OVER_PI: f64 = 4.0 / core::f64::consts::PI;
    const PI_OVER_4: f64 = core::f64::consts::PI / 4.0;
    const PI_OVER_6: f64 = core::f64::consts::PI / 6.0;
    const PI_OVER_12: f64 = core::f64::consts::PI / 12.0;
    const INFINITY: f64 = f64::INFINITY;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants_agree_with_core() {
        assert_eq!(<f32 as Constants>::TWO_PI, core::f32::consts::TAU);
        assert_eq!(<f64 as Constants>::TWO_PI, core::f64::consts::TAU);
        assert_eq!(<f32 as Constants>::PI_OVER_4, core::f32::consts::FRAC_PI_4);
        assert!((<f64 as Constants>::PI_OVER_6 - core::f64::consts::FRAC_PI_6).abs() < 1e-15);
        assert!((<f64 as Constants>::TWO_OVER_PI - core::f64::consts::FRAC_2_PI).abs() < 1e-15);
    }

    #[test]
    fn test_reciprocal_pairs() {
        let product = <f64 as Constants>::FOUR_OVER_PI * <f64 as Constants>::PI_OVER_4;
        assert!((product - 1.0).abs() < 1e-15, "4/π · π/4 = {}", product);

        let product = <f32 as Constants>::TWO_OVER_PI * <f32 as Constants>::PI_OVER_2;
        assert!((product - 1.0).abs() < 1e-6, "2/π · π/2 = {}", product);
    }

    #[test]
    fn test_three_pi_over_two() {
        let expected = 1.5 * core::f64::consts::PI;
        assert!((<f64 as Constants>::THREE_PI_OVER_2 - expected).abs() < 1e-15);
        assert!(<f32 as Constants>::INFINITY.is_infinite());
    }
}
