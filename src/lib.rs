#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! quickmath: fast scalar approximations of transcendental functions
//!
//! # Layout
//!
//! - [`constants`]: π-derived constants per floating-point width
//! - [`traits`]: the sealed [`FastFloat`] width tag (`f32` and `f64` only)
//! - [`general`]: min/max/abs, bit-trick `sqrt`, `trunc`, `fmod`, rounding
//! - [`math`]: width-specific kernels (`exp_f32`, `exp_f64`, ...)
//! - [`checked`]: opt-in validating wrappers returning [`checked::InvalidDomain`]
//!
//! The functions re-exported at the crate root are generic over [`FastFloat`]
//! and dispatch to the matching width-specific kernel at compile time.

#[cfg(test)]
extern crate std;

// Width tag and constant tables
pub mod constants;
pub mod traits;

// Numeric primitives
pub mod general;

// Approximation kernels
pub mod math;

// Validating wrappers
pub mod checked;

pub use constants::Constants;
pub use traits::FastFloat;

pub use general::{abs, fmod, max, min, round, round_u, sqrt, trunc};

/// Decomposes `x` into `(mantissa, exponent)` with `x = mantissa * 2^exponent`
///
/// The mantissa magnitude lies in `[0.5, 1)`. Zero returns `(x, 0)`, and
/// infinities and NaN are returned unchanged with exponent `0`.
///
/// # Example
///
/// ```rust
/// use quickmath::frexp;
///
/// assert_eq!(frexp(1.0_f32), (0.5, 1));
/// assert_eq!(frexp(-12.0_f64), (-0.75, 4));
/// ```
#[inline(always)]
pub fn frexp<F: FastFloat>(x: F) -> (F, i32) {
    x.fast_frexp()
}

/// Fast approximation of e^x
///
/// Out-of-window inputs are range reduced in steps of 2. See [`math::exp`].
#[inline(always)]
pub fn exp<F: FastFloat>(x: F) -> F {
    x.fast_exp()
}

/// Fast approximation of the natural logarithm
///
/// Requires `x > 0`; other inputs yield an unspecified value.
#[inline(always)]
pub fn ln<F: FastFloat>(x: F) -> F {
    x.fast_ln()
}

/// Fast approximation of log₂(x)
#[inline(always)]
pub fn log2<F: FastFloat>(x: F) -> F {
    x.fast_log2()
}

/// Fast approximation of log₁₀(x)
#[inline(always)]
pub fn log10<F: FastFloat>(x: F) -> F {
    x.fast_log10()
}

/// Fast approximation of 2^x, exact for integer `x`
#[inline(always)]
pub fn pow2<F: FastFloat>(x: F) -> F {
    x.fast_pow2()
}

/// Fast approximation of 10^x, exact for integer `x` within the width's precision
#[inline(always)]
pub fn pow10<F: FastFloat>(x: F) -> F {
    x.fast_pow10()
}

/// Fast approximation of base^exponent
///
/// Both arguments share one width. Requires `base > 0`.
///
/// # Example
///
/// ```rust
/// use quickmath::pow;
///
/// let squared = pow(3.5_f64, 2.0);
/// assert!((squared - 12.25).abs() < 1e-3);
/// ```
#[inline(always)]
pub fn pow<F: FastFloat>(base: F, exponent: F) -> F {
    base.fast_pow(exponent)
}

/// Fast approximation of cos(angle), angle in radians
#[inline(always)]
pub fn cos<F: FastFloat>(angle: F) -> F {
    angle.fast_cos()
}

/// Fast approximation of sin(angle), angle in radians
#[inline(always)]
pub fn sin<F: FastFloat>(angle: F) -> F {
    angle.fast_sin()
}

/// Fast approximation of tan(angle), angle in radians
#[inline(always)]
pub fn tan<F: FastFloat>(angle: F) -> F {
    angle.fast_tan()
}

/// Fast approximation of atan(x), result in radians
#[inline(always)]
pub fn atan<F: FastFloat>(x: F) -> F {
    x.fast_atan()
}

/// Fast approximation of the hyperbolic tangent
///
/// Accurate on `[-3, 3]`; see [`math::tanh`] for behaviour outside it.
#[inline(always)]
pub fn tanh<F: FastFloat>(x: F) -> F {
    x.fast_tanh()
}
