//! Width-specific approximation kernels
//!
//! Every kernel comes as an `_f32` and an `_f64` function. The generic entry
//! points at the crate root pick between them through [`crate::FastFloat`];
//! call these directly when the width is fixed anyway.
//!
//! # Modules
//!
//! - `sqrt`: magic-constant square root with two Newton steps
//! - `frexp`: mantissa/exponent split via IEEE 754 bit layout
//! - `exp`: Padé e^x with additive range reduction
//! - `log`: Padé ln(1 + t) with multiplicative range reduction, log₂, log₁₀
//! - `pow`: 2^x and 10^x with an exact integer path, general base^exponent
//! - `trig`: cosine, sine and tangent with quadrant/octant folding
//! - `atan`: arctangent with sign/complement/region reduction
//! - `tanh`: rational hyperbolic tangent
//!
//! # Example
//!
//! ```rust
//! use quickmath::math::{cos_f64, exp_f32, ln_f64};
//!
//! let envelope = exp_f32(-5.0 * 0.1);
//! let phase = cos_f64(0.25);
//! let octaves = ln_f64(880.0 / 440.0) / core::f64::consts::LN_2;
//!
//! assert!((envelope - 0.606_530_6).abs() < 1e-5);
//! assert!((phase - 0.968_912_4).abs() < 1e-6);
//! assert!((octaves - 1.0).abs() < 1e-3);
//! ```

pub mod atan;
pub mod exp;
pub mod frexp;
pub mod log;
pub mod pow;
pub mod sqrt;
pub mod tanh;
pub mod trig;

pub use self::atan::{atan_f32, atan_f64};
pub use self::exp::{exp_f32, exp_f64};
pub use self::frexp::{frexp_f32, frexp_f64};
pub use self::log::{ln_f32, ln_f64, log10_f32, log10_f64, log2_f32, log2_f64};
pub use self::pow::{pow10_f32, pow10_f64, pow2_f32, pow2_f64, pow_f32, pow_f64};
pub use self::sqrt::{sqrt_f32, sqrt_f64};
pub use self::tanh::{tanh_f32, tanh_f64};
pub use self::trig::{cos_f32, cos_f64, sin_f32, sin_f64, tan_f32, tan_f64};
