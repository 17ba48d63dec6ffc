//! Opt-in validating wrappers
//!
//! The kernels at the crate root never validate their input: `ln(-1.0)` or
//! `pow(-2.0, 0.5)` return an unspecified value instead of failing. The
//! functions here check the mathematical domain first, and check the result
//! for overflow afterwards, reporting violations as [`InvalidDomain`]. On
//! success they return exactly what the unchecked function returns.
//!
//! Rejections are logged at `debug` level through the [`log`] facade.
//!
//! # Example
//!
//! ```rust
//! use quickmath::checked::{self, InvalidDomain};
//!
//! assert!(matches!(
//!     checked::sqrt(-4.0_f64),
//!     Err(InvalidDomain::Negative { operation: "sqrt", .. })
//! ));
//! assert_eq!(checked::pow2(3.0_f32), Ok(8.0));
//! ```

use num_traits::AsPrimitive;
use thiserror::Error;

use crate::traits::FastFloat;

/// A checked call whose argument lies outside the function's domain
///
/// `argument` is the offending input widened to `f64`.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidDomain {
    /// Argument must be strictly positive
    #[error("{operation} requires a positive argument, got {argument}")]
    NonPositive {
        /// Name of the rejected operation
        operation: &'static str,
        /// Offending argument
        argument: f64,
    },
    /// Argument must not be negative
    #[error("{operation} requires a non-negative argument, got {argument}")]
    Negative {
        /// Name of the rejected operation
        operation: &'static str,
        /// Offending argument
        argument: f64,
    },
    /// Argument is NaN or infinite
    #[error("{operation} requires a finite argument, got {argument}")]
    NotFinite {
        /// Name of the rejected operation
        operation: &'static str,
        /// Offending argument
        argument: f64,
    },
    /// Result does not fit the floating-point width
    #[error("{operation} overflows for argument {argument}")]
    Overflow {
        /// Name of the rejected operation
        operation: &'static str,
        /// Offending argument
        argument: f64,
    },
}

impl InvalidDomain {
    /// Name of the operation that rejected its argument
    pub fn operation(&self) -> &'static str {
        match *self {
            InvalidDomain::NonPositive { operation, .. }
            | InvalidDomain::Negative { operation, .. }
            | InvalidDomain::NotFinite { operation, .. }
            | InvalidDomain::Overflow { operation, .. } => operation,
        }
    }

    /// The rejected argument, widened to `f64`
    pub fn argument(&self) -> f64 {
        match *self {
            InvalidDomain::NonPositive { argument, .. }
            | InvalidDomain::Negative { argument, .. }
            | InvalidDomain::NotFinite { argument, .. }
            | InvalidDomain::Overflow { argument, .. } => argument,
        }
    }
}

/// Result of a checked call
pub type Result<T> = core::result::Result<T, InvalidDomain>;

#[inline]
fn widen<F: FastFloat>(x: F) -> f64 {
    <F as AsPrimitive<f64>>::as_(x)
}

fn reject<T>(error: InvalidDomain) -> Result<T> {
    log::debug!("rejected {}({}): {}", error.operation(), error.argument(), error);
    Err(error)
}

#[inline]
fn require_finite<F: FastFloat>(operation: &'static str, x: F) -> Result<()> {
    if x.is_finite() {
        Ok(())
    } else {
        reject(InvalidDomain::NotFinite {
            operation,
            argument: widen(x),
        })
    }
}

#[inline]
fn require_positive<F: FastFloat>(operation: &'static str, x: F) -> Result<()> {
    require_finite(operation, x)?;
    if x > F::zero() {
        Ok(())
    } else {
        reject(InvalidDomain::NonPositive {
            operation,
            argument: widen(x),
        })
    }
}

#[inline]
fn require_no_overflow<F: FastFloat>(operation: &'static str, argument: F, result: F) -> Result<F> {
    if result.is_finite() {
        Ok(result)
    } else {
        reject(InvalidDomain::Overflow {
            operation,
            argument: widen(argument),
        })
    }
}

/// Checked [`crate::sqrt`]: rejects negative and non-finite input
pub fn sqrt<F: FastFloat>(x: F) -> Result<F> {
    require_finite("sqrt", x)?;
    if x < F::zero() {
        return reject(InvalidDomain::Negative {
            operation: "sqrt",
            argument: widen(x),
        });
    }
    Ok(x.fast_sqrt())
}

/// Checked [`crate::exp`]: rejects non-finite input and overflowing results
///
/// Underflow to zero is not an error.
pub fn exp<F: FastFloat>(x: F) -> Result<F> {
    require_finite("exp", x)?;
    if x > F::MAX_LN {
        return reject(InvalidDomain::Overflow {
            operation: "exp",
            argument: widen(x),
        });
    }
    require_no_overflow("exp", x, x.fast_exp())
}

/// Checked [`crate::ln`]: rejects `x <= 0` and non-finite input
pub fn ln<F: FastFloat>(x: F) -> Result<F> {
    require_positive("ln", x)?;
    Ok(x.fast_ln())
}

/// Checked [`crate::log2`]
pub fn log2<F: FastFloat>(x: F) -> Result<F> {
    require_positive("log2", x)?;
    Ok(x.fast_log2())
}

/// Checked [`crate::log10`]
pub fn log10<F: FastFloat>(x: F) -> Result<F> {
    require_positive("log10", x)?;
    Ok(x.fast_log10())
}

/// Checked [`crate::pow2`]
pub fn pow2<F: FastFloat>(x: F) -> Result<F> {
    require_finite("pow2", x)?;
    require_no_overflow("pow2", x, x.fast_pow2())
}

/// Checked [`crate::pow10`]
pub fn pow10<F: FastFloat>(x: F) -> Result<F> {
    require_finite("pow10", x)?;
    require_no_overflow("pow10", x, x.fast_pow10())
}

/// Checked [`crate::pow`]: requires a positive finite base and a finite exponent
///
/// An overflow reports the exponent as the offending argument.
pub fn pow<F: FastFloat>(base: F, exponent: F) -> Result<F> {
    require_positive("pow", base)?;
    require_finite("pow", exponent)?;
    require_no_overflow("pow", exponent, base.fast_pow(exponent))
}
