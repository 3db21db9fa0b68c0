//! Trigonometric functions, generic over the [`Backend`] that supplies sine
//! and arctangent.
//!
//! Cosine and tangent reuse sine, arcsine and arccosine reuse arctangent, so a
//! size-optimized build carries exactly two series kernels.

use core::f64::consts::FRAC_PI_2;

use crate::backend::Backend;
use crate::power::sqrt;

/// Sine of `theta` radians.
#[inline]
pub fn sin<B: Backend>(theta: f64) -> f64 {
    B::sin(theta)
}

/// Cosine of `theta` radians, as `sin(theta + PI/2)`.
#[inline]
pub fn cos<B: Backend>(theta: f64) -> f64 {
    B::sin(theta + FRAC_PI_2)
}

/// Tangent of `theta` radians, as `sin(theta) / sin(theta + PI/2)`.
///
/// A zero denominator gives a signed infinity.
#[inline]
pub fn tan<B: Backend>(theta: f64) -> f64 {
    B::sin(theta) / B::sin(theta + FRAC_PI_2)
}

/// Arctangent of `x`.
#[inline]
pub fn atan<B: Backend>(x: f64) -> f64 {
    B::atan(x)
}

/// Arcsine of `x`, as `atan(x / sqrt(1 - x^2))`. NaN outside `[-1, 1]`.
#[inline]
pub fn asin<B: Backend>(x: f64) -> f64 {
    B::atan(x / sqrt(1.0 - x * x))
}

/// Arccosine of `x`, as `atan(sqrt(1 - x^2) / x)`. NaN outside `[-1, 1]`.
///
/// The result is only the principal value for `x >= 0`. For negative `x` it
/// is that value minus `PI`, in `(-PI/2, 0)`. At `x == 0` the quotient is
/// infinite and the result is `PI/2` (or `-PI/2` for `-0.0`).
#[inline]
pub fn acos<B: Backend>(x: f64) -> f64 {
    B::atan(sqrt(1.0 - x * x) / x)
}

/// Angle of the point `(x, y)`, in `[-PI, PI]`.
#[cfg(not(feature = "size-optimized"))]
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}
