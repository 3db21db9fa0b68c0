//! Rounding and sign classification.

use num_traits::ToPrimitive;

/// Fractions at least this far from zero round away from it. Sits just below
/// one half so that values meant to be an exact `.5` but stored a hair under it
/// still round up.
const ROUND_HALF: f64 = 0.4999999999;

/// Whether `x` is `-0.0`.
#[inline]
pub fn is_negative_zero(x: f64) -> bool {
    x == 0.0 && x.is_sign_negative()
}

/// Rounds `x` to the nearest integer, ties away from zero.
///
/// NaN, infinities and `-0.0` are returned unchanged. A negative `x` that
/// rounds to zero gives `-0.0`.
///
/// Fractions in `[0.4999999999, 0.5)` already count as a tie and round away
/// from zero, e.g. `round(0.49999999995) == 1.0`.
pub fn round(x: f64) -> f64 {
    if !x.is_finite() || is_negative_zero(x) {
        return x;
    }

    let whole = libm::trunc(x);
    let fraction = x - whole;
    let rounded = if fraction >= ROUND_HALF {
        whole + 1.0
    } else if fraction <= -ROUND_HALF {
        whole - 1.0
    } else {
        whole
    };

    if rounded == 0.0 && x < 0.0 {
        -0.0
    } else {
        rounded
    }
}

/// [`round`], as an integer when the result is one that fits in an `i64`.
///
/// Returns `None` for NaN, infinities, out of range values and `-0.0`, which
/// the caller has to keep as a float to preserve its sign.
pub fn round_to_int(x: f64) -> Option<i64> {
    let rounded = round(x);
    if is_negative_zero(rounded) {
        return None;
    }
    rounded.to_i64()
}

/// Absolute value. `-0.0` and NaN pass through.
#[inline]
pub fn abs(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// Largest integer not greater than `x`.
#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Smallest integer not less than `x`.
#[inline]
pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}
