//! Size-optimized sine and arctangent.
//!
//! Both are a symmetry fold followed by a truncated Taylor series. They are a
//! few hundred bytes of code instead of the several kilobytes libm's argument
//! reduction needs, at the cost of speed and precision:
//!
//! - [`sin`] stays within 1e-9 of the true value for `|x| <= 1e3`. The error
//!   grows with `|x|` because of the rounding of `PI` during range reduction.
//!   Non-finite input is not handled and produces NaN.
//! - [`atan`] is bounded by `r^41 / 41`, `r` being the folded argument in
//!   `[0, 1]`. That is about 0.025 at `|x| == 1` and below 3e-6 once
//!   `|x| <= 0.8` or `|x| >= 1.25`.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::modulo::modulo;

/// Terms of the sine series after the leading `x`.
const SIN_TERMS: u32 = 9;

/// Terms of the arctangent series after the leading `x`.
const ATAN_TERMS: u32 = 19;

/// Sine of `x` radians. Only valid for finite `x`.
pub fn sin(x: f64) -> f64 {
    // sin(x + k*PI) == (-1)^k * sin(x)
    let quotient = libm::floor(x / PI);
    let mut x = x - quotient * PI;
    // sin(PI - x) == sin(x)
    if x > FRAC_PI_2 {
        x = PI - x;
    }

    let x2 = x * x;
    let mut r = x;
    let mut xpow = x;
    let mut factorial = 1.0;
    for i in 1..=SIN_TERMS {
        xpow *= x2;
        let n = f64::from(2 * i);
        factorial *= n * (n + 1.0);
        let term = xpow / factorial;
        if i & 1 == 1 {
            r -= term;
        } else {
            r += term;
        }
    }

    if modulo(quotient, 2.0) != 0.0 {
        -r
    } else {
        r
    }
}

/// Arctangent of `x`, in `[-PI/2, PI/2]`.
pub fn atan(x: f64) -> f64 {
    let negate = x < 0.0;
    let mut x = if negate { -x } else { x };
    // atan(x) == PI/2 - atan(1/x) keeps the series argument in [0, 1]
    let offset = x > 1.0;
    if offset {
        x = 1.0 / x;
    }

    let x2 = x * x;
    let mut r = x;
    let mut xpow = x;
    for i in 1..=ATAN_TERMS {
        xpow *= x2;
        let term = xpow / f64::from(2 * i + 1);
        if i & 1 == 1 {
            r -= term;
        } else {
            r += term;
        }
    }

    if offset {
        r = FRAC_PI_2 - r;
    }
    if negate {
        -r
    } else {
        r
    }
}
