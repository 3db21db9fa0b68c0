//! Variadic reductions and range utilities.

use num_traits::ToPrimitive;

use crate::modulo::modulo;

/// Smallest of `args`, or `Infinity` when there are none.
///
/// A NaN anywhere in `args` makes the result NaN. Items that cannot be
/// represented as an `f64` count as NaN.
pub fn min<I>(args: I) -> f64
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    min_max(args, false)
}

/// Largest of `args`, or `-Infinity` when there are none.
///
/// A NaN anywhere in `args` makes the result NaN. Items that cannot be
/// represented as an `f64` count as NaN.
pub fn max<I>(args: I) -> f64
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    min_max(args, true)
}

fn min_max<I>(args: I, is_max: bool) -> f64
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let mut v = if is_max {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for arg in args {
        let arg = arg.to_f64().unwrap_or(f64::NAN);
        // Once `v` is NaN neither comparison can succeed again.
        if (is_max && arg > v) || (!is_max && arg < v) || arg.is_nan() {
            v = arg;
        }
    }

    v
}

/// Clamps `x` into `[min, max]`. The result is unspecified if `min > max`.
#[inline]
pub fn clip(x: f64, min: f64, max: f64) -> f64 {
    let mut x = x;
    if x < min {
        x = min;
    }
    if x > max {
        x = max;
    }
    x
}

/// Wraps `x` into `[0, |max|)`, so that negative values wrap around from the
/// top, e.g. `wrap(-10.0, 360.0) == 350.0`.
///
/// A zero or infinite `max` gives zero, a NaN `x` or `max` gives NaN. The
/// result is never negative, `-0.0` included.
pub fn wrap(x: f64, max: f64) -> f64 {
    let size = if max < 0.0 { -max } else { max };
    let mut r = modulo(x, max);
    if r < 0.0 {
        r += size;
    }
    // A tiny negative remainder can round up to `size` itself.
    if r >= size {
        return 0.0;
    }
    // -0.0 + 0.0 == +0.0
    r + 0.0
}
