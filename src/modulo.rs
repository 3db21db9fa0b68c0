//! Truncating remainder without a native remainder routine.

/// Remainder of `x / y`, truncated toward zero.
///
/// The result carries the sign of `x` and satisfies `|r| < |y|`. Works on the
/// magnitudes by long division in powers of two: repeatedly subtract the
/// largest `|y| * 2^k` that still fits into `|x|`. Each subtraction is exact.
///
/// Degenerate cases:
/// - `x` non-finite or `y` NaN gives NaN.
/// - `y` zero or infinite gives a zero with the sign of a negative `x`.
/// - `x == -0.0` with a finite non-zero `y` is returned unchanged.
pub fn modulo(x: f64, y: f64) -> f64 {
    if !x.is_finite() || y.is_nan() {
        return f64::NAN;
    }

    let negative = x < 0.0;
    let mut x = if negative { -x } else { x };
    let y = if y < 0.0 { -y } else { y };

    if y != 0.0 && y <= f64::MAX {
        while x >= y {
            let half = x / 2.0;
            let mut step = y;
            while half >= step {
                step *= 2.0;
            }
            x -= step;
        }
    } else {
        x = 0.0;
    }

    if negative {
        -x
    } else {
        x
    }
}
