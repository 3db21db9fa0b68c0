//! Exponentiation, square root and the libm exponential/logarithm they share.

use crate::modulo::modulo;

/// Largest exponent raised by repeated multiplication rather than `exp(ln(x) * y)`.
const FAST_PATH_MAX: i32 = 10;

/// `x` raised to the power `y`.
///
/// Small non-negative integer exponents are multiplied out, which is exact
/// wherever the product is representable. Everything else goes through
/// `exp(ln(|x|) * y)`:
///
/// - A negative `x` needs an integer `y`, otherwise the result is NaN. The sign
///   is restored for odd `y`.
/// - A zero `x` gives zero for every non-NaN `y`. For negative `y` this is not
///   the IEEE result (`Infinity`) but avoids evaluating `ln(0)`.
/// - `pow(x, 0)` is `1` for every `x`, NaN included.
pub fn pow(x: f64, y: f64) -> f64 {
    // `as` saturates and maps NaN to 0, the comparison below rejects both.
    let yi = y as i32;
    if (0..=FAST_PATH_MAX).contains(&yi) && f64::from(yi) == y {
        if yi == 0 {
            return 1.0;
        }
        let mut p = x;
        for _ in 1..yi {
            p *= x;
        }
        return p;
    }

    if x < 0.0 {
        if modulo(y, 1.0) != 0.0 {
            return f64::NAN;
        }
        let p = exp(log(-x) * y);
        return if modulo(y, 2.0) == 0.0 { p } else { -p };
    }

    if x == 0.0 && !y.is_nan() {
        return 0.0;
    }

    exp(log(x) * y)
}

/// Square root of `x`, NaN for negative `x`.
///
/// Evaluated as `exp(ln(x) * 0.5)` so that no separate square root kernel is
/// linked in.
pub fn sqrt(x: f64) -> f64 {
    if x >= 0.0 {
        exp(log(x) * 0.5)
    } else {
        f64::NAN
    }
}

/// `e` raised to the power `x`.
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

/// Natural logarithm of `x`.
#[inline]
pub fn log(x: f64) -> f64 {
    libm::log(x)
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        libm::fabs(a - b) <= tolerance * libm::fmax(1.0, libm::fabs(b))
    }

    #[test]
    fn zero_exponent_is_one() {
        for x in [0.0, -0.0, 1.0, -3.5, 1e300, f64::NAN, f64::INFINITY] {
            assert_eq!(pow(x, 0.0), 1.0);
            assert_eq!(pow(x, -0.0), 1.0);
        }
    }

    #[test]
    fn small_integer_exponents_are_exact() {
        assert_eq!(pow(2.0, 10.0), 1024.0);
        assert_eq!(pow(3.0, 4.0), 81.0);
        assert_eq!(pow(-2.0, 3.0), -8.0);
        assert_eq!(pow(-2.0, 2.0), 4.0);
        assert_eq!(pow(1.5, 2.0), 2.25);
        assert_eq!(pow(0.0, 5.0), 0.0);
        assert_eq!(pow(7.0, 1.0), 7.0);
    }

    #[test]
    fn general_path() {
        assert!(close(pow(2.0, 0.5), core::f64::consts::SQRT_2, 1e-14));
        assert!(close(pow(2.0, -1.0), 0.5, 1e-14));
        assert!(close(pow(10.0, 12.0), 1e12, 1e-13));
        assert!(close(pow(2.0, 2.5), 5.656854249492381, 1e-14));
    }

    #[test]
    fn negative_base_with_integer_exponent() {
        assert!(close(pow(-2.0, 11.0), -2048.0, 1e-13));
        assert!(close(pow(-2.0, 12.0), 4096.0, 1e-13));
        assert!(close(pow(-2.0, -1.0), -0.5, 1e-14));
        assert!(close(pow(-2.0, -2.0), 0.25, 1e-14));
    }

    #[test]
    fn negative_base_with_fractional_exponent_is_nan() {
        assert!(pow(-2.0, 0.5).is_nan());
        assert!(pow(-8.0, 1.0 / 3.0).is_nan());
        assert!(pow(-2.0, f64::INFINITY).is_nan());
    }

    #[test]
    fn zero_base_with_negative_exponent_is_zero() {
        // Known deviation: IEEE gives Infinity here.
        assert_eq!(pow(0.0, -1.0), 0.0);
        assert_eq!(pow(0.0, -0.5), 0.0);
        assert_eq!(pow(0.0, 0.5), 0.0);
        assert!(pow(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn nan_propagates() {
        assert!(pow(f64::NAN, 2.0).is_nan());
        assert!(pow(f64::NAN, 0.5).is_nan());
        assert!(pow(2.0, f64::NAN).is_nan());
    }

    #[test]
    fn sqrt_values() {
        assert!(close(sqrt(4.0), 2.0, 1e-15));
        assert!(close(sqrt(2.0), core::f64::consts::SQRT_2, 1e-15));
        assert!(close(sqrt(0.75), 0.8660254037844386, 1e-15));
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
        assert!(sqrt(-1.0).is_nan());
        assert!(sqrt(f64::NAN).is_nan());
    }
}
