//! Build-time choice between the libm kernels and the series approximations.
//!
//! Only sine and arctangent have two implementations. Everything derived from
//! them (cosine, tangent, arcsine, arccosine) is generic over [`Backend`], so the
//! choice is made once, by [`Selected`], and costs nothing at runtime.

/// The primitives the trigonometric functions are built from.
pub trait Backend {
    /// Sine of `x` radians.
    fn sin(x: f64) -> f64;

    /// Arctangent of `x`, in `(-PI/2, PI/2)`.
    fn atan(x: f64) -> f64;
}

/// Delegates to `libm`. Accurate, but pulls the full argument reduction into
/// the binary.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Libm;

impl Backend for Libm {
    #[inline]
    fn sin(x: f64) -> f64 {
        libm::sin(x)
    }

    #[inline]
    fn atan(x: f64) -> f64 {
        libm::atan(x)
    }
}

/// Short Taylor series approximations, see [`crate::approx`].
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Approx;

impl Backend for Approx {
    #[inline]
    fn sin(x: f64) -> f64 {
        crate::approx::sin(x)
    }

    #[inline]
    fn atan(x: f64) -> f64 {
        crate::approx::atan(x)
    }
}

/// The back-end used by the crate level functions.
#[cfg(feature = "size-optimized")]
pub type Selected = Approx;

/// The back-end used by the crate level functions.
#[cfg(not(feature = "size-optimized"))]
pub type Selected = Libm;
