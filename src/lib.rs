//! Math primitives behind the `Math` object of a small JavaScript interpreter
//! for microcontrollers.
//!
//! Every function is pure and works on `f64`. Invalid input is reported
//! through NaN, infinities or a documented degenerate value, never a panic.
//!
//! Sine and arctangent come in two flavours, chosen at build time:
//!
//! - by default they delegate to `libm`;
//! - with the `size-optimized` feature they are short Taylor series, see
//!   [`approx`], which trade precision and speed for flash space.
//!
//! Cosine, tangent, arcsine and arccosine are derived from those two, see
//! [`trig`]. The crate level functions use [`backend::Selected`]; the generic
//! versions in [`trig`] accept either back-end explicitly.

#![no_std]

#[macro_use]
mod fmt;

pub mod approx;
pub mod backend;
pub mod builtins;
pub mod consts;
pub mod error;
pub mod modulo;
pub mod power;
pub mod random;
pub mod reduce;
pub mod round;
pub mod trig;

use backend::Selected;

pub use builtins::{call, constant, lookup, Member};
pub use error::MathError;
pub use modulo::modulo;
pub use power::{exp, log, pow, sqrt};
pub use random::random;
pub use reduce::{clip, max, min, wrap};
pub use round::{abs, ceil, floor, is_negative_zero, round, round_to_int};

#[cfg(not(feature = "size-optimized"))]
pub use trig::atan2;

/// Sine of `theta` radians.
pub fn sin(theta: f64) -> f64 {
    trig::sin::<Selected>(theta)
}

/// Cosine of `theta` radians.
pub fn cos(theta: f64) -> f64 {
    trig::cos::<Selected>(theta)
}

/// Tangent of `theta` radians.
pub fn tan(theta: f64) -> f64 {
    trig::tan::<Selected>(theta)
}

/// Arctangent of `x`.
pub fn atan(x: f64) -> f64 {
    trig::atan::<Selected>(x)
}

/// Arcsine of `x`.
pub fn asin(x: f64) -> f64 {
    trig::asin::<Selected>(x)
}

/// Arccosine of `x`. See [`trig::acos`] for negative `x`.
pub fn acos(x: f64) -> f64 {
    trig::acos::<Selected>(x)
}
