//! Constants exposed on the `Math` object.

pub const E: f64 = core::f64::consts::E;
pub const PI: f64 = core::f64::consts::PI;
pub const LN2: f64 = core::f64::consts::LN_2;
pub const LN10: f64 = core::f64::consts::LN_10;
pub const LOG2E: f64 = core::f64::consts::LOG2_E;
pub const LOG10E: f64 = core::f64::consts::LOG10_E;
pub const SQRT2: f64 = core::f64::consts::SQRT_2;
pub const SQRT1_2: f64 = core::f64::consts::FRAC_1_SQRT_2;
