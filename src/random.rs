use rand_core::RngCore;

/// Uniformly distributed double in `[0, 1)`.
///
/// Takes the top 53 bits of a `u64` so every representable step in the range
/// is equally likely.
pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (rng.next_u64() >> 11) as f64 * SCALE
}
