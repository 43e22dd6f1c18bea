//! Deterministic seed mixing and uniform draw helpers for the simulation RNG.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Derive the ChaCha seed for one level attempt. Restarting the same level
/// reseeds differently but reproducibly.
pub fn derive_level_seed(run_seed: u64, level_number: u8, attempt: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= (level_number as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= (attempt as u64).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

/// Uniform f64 in [0, 1) using the top 53 bits of one draw.
pub fn uniform_f64(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

/// Uniform f64 in [-range, range].
pub fn uniform_signed(rng: &mut ChaCha8Rng, range: f64) -> f64 {
    2.0 * range * uniform_f64(rng) - range
}

/// Uniform index in [0, len). `len` must be non-zero.
pub fn uniform_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}
