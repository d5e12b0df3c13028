//! Stable hash-derived scores.
//!
//! Several dimensions have no real data behind them and are derived from a
//! digest of names instead. SHA-256 keeps them identical across runs,
//! processes and platforms.

use sha2::{Digest, Sha256};

/// Hash colon-joined `parts` into a fraction in [0, 1).
pub fn stable_unit(parts: &[&str]) -> f64 {
    let mut hasher = Sha256::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update(b":");
        }
        hasher.update(part.to_lowercase().as_bytes());
    }
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    // Top 53 bits give an exactly representable f64 in [0, 1).
    (u64::from_be_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64
}

/// Hash into a 64-bit seed, for mixing into RNG seeds.
pub fn stable_seed(parts: &[&str]) -> u64 {
    (stable_unit(parts) * (1u64 << 53) as f64) as u64
}
