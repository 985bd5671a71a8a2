//! Deterministic RNG for the dither stage, PCG32 with BLAKE3 seed
//! derivation.
//!
//! All randomness in the pipeline flows through here so a conversion is
//! reproducible from a single seed. Per-file seeds in a batch are derived
//! by hashing the base seed with the file's stem, keeping files
//! decorrelated without giving up determinism.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed from a base seed and a stream key.
///
/// Hashes the base seed (little-endian) concatenated with the key bytes
/// via BLAKE3 and truncates to u32. The same (seed, key) pair always maps
/// to the same derived seed.
pub fn derive_stream_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}
