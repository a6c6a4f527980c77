//! src/crypto/kdf/master.rs
//! KeePass master key — SHA-256(master seed || transformed composite key)

use crate::aliases::{Digest32, MasterKey32};
use crate::consts::DIGEST_LENGTH;
use crate::crypto::kdf::transform::transform_key_into;
use sha2::{Digest, Sha256};

/// Derive the database master key directly into caller buffer
///
/// - `composite_key` is transformed `rounds` times under `transform_seed`
/// - `master_seed` is prepended at full length (no padding or truncation)
/// - The concatenation is hashed once more with SHA-256
///
/// Writes result into `out_key` — no return value, nothing to fail.
#[cfg_attr(
    feature = "logging",
    tracing::instrument(
        level = "trace",
        skip_all,
        fields(master_seed_len = master_seed.len(), rounds = rounds)
    )
)]
#[inline]
pub fn build_master_key(
    composite_key: &[u8],
    master_seed: &[u8],
    transform_seed: &[u8],
    rounds: u64,
    out_key: &mut MasterKey32,
) {
    let mut transformed = Digest32::new([0u8; DIGEST_LENGTH]);
    transform_key_into(composite_key, transform_seed, rounds, &mut transformed);

    let mut hasher = Sha256::new();
    hasher.update(master_seed);
    hasher.update(transformed.expose_secret());
    let hash: [u8; DIGEST_LENGTH] = hasher.finalize().into();

    out_key.expose_secret_mut().copy_from_slice(&hash);
}
