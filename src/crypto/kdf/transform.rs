//! src/crypto/kdf/transform.rs
//! AES-256-ECB key transformation — out-param, zero-exposure, secure-gate v0.5.5+
//!
//! The pipeline is linear:
//!
//! ```text
//! seed → pad → build cipher → iterate-transform(key) → hash → hex-encode → digest
//! ```
//!
//! Every intermediate value (padded seed, working buffer, digest) lives in a
//! secure-gate buffer owned by the call and is zeroized when it goes out of scope.

use crate::aliases::{Digest32, TransformBuffer};
use crate::consts::{AES_BLOCK_SIZE, DIGEST_LENGTH};
use crate::utils::{block_padded_copy, pad_seed, to_lower_hex};
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use sha2::{Digest, Sha256};

/// Transform `key` for `rounds` rounds and write the SHA-256 digest into `out_digest`.
///
/// - Seed is truncated / zero-padded to a 32-byte AES-256 key
/// - Key is copied into a zero-padded buffer of whole 16-byte blocks
/// - Each round encrypts every block in place (AES-256-ECB, no chaining)
/// - Only the first `key.len()` bytes of the final buffer are hashed
///
/// Infallible: an empty key or `rounds == 0` are valid inputs and hash the key unchanged.
#[cfg_attr(
    feature = "logging",
    tracing::instrument(
        level = "trace",
        skip_all,
        fields(key_len = key.len(), seed_len = seed.len(), rounds = rounds)
    )
)]
#[inline]
pub fn transform_key_into(key: &[u8], seed: &[u8], rounds: u64, out_digest: &mut Digest32) {
    let padded_seed = pad_seed(seed);
    let cipher = Aes256Enc::new(padded_seed.expose_secret().into());

    let mut buffer = block_padded_copy(key);
    apply_rounds(&cipher, &mut buffer, rounds);

    let hashed: [u8; DIGEST_LENGTH] = Sha256::digest(&buffer.expose_secret()[..key.len()]).into();
    out_digest.expose_secret_mut().copy_from_slice(&hashed);
}

/// Transform `key` and return the digest as 64 lowercase hex characters.
///
/// This is the function exported to host runtimes under the name `transformKey`.
///
/// # Example
///
/// ```
/// use keytransform_rs::transform_key;
///
/// let digest = transform_key(b"testkey", &[0u8; 32], 1);
/// assert_eq!(
///     digest,
///     "70e0c64eb71e04bac658709f9988f6594d63924ad574a58ca317157668db6397"
/// );
/// ```
#[must_use]
pub fn transform_key(key: &[u8], seed: &[u8], rounds: u64) -> String {
    let mut digest = Digest32::new([0u8; DIGEST_LENGTH]);
    transform_key_into(key, seed, rounds, &mut digest);
    to_lower_hex(digest.expose_secret())
}

/// Run `rounds` full ECB passes over the working buffer.
///
/// Rounds are strictly sequential; within one round each block only depends on
/// its own input state.
#[inline(always)]
fn apply_rounds(cipher: &Aes256Enc, buffer: &mut TransformBuffer, rounds: u64) {
    let blocks = buffer.expose_secret_mut();
    debug_assert_eq!(blocks.len() % AES_BLOCK_SIZE, 0);
    if blocks.is_empty() {
        return;
    }

    for _ in 0..rounds {
        for chunk in blocks.chunks_exact_mut(AES_BLOCK_SIZE) {
            cipher.encrypt_block(AesBlock::from_mut_slice(chunk));
        }
    }
}
