//! src/builders/transform_builder.rs
//! AES-256-ECB key transformation builder — secure-gate best practices

use crate::aliases::{Digest32, PaddedSeed32};
use crate::consts::{AES256_KEY_LENGTH, DEFAULT_TRANSFORM_ROUNDS, DIGEST_LENGTH};
use crate::crypto::kdf::transform::transform_key_into;
use crate::utils::{pad_seed, to_lower_hex};

/// Key transformation builder
///
/// Defaults: all-zero 32-byte seed + [`DEFAULT_TRANSFORM_ROUNDS`] rounds.
/// The seed is padded once, when it is set, so repeated derivations reuse it.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). All derivations are pure
/// (no shared mutable state).
#[derive(Debug, Clone)]
pub struct TransformBuilder {
    rounds: u64,
    seed: PaddedSeed32,
}

impl TransformBuilder {
    /// Create builder with defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            rounds: DEFAULT_TRANSFORM_ROUNDS,
            seed: PaddedSeed32::new([0u8; AES256_KEY_LENGTH]),
        }
    }

    /// Set the transform seed — truncated or zero-padded to 32 bytes
    #[must_use]
    pub fn with_seed(mut self, seed: &[u8]) -> Self {
        self.seed = pad_seed(seed);
        self
    }

    /// Set the round count (0 hashes the key without any cipher pass)
    #[must_use]
    pub fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }

    /// Current padded seed as raw 32-byte array
    #[must_use]
    pub fn seed(&self) -> &[u8; 32] {
        self.seed.expose_secret()
    }

    /// Current round count
    #[must_use]
    pub const fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Derive digest directly into caller-provided secure buffer — **preferred**
    #[inline]
    pub fn derive(&self, key: &[u8], out_digest: &mut Digest32) {
        transform_key_into(key, self.seed.expose_secret(), self.rounds, out_digest);
    }

    /// Convenience: derive and return a fresh secure digest
    #[must_use]
    pub fn derive_new(&self, key: &[u8]) -> Digest32 {
        let mut digest = Digest32::new([0u8; DIGEST_LENGTH]);
        self.derive(key, &mut digest);
        digest
    }

    /// Convenience: derive and return the lowercase hex digest
    #[must_use]
    pub fn derive_hex(&self, key: &[u8]) -> String {
        to_lower_hex(self.derive_new(key).expose_secret())
    }
}

impl Default for TransformBuilder {
    fn default() -> Self {
        Self::new()
    }
}
