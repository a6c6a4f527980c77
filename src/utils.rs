// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::aliases::{PaddedSeed32, TransformBuffer};
use crate::consts::{AES256_KEY_LENGTH, AES_BLOCK_SIZE};

/// Rounds `len` up to the next multiple of the AES block size.
///
/// `0` stays `0`, so an empty key yields an empty working buffer and no cipher work.
#[inline(always)]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(AES_BLOCK_SIZE) * AES_BLOCK_SIZE
}

/// Builds the 32-byte AES-256 key from an arbitrary-length seed.
///
/// Copies up to 32 bytes and leaves the remainder zeroed. Bytes beyond offset 32
/// are ignored; shorter seeds behave exactly like their zero-padded extension.
#[inline(always)]
pub fn pad_seed(seed: &[u8]) -> PaddedSeed32 {
    let mut padded = PaddedSeed32::new([0u8; AES256_KEY_LENGTH]);
    let take = seed.len().min(AES256_KEY_LENGTH);
    padded.expose_secret_mut()[..take].copy_from_slice(&seed[..take]);
    padded
}

/// Allocates the block-padded working copy of `key`.
///
/// The returned buffer is zeroized on drop, so the transformed key never
/// outlives the call that created it.
#[inline(always)]
pub fn block_padded_copy(key: &[u8]) -> TransformBuffer {
    let mut buffer = vec![0u8; padded_len(key.len())];
    buffer[..key.len()].copy_from_slice(key);
    TransformBuffer::new(buffer)
}

/// Lowercase hex rendering of a digest — two characters per byte, no prefix.
#[inline(always)]
pub fn to_lower_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
