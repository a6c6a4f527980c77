//! # Constants
//!
//! This module defines the fixed algorithm parameters of the key transformation
//! and the defaults used by the builder.

/// AES block size in bytes. The working buffer is always a multiple of this.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 key length in bytes. Seeds are truncated or zero-padded to this size.
pub const AES256_KEY_LENGTH: usize = 32;

/// SHA-256 digest length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Length of the lowercase hex rendering of a digest.
pub const HEX_DIGEST_LENGTH: usize = DIGEST_LENGTH * 2;

/// Default number of transformation rounds used by [`TransformBuilder`](crate::TransformBuilder).
///
/// Matches the value KeePass writes into new database headers. Callers that read
/// the round count from an existing header should always pass that value instead.
pub const DEFAULT_TRANSFORM_ROUNDS: u64 = 6_000;
