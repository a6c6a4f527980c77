//! tests/common.rs
//! Common constants and utilities shared across test files

use sha2::{Digest, Sha256};

/// Low round count for property tests — performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ROUNDS: u64 = 5;

/// Key used by the legacy native test-suite vectors
#[allow(dead_code)]
pub const LEGACY_KEY: &[u8] = b"nebuchadnezzarneotrinitymorpheus";

/// Seed used by the legacy native test-suite vectors (exactly 32 bytes)
#[allow(dead_code)]
pub const LEGACY_SEED: &[u8] = b"morpheusmorpheusmorpheusmorpheus";

/// Keys straddling the 16-byte block boundary
#[allow(dead_code)]
pub const TEST_KEYS: &[&[u8]] = &[
    b"",
    b"k",
    b"testkey",
    b"0123456789abcde",
    b"0123456789abcdef",
    b"0123456789abcdefg",
    b"nebuchadnezzarneotrinitymorpheus",
];

/// Round counts used by property tests
#[allow(dead_code)]
pub const TEST_ROUND_VALUES: &[u64] = &[0, 1, 2, TEST_ROUNDS, 16];

/// Lowercase hex SHA-256, the digest a zero-round transformation must produce
#[allow(dead_code)]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
