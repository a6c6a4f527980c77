//! # Secure-Gate Type Aliases
//!
//! This module provides type aliases for secure memory management using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All types in this module provide automatic zeroization on drop (with the `zeroize`
//! feature) and prevent accidental secret exposure.
//!
//! ## Type Categories
//!
//! ### Fixed-Size Secrets
//! - [`PaddedSeed32`] - transform seed, zero-padded to an AES-256 key
//! - [`Digest32`] - SHA-256 digest of the transformed key
//! - [`CompositeKey32`] - SHA-256 over all credential hashes
//! - [`MasterKey32`] - final master key (master seed + transformed composite key)
//! - [`CredentialHash32`] - hash contributed by a single credential
//!
//! ### Dynamic Secrets
//! - [`TransformBuffer`] - block-padded working copy of the key material
//!
//! ## Usage
//!
//! All secure types require explicit `.expose_secret()` or `.expose_secret_mut()` to access
//! the underlying data, ensuring no accidental secret exposure.

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(TransformBuffer, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets — alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(CompositeKey32, 32); // SHA-256 over credential hashes
fixed_alias!(CredentialHash32, 32); // one password / key-file contribution
fixed_alias!(Digest32, 32); // SHA-256 of the transformed key
fixed_alias!(MasterKey32, 32); // SHA-256(master seed || digest)
fixed_alias!(PaddedSeed32, 32); // AES-256 key built from the seed
