// src/crypto/mod.rs

//! Low-level crypto primitives (KDF).
//!
//! Sub-modules for primitives; see crate root for re-exports (e.g., `transform_key`).

pub mod kdf;
