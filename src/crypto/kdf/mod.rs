//! # Key Derivation Functions (KDF)
//!
//! This module provides the key-stretching primitives.
//!
//! ## Modules
//!
//! - [`transform`] - AES-256-ECB key transformation followed by SHA-256
//! - [`master`] - master key composition on top of the transformed key
//!
//! ## Usage
//!
//! Most callers only need [`transform_key`](crate::transform_key). The out-param
//! variants are exposed for flows that keep the raw digest in a secure buffer.

pub mod master;
pub mod transform;
