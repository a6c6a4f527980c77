// src/lib.rs

//! keytransform-rs — AES-256-ECB key transformation with SHA-256 digests
//!
//! Given a raw key, a seed and a round count, derive a 64-character lowercase hex
//! digest whose cost grows linearly with the round count:
//!
//! ```text
//! seed → pad → build cipher → iterate-transform(key) → hash → hex-encode → digest
//! ```
//!
//! The cipher (AES-256, ECB) and hash (SHA-256) are fixed so digests stay
//! compatible with existing stored values.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod binding;
pub mod builders;
pub mod consts;
pub mod credentials;
pub mod crypto;
pub mod error;
pub mod utils;

// High-level API
pub use crypto::kdf::transform::transform_key;
pub use error::TransformError;

// Low-level out-param KDFs — for flows that keep the raw digest in a secure buffer
pub use crypto::kdf::master::build_master_key;
pub use crypto::kdf::transform::transform_key_into;

pub use builders::transform_builder::TransformBuilder;
pub use credentials::{CompositeKey, CredentialKind};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{transform_batch, TransformJob};
