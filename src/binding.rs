//! # Host Binding
//!
//! Thin adapter that exposes [`transform_key`](crate::transform_key) to a
//! dynamically typed host runtime under the name [`EXPORTED_NAME`].
//!
//! The adapter only checks argument arity and types, converts host values to
//! byte slices and a round count, and hands them to the core. No buffer is
//! allocated and no cipher work happens before validation succeeds.

use crate::crypto::kdf::transform;
use crate::error::TransformError;

/// Name under which the transformation is published to the host.
pub const EXPORTED_NAME: &str = "transformKey";

/// Number of arguments the exported function accepts: `(key, seed, rounds)`.
pub const EXPECTED_ARGUMENTS: usize = 3;

/// A dynamically typed argument as received from the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Binary buffer (opaque bytes, not text-encoded).
    Buffer(Vec<u8>),
    Number(f64),
    String(String),
    Undefined,
}

impl HostValue {
    fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            HostValue::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            HostValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&[u8]> for HostValue {
    fn from(bytes: &[u8]) -> Self {
        HostValue::Buffer(bytes.to_vec())
    }
}

impl From<Vec<u8>> for HostValue {
    fn from(bytes: Vec<u8>) -> Self {
        HostValue::Buffer(bytes)
    }
}

impl From<f64> for HostValue {
    fn from(n: f64) -> Self {
        HostValue::Number(n)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        HostValue::String(s.to_owned())
    }
}

/// `transformKey(key: Buffer, seed: Buffer, rounds: Number) -> String`
///
/// Returns the 64-character lowercase hex digest, or a type error when the
/// argument shape is wrong.
pub fn transform_key(args: &[HostValue]) -> Result<String, TransformError> {
    if args.len() != EXPECTED_ARGUMENTS {
        #[cfg(feature = "logging")]
        tracing::debug!(actual = args.len(), "{EXPORTED_NAME}: wrong argument count");
        return Err(TransformError::ArgumentCount {
            expected: EXPECTED_ARGUMENTS,
            actual: args.len(),
        });
    }

    let (Some(key), Some(seed), Some(rounds)) = (
        args[0].as_buffer(),
        args[1].as_buffer(),
        args[2].as_number(),
    ) else {
        #[cfg(feature = "logging")]
        tracing::debug!("{EXPORTED_NAME}: wrong argument types");
        return Err(TransformError::ArgumentType);
    };

    let rounds = rounds_from_number(rounds)?;
    Ok(transform::transform_key(key, seed, rounds))
}

/// Host numbers are doubles: truncate toward zero, negatives run no rounds,
/// values past `u64::MAX` saturate. NaN and infinities are type errors.
pub fn rounds_from_number(n: f64) -> Result<u64, TransformError> {
    if !n.is_finite() {
        return Err(TransformError::ArgumentType);
    }
    if n <= 0.0 {
        return Ok(0);
    }
    // float → int `as` casts saturate
    Ok(n.trunc() as u64)
}
