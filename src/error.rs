//! # Error Types
//!
//! This module defines the error type used throughout the library.
//!
//! The key transformation itself cannot fail on well-typed input, so most variants
//! belong to the surrounding layers: argument validation in [`binding`](crate::binding)
//! and credential loading in [`credentials`](crate::credentials).

use thiserror::Error;

/// The error type for all fallible operations in this crate.
#[derive(Error, Debug)]
pub enum TransformError {
    /// I/O error occurred while reading a key file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The host binding was called with the wrong number of arguments.
    ///
    /// Raised before any buffer allocation or cipher work.
    #[error("Wrong number of arguments given. (expected {expected}, got {actual})")]
    ArgumentCount { expected: usize, actual: usize },

    /// One or more host arguments had an unexpected type.
    ///
    /// The binding expects `(buffer, buffer, number)`; non-finite numbers are
    /// rejected here as well.
    #[error("One or more arguments have wrong types.")]
    ArgumentType,

    /// A composite key was requested without any credential added.
    #[error("No credentials were given.")]
    NoCredentials,

    /// A key file could not be interpreted.
    ///
    /// Used for XML key files whose `<Data>` element is not valid base64 or
    /// does not decode to exactly 32 bytes.
    #[error("Key file error: {0}")]
    KeyFile(String),
}
