//! # Credentials
//!
//! Builds the composite key that is fed into the key transformation when opening
//! a KeePass-style database.
//!
//! Each credential contributes one 32-byte hash:
//!
//! - password → `SHA-256(password)`
//! - key file → see [`key_file_hash`]
//!
//! The composite key is `SHA-256` over the concatenated contributions, ordered by
//! credential priority (passwords before key files) so insertion order does not
//! change the result.

use crate::aliases::{CompositeKey32, CredentialHash32, MasterKey32};
use crate::consts::DIGEST_LENGTH;
use crate::crypto::kdf::master::build_master_key;
use crate::error::TransformError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use std::path::Path;

const XML_DATA_OPEN: &[u8] = b"<Data>";
const XML_DATA_CLOSE: &[u8] = b"</Data>";

/// Kind of a credential, with its ordering priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Password,
    KeyFile,
}

impl CredentialKind {
    /// Higher priority credentials are hashed first.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            CredentialKind::Password => 200,
            CredentialKind::KeyFile => 100,
        }
    }
}

#[derive(Debug, Clone)]
struct Credential {
    kind: CredentialKind,
    hash: CredentialHash32,
}

/// Accumulates credentials and produces the composite key.
#[derive(Debug, Clone, Default)]
pub struct CompositeKey {
    credentials: Vec<Credential>,
}

impl CompositeKey {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a password credential (raw bytes, no encoding applied).
    pub fn add_password(&mut self, password: &[u8]) -> &mut Self {
        self.push(CredentialKind::Password, sha256(password));
        self
    }

    /// Add a key-file credential from its contents.
    pub fn add_key_file_bytes(&mut self, contents: &[u8]) -> Result<&mut Self, TransformError> {
        let hash = key_file_hash(contents)?;
        self.push(CredentialKind::KeyFile, hash);
        Ok(self)
    }

    /// Add a key-file credential read from disk.
    pub fn add_key_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self, TransformError> {
        let contents = std::fs::read(path)?;
        self.add_key_file_bytes(&contents)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Kinds of the stored credentials, in hashing order.
    #[must_use]
    pub fn kinds(&self) -> Vec<CredentialKind> {
        self.ordered().map(|c| c.kind).collect()
    }

    /// `SHA-256` over all credential hashes in priority order.
    pub fn composite_hash(&self) -> Result<CompositeKey32, TransformError> {
        if self.is_empty() {
            return Err(TransformError::NoCredentials);
        }

        let mut hasher = Sha256::new();
        for credential in self.ordered() {
            hasher.update(credential.hash.expose_secret());
        }
        let hash: [u8; DIGEST_LENGTH] = hasher.finalize().into();
        Ok(CompositeKey32::new(hash))
    }

    /// Composite hash → key transformation → master key.
    pub fn master_key(
        &self,
        master_seed: &[u8],
        transform_seed: &[u8],
        rounds: u64,
    ) -> Result<MasterKey32, TransformError> {
        let composite = self.composite_hash()?;
        let mut master = MasterKey32::new([0u8; DIGEST_LENGTH]);
        build_master_key(
            composite.expose_secret(),
            master_seed,
            transform_seed,
            rounds,
            &mut master,
        );
        Ok(master)
    }

    fn push(&mut self, kind: CredentialKind, hash: CredentialHash32) {
        self.credentials.push(Credential { kind, hash });
    }

    fn ordered(&self) -> impl Iterator<Item = &Credential> {
        let mut ordered: Vec<&Credential> = self.credentials.iter().collect();
        // stable: equal priorities keep insertion order
        ordered.sort_by_key(|c| std::cmp::Reverse(c.kind.priority()));
        ordered.into_iter()
    }
}

/// Derive the 32-byte contribution of a key file.
///
/// - XML key file with a `<Data>` element → base64-decoded data (must be 32 bytes)
/// - exactly 32 bytes → used verbatim
/// - exactly 64 hex characters → hex-decoded
/// - anything else → `SHA-256(contents)`
pub fn key_file_hash(contents: &[u8]) -> Result<CredentialHash32, TransformError> {
    if let Some(data) = xml_data(contents) {
        let decoded = STANDARD
            .decode(data)
            .map_err(|e| TransformError::KeyFile(format!("invalid base64 in <Data>: {e}")))?;
        let bytes: [u8; DIGEST_LENGTH] = decoded.try_into().map_err(|v: Vec<u8>| {
            TransformError::KeyFile(format!("<Data> decodes to {} bytes, expected 32", v.len()))
        })?;
        return Ok(CredentialHash32::new(bytes));
    }

    if contents.len() == DIGEST_LENGTH {
        let mut bytes = [0u8; DIGEST_LENGTH];
        bytes.copy_from_slice(contents);
        return Ok(CredentialHash32::new(bytes));
    }

    if contents.len() == DIGEST_LENGTH * 2 {
        let mut bytes = [0u8; DIGEST_LENGTH];
        if hex::decode_to_slice(contents, &mut bytes).is_ok() {
            return Ok(CredentialHash32::new(bytes));
        }
    }

    Ok(sha256(contents))
}

fn sha256(data: &[u8]) -> CredentialHash32 {
    CredentialHash32::new(Sha256::digest(data).into())
}

fn xml_data(contents: &[u8]) -> Option<&[u8]> {
    let start = find(contents, XML_DATA_OPEN)? + XML_DATA_OPEN.len();
    let len = find(&contents[start..], XML_DATA_CLOSE)?;
    Some(contents[start..start + len].trim_ascii())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
