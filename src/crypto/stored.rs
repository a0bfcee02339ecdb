//! Strict parsing of `salt:digest` strings.
//!
//! `verify` deliberately does not use this type: it must answer `false`
//! for anything it cannot use. `StoredHash` is for operators who want to
//! know *why* a record is unusable.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::hasher::{SALT_LEN, SEPARATOR};
use crate::errors::{Result, SaltcheckError};

/// Hex length of the salt field.
const SALT_HEX_LEN: usize = SALT_LEN * 2;

/// Hex length of a SHA-256 digest.
const DIGEST_HEX_LEN: usize = 64;

/// A well-formed stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredHash {
    salt: String,
    digest: String,
    #[serde(skip)]
    salt_bytes: [u8; SALT_LEN],
}

impl StoredHash {
    /// Parse and validate a stored hash.
    ///
    /// Requires exactly one separator, a 32-char hex salt and a 64-char
    /// hex digest. Hex digits are normalised to lowercase in the digest
    /// only; the salt is kept verbatim because it is hashed as text.
    pub fn parse(text: &str) -> Result<Self> {
        let (salt, digest) = text
            .split_once(SEPARATOR)
            .ok_or_else(|| SaltcheckError::MalformedHash("missing ':' separator".into()))?;

        if digest.contains(SEPARATOR) {
            return Err(SaltcheckError::MalformedHash(
                "more than one ':' separator".into(),
            ));
        }

        check_hex_field("salt", salt, SALT_HEX_LEN)?;
        check_hex_field("digest", digest, DIGEST_HEX_LEN)?;

        let mut salt_bytes = [0u8; SALT_LEN];
        hex::decode_to_slice(salt, &mut salt_bytes)
            .map_err(|e| SaltcheckError::MalformedHash(format!("salt: {e}")))?;

        Ok(Self {
            salt: salt.to_string(),
            digest: digest.to_ascii_lowercase(),
            salt_bytes,
        })
    }

    /// The salt exactly as it is fed to SHA-256.
    pub fn salt_hex(&self) -> &str {
        &self.salt
    }

    pub fn digest_hex(&self) -> &str {
        &self.digest
    }

    /// Decoded salt bytes.
    pub fn salt_bytes(&self) -> [u8; SALT_LEN] {
        self.salt_bytes
    }

    /// Check a candidate secret against this hash.
    pub fn matches(&self, secret: &str) -> bool {
        super::hasher::verify(secret, &self.to_string())
    }
}

impl fmt::Display for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.salt, self.digest)
    }
}

impl FromStr for StoredHash {
    type Err = SaltcheckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn check_hex_field(name: &str, value: &str, expected_len: usize) -> Result<()> {
    if value.is_empty() {
        return Err(SaltcheckError::MalformedHash(format!("{name} is empty")));
    }
    if value.len() != expected_len {
        return Err(SaltcheckError::MalformedHash(format!(
            "{name} must be {expected_len} hex characters, got {}",
            value.len()
        )));
    }
    if !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SaltcheckError::MalformedHash(format!(
            "{name} contains non-hex characters"
        )));
    }
    Ok(())
}
