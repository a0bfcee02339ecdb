//! Salted SHA-256 credential hashing.
//!
//! A stored hash is `"<salt-hex>:<digest-hex>"` where the digest is
//! `SHA-256(salt_hex || secret)`. The salt enters the digest as its hex
//! *text*, not as raw bytes, so the stored format can be reproduced by any
//! SHA-256 implementation that sees the same string.
//!
//! `verify` collapses every failure (bad format, bad hex, wrong secret)
//! into `false`. Callers cannot tell a corrupted record from a wrong
//! password, and neither can anyone timing them.

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of the random salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Separator between the salt and digest fields.
pub(crate) const SEPARATOR: char = ':';

/// Hash `secret` with a fresh random salt.
///
/// Two calls with the same secret return different strings.
pub fn hash(secret: &str) -> String {
    hash_with_salt(&generate_salt(), secret)
}

/// Hash `secret` with a caller-supplied salt.
///
/// This is the deterministic half of [`hash`]; the output is always
/// `32 hex chars + ':' + 64 hex chars`.
pub fn hash_with_salt(salt: &[u8; SALT_LEN], secret: &str) -> String {
    let salt_hex = hex::encode(salt);
    let digest = salted_digest(&salt_hex, secret);
    format!("{salt_hex}{SEPARATOR}{}", hex::encode(digest))
}

/// Check `secret` against a stored `salt:digest` string.
///
/// Returns `false` for a malformed stored hash, an undecodable digest, or
/// a mismatched secret. Never panics.
pub fn verify(secret: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once(SEPARATOR) else {
        tracing::debug!("stored hash rejected: missing separator");
        return false;
    };
    if salt_hex.is_empty() || digest_hex.is_empty() {
        tracing::debug!("stored hash rejected: empty field");
        return false;
    }

    let Ok(expected) = hex::decode(digest_hex) else {
        tracing::debug!("stored hash rejected: digest is not hex");
        return false;
    };

    let actual = salted_digest(salt_hex, secret);

    // Slice ct_eq returns false for unequal lengths without inspecting bytes.
    let matched: bool = actual.as_slice().ct_eq(expected.as_slice()).into();
    if !matched {
        tracing::debug!("stored hash rejected: digest mismatch");
    }
    matched
}

/// Generate a cryptographically random 16-byte salt.
///
/// `rand::rng()` is a thread-local ChaCha CSPRNG seeded from the OS.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// SHA-256 over the salt text followed by the secret text.
fn salted_digest(salt_hex: &str, secret: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.finalize().into()
}
