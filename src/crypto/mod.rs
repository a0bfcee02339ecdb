//! Cryptographic primitives for saltcheck.
//!
//! This module provides:
//! - Salted SHA-256 hashing and constant-time verification (`hasher`)
//! - The strict `salt:digest` value type used for inspection (`stored`)

pub mod hasher;
pub mod stored;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{hash, verify, StoredHash};
pub use hasher::{generate_salt, hash, hash_with_salt, verify, SALT_LEN};
pub use stored::StoredHash;
