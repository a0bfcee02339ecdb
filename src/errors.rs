use thiserror::Error;

/// All errors that can occur in saltcheck.
///
/// Note that `crypto::verify` never produces one of these: a bad stored
/// hash and a wrong secret both come back as `false`.
#[derive(Debug, Error)]
pub enum SaltcheckError {
    // --- Hash errors ---
    #[error("Malformed stored hash: {0}")]
    MalformedHash(String),

    #[error("Verification failed — secret does not match")]
    VerificationFailed,

    #[error("No stored hash found — pass --stored, set ${0}, or add `stored_hash` to .saltcheck.toml")]
    NoStoredHash(String),

    #[error("Secret must be at least {0} characters")]
    SecretTooShort(usize),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for saltcheck results.
pub type Result<T> = std::result::Result<T, SaltcheckError>;
