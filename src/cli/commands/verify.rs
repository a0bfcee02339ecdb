//! `saltcheck verify` — check a secret against a stored hash.
//!
//! A malformed stored hash is reported exactly like a wrong secret.

use crate::cli::{load_settings, output, read_secret, Cli};
use crate::crypto;
use crate::errors::{Result, SaltcheckError};

/// Execute the `verify` command.
pub fn execute(cli: &Cli, stored: Option<&str>, from_stdin: bool) -> Result<()> {
    let settings = load_settings(cli)?;
    let stored = settings.resolve_stored_hash(stored)?;
    let secret = read_secret(from_stdin)?;

    if !crypto::verify(&secret, &stored) {
        return Err(SaltcheckError::VerificationFailed);
    }

    output::success("Secret matches the stored hash.");
    Ok(())
}
