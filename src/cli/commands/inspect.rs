//! `saltcheck inspect` — validate a stored hash and show its fields.
//!
//! The value is checked byte for byte, as `verify` would use it: stray
//! whitespace makes a record unusable and is reported as such.

use crate::cli::output;
use crate::crypto::StoredHash;
use crate::errors::{Result, SaltcheckError};

/// Execute the `inspect` command.
pub fn execute(hash: &str, json: bool) -> Result<()> {
    let stored = StoredHash::parse(hash)?;

    if json {
        let rendered = render_json(&stored)?;
        println!("{rendered}");
    } else {
        output::print_stored_hash_table(&stored);
        output::success("Stored hash is well-formed.");
    }

    Ok(())
}

fn render_json(stored: &StoredHash) -> Result<String> {
    serde_json::to_string_pretty(stored)
        .map_err(|e| SaltcheckError::SerializationError(format!("stored hash: {e}")))
}
