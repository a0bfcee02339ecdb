//! `saltcheck hash` — hash a new secret for storage.
//!
//! Only the stored hash goes to stdout, so the command can feed a config
//! file or environment variable directly:
//!   ADMIN_PASSWORD_HASH=$(saltcheck hash)

use crate::cli::{load_settings, output, read_new_secret, Cli};
use crate::crypto;
use crate::errors::Result;

/// Execute the `hash` command.
pub fn execute(cli: &Cli, from_stdin: bool) -> Result<()> {
    let settings = load_settings(cli)?;
    let secret = read_new_secret(from_stdin, settings.min_secret_len)?;

    let stored = crypto::hash(&secret);
    tracing::debug!("generated stored hash");

    println!("{stored}");
    output::tip(&format!(
        "Store this value in ${} or as `stored_hash` in .saltcheck.toml.",
        settings.hash_env_var
    ));

    Ok(())
}
