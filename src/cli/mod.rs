//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{BufRead, IsTerminal};
use std::path::Path;

use clap::Parser;
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, SaltcheckError};

/// Environment variable checked first for the secret (scripts and CI).
pub const SECRET_ENV_VAR: &str = "SALTCHECK_SECRET";

/// saltcheck CLI: salted SHA-256 credential hashing.
#[derive(Parser)]
#[command(
    name = "saltcheck",
    about = "Salted SHA-256 credential hashing and verification",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing .saltcheck.toml (default: current directory)
    #[arg(long, env = "SALTCHECK_PROJECT_DIR", default_value = ".", global = true)]
    pub project_dir: String,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Hash a new secret and print the stored form (salt:digest)
    Hash {
        /// Read the secret from the first line of stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Check a secret against a stored hash
    Verify {
        /// Stored hash (falls back to the configured env var, then .saltcheck.toml)
        #[arg(long)]
        stored: Option<String>,

        /// Read the secret from the first line of stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Validate a stored hash and show its fields
    Inspect {
        /// Stored hash to inspect
        hash: String,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the admin dashboard gate for a session
    Gate {
        /// Signed-in user id (omit to simulate a visitor without a session)
        #[arg(long)]
        user: Option<String>,

        /// Role attached to the session
        #[arg(long, requires = "user")]
        role: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, ignore_case = true)]
        shell: Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Install the stderr log subscriber.
///
/// `--verbose` forces debug output for this crate; otherwise `RUST_LOG`
/// is honoured with a `warn` fallback.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("saltcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. in tests) is harmless, so the error is ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Load `.saltcheck.toml` from the `--project-dir`.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(Path::new(&cli.project_dir))
}

/// Get a secret to verify, trying in order:
/// 1. `SALTCHECK_SECRET` env var
/// 2. First line of stdin (when `from_stdin` is set)
/// 3. Interactive prompt
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn read_secret(from_stdin: bool) -> Result<Zeroizing<String>> {
    if let Some(secret) = secret_from_env() {
        return Ok(secret);
    }

    if from_stdin {
        return read_secret_line(std::io::stdin().lock());
    }

    let secret = dialoguer::Password::new()
        .with_prompt("Enter secret")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| SaltcheckError::CommandFailed(format!("secret prompt: {e}")))?;
    Ok(Zeroizing::new(secret))
}

/// Get a new secret to hash, enforcing a minimum length.
///
/// Non-interactive sources fail on a short secret; the interactive prompt
/// asks again.
pub fn read_new_secret(from_stdin: bool, min_len: usize) -> Result<Zeroizing<String>> {
    let non_interactive = match secret_from_env() {
        Some(secret) => Some(secret),
        None if from_stdin => Some(read_secret_line(std::io::stdin().lock())?),
        None => None,
    };

    if let Some(secret) = non_interactive {
        check_secret_len(&secret, min_len)?;
        return Ok(secret);
    }

    loop {
        let secret = dialoguer::Password::new()
            .with_prompt("Choose secret")
            .with_confirmation("Confirm secret", "Secrets do not match, try again")
            .interact()
            .map_err(|e| SaltcheckError::CommandFailed(format!("secret prompt: {e}")))?;

        if check_secret_len(&secret, min_len).is_err() {
            output::warning(&format!(
                "Secret must be at least {min_len} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(secret));
    }
}

fn secret_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(SECRET_ENV_VAR) {
        Ok(secret) if !secret.is_empty() => Some(Zeroizing::new(secret)),
        _ => None,
    }
}

/// Read one line, dropping the trailing `\n` or `\r\n`.
fn read_secret_line(mut reader: impl BufRead) -> Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    reader.read_line(&mut line)?;

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Length is counted in characters, not bytes.
fn check_secret_len(secret: &str, min_len: usize) -> Result<()> {
    if secret.chars().count() < min_len {
        return Err(SaltcheckError::SecretTooShort(min_len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_secret_line_strips_newline() {
        let secret = read_secret_line(Cursor::new("hunter22\n")).unwrap();
        assert_eq!(secret.as_str(), "hunter22");
    }

    #[test]
    fn read_secret_line_strips_crlf() {
        let secret = read_secret_line(Cursor::new("hunter22\r\nignored\n")).unwrap();
        assert_eq!(secret.as_str(), "hunter22");
    }

    #[test]
    fn read_secret_line_keeps_inner_whitespace() {
        let secret = read_secret_line(Cursor::new("  two words  \n")).unwrap();
        assert_eq!(secret.as_str(), "  two words  ");
    }

    #[test]
    fn read_secret_line_handles_empty_input() {
        let secret = read_secret_line(Cursor::new("")).unwrap();
        assert!(secret.is_empty());
    }

    #[test]
    fn secret_len_counts_chars() {
        assert!(check_secret_len("pässwörd", 8).is_ok());
        assert!(check_secret_len("short", 8).is_err());
        assert!(check_secret_len("", 0).is_ok());
    }

    #[test]
    fn gate_role_requires_user() {
        let result = Cli::try_parse_from(["saltcheck", "gate", "--role", "admin"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_shell_is_case_insensitive() {
        let cli = Cli::try_parse_from(["saltcheck", "completions", "ZSH"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Zsh }
        ));
    }

    #[test]
    fn completions_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["saltcheck", "completions", "csh"]).is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "saltcheck",
            "inspect",
            "abc:def",
            "--project-dir",
            "/tmp/project",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.project_dir, "/tmp/project");
        assert!(cli.verbose);
    }
}
