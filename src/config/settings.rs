use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SaltcheckError};

/// Project-level configuration, loaded from `.saltcheck.toml`.
///
/// Every field has a sensible default so saltcheck works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Environment variable holding the stored hash (default: ADMIN_PASSWORD_HASH).
    #[serde(default = "default_hash_env_var")]
    pub hash_env_var: String,

    /// Stored hash kept directly in the config file, used as a last resort.
    #[serde(default)]
    pub stored_hash: Option<String>,

    /// Minimum length for newly hashed secrets (default: 8).
    #[serde(default = "default_min_secret_len")]
    pub min_secret_len: usize,

    /// Where the admin gate sends visitors without a session.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,

    /// Where the admin gate sends signed-in non-admins.
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_hash_env_var() -> String {
    "ADMIN_PASSWORD_HASH".to_string()
}

fn default_min_secret_len() -> usize {
    8
}

fn default_sign_in_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            hash_env_var: default_hash_env_var(),
            stored_hash: None,
            min_secret_len: default_min_secret_len(),
            sign_in_path: default_sign_in_path(),
            home_path: default_home_path(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".saltcheck.toml";

    /// Load settings from `<project_dir>/.saltcheck.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SaltcheckError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!(path = %config_path.display(), "loaded config file");
        Ok(settings)
    }

    /// Resolve the stored hash to verify against.
    ///
    /// Order: explicit value, then the `hash_env_var` environment
    /// variable, then `stored_hash` from the config file. Empty values are
    /// skipped.
    pub fn resolve_stored_hash(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(value) = explicit.filter(|v| !v.is_empty()) {
            return Ok(value.to_string());
        }

        if let Ok(value) = std::env::var(&self.hash_env_var) {
            if !value.is_empty() {
                return Ok(value);
            }
        }

        match self.stored_hash.as_deref().filter(|v| !v.is_empty()) {
            Some(value) => Ok(value.to_string()),
            None => Err(SaltcheckError::NoStoredHash(self.hash_env_var.clone())),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
