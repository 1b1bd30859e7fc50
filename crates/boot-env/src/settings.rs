//! Optional `bootstrap.toml` project settings

use crate::error::{ProvisionError, Result};
use boot_fs::{NormalizedPath, is_strict_subpath};
use serde::Deserialize;
use std::path::Path;

/// Settings file looked up in the project root when none is given.
pub const SETTINGS_FILE: &str = "bootstrap.toml";

/// Project-level provisioning settings.
///
/// Every key is optional; an absent file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Venv directory, relative to the project root
    pub venv_dir: String,
    /// Provisioning transcript, relative to the project root
    pub log_file: String,
    /// Base interpreter; falls back to the platform default
    pub interpreter: Option<String>,
    /// Dependency manager executable and pip package name
    pub manager: String,
    /// Dependency manifest fingerprinted in reuse mode
    pub manifest: String,
    /// Lock file folded into the fingerprint when present
    pub lock_file: String,
    /// Keep the venv when the manifest fingerprint is unchanged
    pub reuse_unchanged: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            venv_dir: ".venv".to_string(),
            log_file: "venv_creation.log".to_string(),
            interpreter: None,
            manager: "uv".to_string(),
            manifest: "pyproject.toml".to_string(),
            lock_file: "uv.lock".to_string(),
            reuse_unchanged: false,
        }
    }
}

impl Settings {
    /// Load settings for the project at `root`.
    ///
    /// An explicit `path` must exist. Without one, `bootstrap.toml` in the
    /// root is used if present, and defaults otherwise.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) if p.is_absolute() => NormalizedPath::new(p),
            Some(p) => NormalizedPath::new(root.join(p)),
            None => {
                let default = NormalizedPath::new(root.join(SETTINGS_FILE));
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", SETTINGS_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        tracing::debug!(path = %file, "loading settings");
        let settings: Self = boot_fs::load_toml(&file).map_err(ProvisionError::Config)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the paths the provisioner deletes or overwrites stay
    /// strictly below the project root.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [("venv_dir", &self.venv_dir), ("log_file", &self.log_file)] {
            if !is_strict_subpath(value) {
                return Err(ProvisionError::InvalidSetting {
                    key,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
