//! Execution context threaded through a provisioning run
//!
//! The context carries the project root, the platform family and the
//! settings explicitly, so nothing depends on the process working
//! directory.

use crate::error::{ProvisionError, Result};
use crate::platform::Platform;
use crate::settings::Settings;
use boot_fs::{NormalizedPath, contained_file, normalize_separators};
use std::path::{Path, PathBuf};

/// Name of the fingerprint file kept inside the venv
pub const STAMP_FILE: &str = ".bootstrap-stamp";

/// How the provisioner was started, before anything is resolved.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Literal path the binary was invoked as (`argv[0]`)
    pub invoked_as: PathBuf,
    /// Overrides the location-derived project root
    pub project_dir: Option<PathBuf>,
    /// Forced OS family name
    pub platform: Option<String>,
    /// Settings file, relative to the project root unless absolute
    pub config: Option<PathBuf>,
    pub reuse_unchanged: bool,
}

/// A target script that has been normalized and found under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPath {
    /// Caller's path with separators in the platform convention
    pub relative: String,
    /// Canonical absolute location
    pub resolved: PathBuf,
}

/// Context passed to the provisioner and the toolchain
#[derive(Debug, Clone)]
pub struct ProvisionContext {
    pub root: NormalizedPath,
    pub platform: Platform,
    pub settings: Settings,
}

impl ProvisionContext {
    pub fn new(root: impl AsRef<Path>, platform: Platform, settings: Settings) -> Self {
        Self {
            root: NormalizedPath::new(root),
            platform,
            settings,
        }
    }

    /// Resolve the project root, platform and settings for an invocation.
    ///
    /// The platform is checked before the root is touched, so an
    /// unsupported host fails without any directory access.
    pub fn prepare(invocation: &Invocation) -> Result<Self> {
        let located = match &invocation.project_dir {
            Some(dir) => absolutize(dir),
            None => resolve_self_dir(std::env::current_exe().ok(), &invocation.invoked_as),
        };

        let platform = Platform::resolve(invocation.platform.as_deref())?;
        tracing::info!(platform = %platform, "detected platform");

        let root = enter_root(&located)?;
        tracing::info!(root = %root.display(), "project root");

        let mut settings = Settings::load(&root, invocation.config.as_deref())?;
        if invocation.reuse_unchanged {
            settings.reuse_unchanged = true;
        }

        Ok(Self::new(root, platform, settings))
    }

    /// Normalize `raw` to the platform convention and check that it names
    /// a regular file under the root.
    ///
    /// The existence check uses the host separator, so a forced family
    /// still finds nested scripts on the machine it runs on.
    pub fn locate_script(&self, raw: &str) -> Result<ScriptPath> {
        let relative = normalize_separators(raw, self.platform.separator());
        let on_host = normalize_separators(raw, std::path::MAIN_SEPARATOR);
        match contained_file(&self.root.to_native(), Path::new(&on_host)) {
            Some(resolved) => Ok(ScriptPath { relative, resolved }),
            None => Err(ProvisionError::ScriptNotFound {
                script: relative,
                root: self.root.to_native(),
            }),
        }
    }

    pub fn venv_path(&self) -> NormalizedPath {
        self.root.join(&self.settings.venv_dir)
    }

    /// Path of an executable inside the venv, e.g. `.venv/bin/uv`.
    pub fn venv_executable(&self, stem: &str) -> NormalizedPath {
        self.venv_path()
            .join(self.platform.bin_dir())
            .join(&self.platform.executable_name(stem))
    }

    pub fn log_path(&self) -> NormalizedPath {
        self.root.join(&self.settings.log_file)
    }

    pub fn stamp_path(&self) -> NormalizedPath {
        self.venv_path().join(STAMP_FILE)
    }

    pub fn manifest_path(&self) -> NormalizedPath {
        self.root.join(&self.settings.manifest)
    }

    pub fn lock_path(&self) -> NormalizedPath {
        self.root.join(&self.settings.lock_file)
    }

    pub fn interpreter(&self) -> &str {
        self.settings
            .interpreter
            .as_deref()
            .unwrap_or(self.platform.default_interpreter())
    }

    pub fn manager(&self) -> &str {
        &self.settings.manager
    }
}

/// Directory containing the running executable.
///
/// Symlinks are followed through the canonical executable path. When that
/// is unavailable the literal invocation path is used instead.
pub fn resolve_self_dir(current_exe: Option<PathBuf>, invoked_as: &Path) -> PathBuf {
    let exe = current_exe
        .and_then(|p| dunce::canonicalize(p).ok())
        .unwrap_or_else(|| absolutize(invoked_as));

    match exe.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => exe,
    }
}

/// Verify `path` is an accessible directory and return its canonical form.
pub fn enter_root(path: &Path) -> Result<PathBuf> {
    let directory_error = |reason: String| ProvisionError::Directory {
        path: path.to_path_buf(),
        reason,
    };

    let meta = std::fs::metadata(path).map_err(|e| directory_error(e.to_string()))?;
    if !meta.is_dir() {
        return Err(directory_error("not a directory".to_string()));
    }
    std::fs::read_dir(path).map_err(|e| directory_error(e.to_string()))?;

    dunce::canonicalize(path).map_err(|e| directory_error(e.to_string()))
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
