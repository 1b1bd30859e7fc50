//! Error types for boot-env

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Every way a provisioning run can abort.
///
/// None of these are retried; the first one ends the run.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("{message}")]
    Usage { message: String },

    #[error("Cannot enter project directory {path}: {reason}")]
    Directory { path: PathBuf, reason: String },

    #[error("Unsupported platform '{name}'. Supported: Linux, macOS, Windows (MSYS, Cygwin, MinGW)")]
    UnsupportedPlatform { name: String },

    #[error("Script not found under {root}: {script}")]
    ScriptNotFound { script: String, root: PathBuf },

    #[error("Virtual environment creation failed at {venv}; {log_status}")]
    VenvCreation {
        venv: PathBuf,
        log: PathBuf,
        /// Where the transcript went, or why it could not be saved
        log_status: String,
        transcript: String,
    },

    #[error("Failed to install {tool} into the virtual environment: {reason}")]
    ToolInstall { tool: String, reason: String },

    #[error("Dependency sync failed: {reason}")]
    Sync { reason: String },

    #[error("Script {script} failed: {reason}")]
    Execution {
        script: String,
        code: Option<i32>,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[source] boot_fs::Error),

    #[error("Invalid configuration: {key} = {value:?} must be a relative path inside the project root")]
    InvalidSetting { key: &'static str, value: String },

    #[error(transparent)]
    Fs(#[from] boot_fs::Error),
}

impl ProvisionError {
    /// Short class name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "UsageError",
            Self::Directory { .. } => "DirectoryError",
            Self::UnsupportedPlatform { .. } => "UnsupportedPlatformError",
            Self::ScriptNotFound { .. } => "ScriptNotFoundError",
            Self::VenvCreation { .. } => "VenvCreationError",
            Self::ToolInstall { .. } => "ToolInstallError",
            Self::Sync { .. } => "SyncError",
            Self::Execution { .. } => "ExecutionError",
            Self::Config(_) | Self::InvalidSetting { .. } => "ConfigError",
            Self::Fs(_) => "FilesystemError",
        }
    }

    /// Process exit code for this failure.
    ///
    /// Callers only distinguish success from failure, so every kind maps
    /// to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Describe a finished child process for an error message.
pub(crate) fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by signal".to_string(),
    }
}
