//! Error types for boot-cli

use boot_env::ProvisionError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the provisioning run
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Logging could not be set up
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Provision(ProvisionError::Usage {
            message: message.into(),
        })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Provision(e) => e.exit_code(),
            _ => 1,
        }
    }
}
