//! External tool capabilities used while provisioning

mod uv;

pub use uv::UvToolchain;

use crate::context::{ProvisionContext, ScriptPath};
use async_trait::async_trait;

/// Result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured output, only for steps that capture it
    pub transcript: String,
}

impl CommandOutcome {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            transcript: String::new(),
        }
    }

    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = transcript.into();
        self
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            transcript: String::new(),
        }
    }
}

/// The external tools a provisioning run needs.
///
/// `Err` means the process could not be started at all; a process that ran
/// and failed is reported through [`CommandOutcome`].
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Build a fresh venv with the base interpreter, capturing its output.
    async fn create_venv(&self, context: &ProvisionContext) -> std::io::Result<CommandOutcome>;

    /// Version of the dependency manager inside the venv, if it runs.
    async fn probe_version(&self, context: &ProvisionContext) -> Option<String>;

    /// Install the dependency manager into the venv.
    async fn install(&self, context: &ProvisionContext) -> std::io::Result<CommandOutcome>;

    /// Materialize the declared dependencies into the venv.
    async fn sync(&self, context: &ProvisionContext) -> std::io::Result<CommandOutcome>;

    /// Run the target script inside the venv.
    async fn run_script(
        &self,
        context: &ProvisionContext,
        script: &ScriptPath,
    ) -> std::io::Result<CommandOutcome>;
}
