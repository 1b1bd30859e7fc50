//! uv-based toolchain

use super::{CommandOutcome, Toolchain};
use crate::context::{ProvisionContext, ScriptPath};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Toolchain backed by `python -m venv`, pip and uv.
///
/// The venv is created by the base interpreter, uv is pip-installed into
/// it when missing, and both `uv sync` and `uv run` are executed with the
/// venv's own uv binary so the host installation is never consulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct UvToolchain;

impl UvToolchain {
    pub fn new() -> Self {
        Self
    }

    /// A command running the venv's dependency manager, pointed at the venv.
    fn manager_command(context: &ProvisionContext) -> Command {
        let venv = context.venv_path().to_native();
        let mut cmd = Command::new(context.venv_executable(context.manager()).to_native());
        cmd.current_dir(context.root.to_native())
            .env("VIRTUAL_ENV", &venv)
            .env("UV_PROJECT_ENVIRONMENT", &venv);
        cmd
    }
}

#[async_trait]
impl Toolchain for UvToolchain {
    async fn create_venv(&self, context: &ProvisionContext) -> std::io::Result<CommandOutcome> {
        let venv = context.venv_path().to_native();
        tracing::debug!(
            interpreter = context.interpreter(),
            venv = %venv.display(),
            "running <interpreter> -m venv"
        );

        let output = Command::new(context.interpreter())
            .args(["-m", "venv"])
            .arg(&venv)
            .current_dir(context.root.to_native())
            .stdin(Stdio::null())
            .output()
            .await?;

        let mut transcript = format!("$ {} -m venv {}\n", context.interpreter(), venv.display());
        transcript.push_str(&String::from_utf8_lossy(&output.stdout));
        transcript.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutcome::from(output.status).with_transcript(transcript))
    }

    async fn probe_version(&self, context: &ProvisionContext) -> Option<String> {
        let output = Self::manager_command(context)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .ok()?;

        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn install(&self, context: &ProvisionContext) -> std::io::Result<CommandOutcome> {
        let python = context.venv_executable("python").to_native();
        tracing::debug!(python = %python.display(), package = context.manager(), "pip install");

        let status = Command::new(python)
            .args(["-m", "pip", "install", context.manager()])
            .current_dir(context.root.to_native())
            .status()
            .await?;

        Ok(status.into())
    }

    async fn sync(&self, context: &ProvisionContext) -> std::io::Result<CommandOutcome> {
        tracing::debug!(manager = context.manager(), "running sync");
        let status = Self::manager_command(context).arg("sync").status().await?;
        Ok(status.into())
    }

    async fn run_script(
        &self,
        context: &ProvisionContext,
        script: &ScriptPath,
    ) -> std::io::Result<CommandOutcome> {
        tracing::debug!(script = %script.relative, "running script");
        let status = Self::manager_command(context)
            .arg("run")
            .arg(&script.relative)
            .status()
            .await?;
        Ok(status.into())
    }
}
