//! The destroy-and-rebuild provisioning sequence

use crate::context::{ProvisionContext, ScriptPath};
use crate::error::{ProvisionError, Result, describe_exit};
use crate::stamp;
use crate::toolchain::Toolchain;
use boot_fs::{NormalizedPath, io};
use tracing::{info, warn};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub venv: NormalizedPath,
    pub script: String,
    /// `false` only when reuse mode kept an unchanged venv
    pub rebuilt: bool,
    /// Version reported by the dependency manager
    pub manager_version: Option<String>,
}

/// Provisions the project's venv and runs one script inside it.
///
/// Every step either succeeds or aborts the run. A later invocation starts
/// over from scratch.
pub struct Provisioner<T: Toolchain> {
    context: ProvisionContext,
    toolchain: T,
}

impl<T: Toolchain> Provisioner<T> {
    pub fn new(context: ProvisionContext, toolchain: T) -> Self {
        Self { context, toolchain }
    }

    pub fn context(&self) -> &ProvisionContext {
        &self.context
    }

    pub fn toolchain(&self) -> &T {
        &self.toolchain
    }

    /// Provision the venv and run `script` in it.
    ///
    /// The script is located before anything on disk changes, so a bad path
    /// never costs the existing venv.
    pub async fn provision_and_run(&self, script: &str) -> Result<RunSummary> {
        self.context.settings.validate()?;
        let script = self.context.locate_script(script)?;
        info!(script = %script.relative, "target script found");

        let fingerprint = if self.context.settings.reuse_unchanged {
            stamp::fingerprint(&self.context)?
        } else {
            None
        };

        let reuse = fingerprint
            .as_deref()
            .is_some_and(|fp| stamp::is_current(&self.context, fp));

        if reuse {
            info!("dependency manifest unchanged, keeping existing environment");
        } else {
            self.rebuild_venv().await?;
        }

        let manager_version = self.ensure_manager().await?;
        self.sync().await?;

        if let Some(fp) = fingerprint.as_deref() {
            stamp::write(&self.context, fp)?;
        }

        self.run(&script).await?;
        info!(script = %script.relative, "script completed successfully");

        Ok(RunSummary {
            venv: self.context.venv_path(),
            script: script.relative,
            rebuilt: !reuse,
            manager_version,
        })
    }

    /// Delete any existing venv and create a fresh one.
    async fn rebuild_venv(&self) -> Result<()> {
        let venv = self.context.venv_path();
        if io::remove_dir_if_exists(&venv)? {
            info!(venv = %venv, "removed existing virtual environment");
        }

        info!(interpreter = self.context.interpreter(), "creating virtual environment");
        let log = self.context.log_path();
        let outcome = self.toolchain.create_venv(&self.context).await;

        let (succeeded, transcript) = match outcome {
            Ok(outcome) => (outcome.success(), outcome.transcript),
            Err(e) => (
                false,
                format!("failed to launch {}: {}\n", self.context.interpreter(), e),
            ),
        };

        let written = io::write_text(&log, &transcript);

        if !succeeded {
            let log_status = match written {
                Ok(()) => format!("transcript written to {}", log),
                Err(e) => {
                    warn!(log = %log, error = %e, "could not save provisioning transcript");
                    format!("transcript could not be saved ({})", e)
                }
            };
            return Err(ProvisionError::VenvCreation {
                venv: venv.to_native(),
                log: log.to_native(),
                log_status,
                transcript,
            });
        }
        written?;

        info!(venv = %venv, log = %log, "virtual environment created");
        Ok(())
    }

    /// Make sure the dependency manager runs inside the venv.
    async fn ensure_manager(&self) -> Result<Option<String>> {
        let manager = self.context.manager();
        if let Some(version) = self.toolchain.probe_version(&self.context).await {
            info!(manager, version = %version, "dependency manager present");
            return Ok(Some(version));
        }

        warn!(manager, "dependency manager not found in environment, installing");
        let outcome = self
            .toolchain
            .install(&self.context)
            .await
            .map_err(|e| ProvisionError::ToolInstall {
                tool: manager.to_string(),
                reason: e.to_string(),
            })?;

        if !outcome.success() {
            return Err(ProvisionError::ToolInstall {
                tool: manager.to_string(),
                reason: describe_exit(outcome.code),
            });
        }

        Ok(self.toolchain.probe_version(&self.context).await)
    }

    async fn sync(&self) -> Result<()> {
        info!(manager = self.context.manager(), "syncing dependencies");
        let outcome = self
            .toolchain
            .sync(&self.context)
            .await
            .map_err(|e| ProvisionError::Sync {
                reason: format!("failed to launch {}: {}", self.context.manager(), e),
            })?;

        if !outcome.success() {
            return Err(ProvisionError::Sync {
                reason: describe_exit(outcome.code),
            });
        }
        Ok(())
    }

    async fn run(&self, script: &ScriptPath) -> Result<()> {
        info!(script = %script.relative, "running script in environment");
        let outcome = self
            .toolchain
            .run_script(&self.context, script)
            .await
            .map_err(|e| ProvisionError::Execution {
                script: script.relative.clone(),
                code: None,
                reason: format!("failed to launch {}: {}", self.context.manager(), e),
            })?;

        if !outcome.success() {
            return Err(ProvisionError::Execution {
                script: script.relative.clone(),
                code: outcome.code,
                reason: describe_exit(outcome.code),
            });
        }
        Ok(())
    }
}
