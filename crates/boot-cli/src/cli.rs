//! CLI argument parsing using clap derive

use boot_env::Invocation;
use clap::Parser;
use std::path::PathBuf;

/// Rebuild the project's Python virtual environment, sync its
/// dependencies and run one script inside it
#[derive(Parser, Debug)]
#[command(name = "bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script to run, relative to the project root
    pub script: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root (defaults to the directory containing this binary)
    #[arg(long, env = "BOOTSTRAP_PROJECT_DIR", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Force the OS family instead of detecting it (linux, macos, windows).
    /// Selects the venv layout and script separator; tools still run on
    /// the host, so this only fits a host of that family
    #[arg(long, env = "BOOTSTRAP_PLATFORM", value_name = "NAME")]
    pub platform: Option<String>,

    /// Settings file (defaults to bootstrap.toml in the project root)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep the environment when the dependency manifest is unchanged
    #[arg(long)]
    pub reuse_unchanged: bool,
}

impl Cli {
    /// Describe this invocation for the provisioner.
    pub fn invocation(&self, invoked_as: PathBuf) -> Invocation {
        Invocation {
            invoked_as,
            project_dir: self.project_dir.clone(),
            platform: self.platform.clone(),
            config: self.config.clone(),
            reuse_unchanged: self.reuse_unchanged,
        }
    }
}
