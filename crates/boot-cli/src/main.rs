//! venv bootstrap CLI
//!
//! Rebuilds the project's virtual environment and runs one script in it.

mod cli;
mod error;
mod logging;

use boot_env::{ProvisionContext, ProvisionError, Provisioner, UvToolchain};
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use std::path::PathBuf;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let err = CliError::usage(e.render().to_string());
            report(&err);
            std::process::exit(err.exit_code());
        }
    };

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "bootstrap failed");
        report(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose).map_err(|e| CliError::Logging(e.to_string()))?;

    let invoked_as = std::env::args_os()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bootstrap"));
    let invocation = cli.invocation(invoked_as);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let summary = runtime.block_on(async {
        let context = ProvisionContext::prepare(&invocation)?;
        Provisioner::new(context, UvToolchain::new())
            .provision_and_run(&cli.script)
            .await
    })?;

    println!(
        "{} {} completed in {}",
        "✓".green().bold(),
        summary.script.cyan(),
        summary.venv
    );
    Ok(())
}

/// Print an error to stderr, passing tool output through untouched.
fn report(err: &CliError) {
    match err {
        CliError::Provision(ProvisionError::Usage { message }) => {
            eprint!("{}", message);
        }
        CliError::Provision(ProvisionError::VenvCreation { transcript, .. }) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            eprint!("{}", transcript);
        }
        _ => eprintln!("{}: {}", "error".red().bold(), err),
    }
}
