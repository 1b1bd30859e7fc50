//! Python virtual environment provisioning.
//!
//! Given a script path, this crate destroys and rebuilds the project's
//! virtual environment, installs the dependency manager into it, syncs the
//! declared dependencies and finally runs the script inside the fresh
//! environment. External tools are reached through the [`Toolchain`] trait
//! so the whole sequence can be exercised with a fake.

pub mod context;
pub mod error;
pub mod platform;
pub mod provisioner;
pub mod settings;
pub mod stamp;
pub mod toolchain;

pub use context::{Invocation, ProvisionContext, ScriptPath};
pub use error::{ProvisionError, Result};
pub use platform::Platform;
pub use provisioner::{Provisioner, RunSummary};
pub use settings::Settings;
pub use toolchain::{CommandOutcome, Toolchain, UvToolchain};
