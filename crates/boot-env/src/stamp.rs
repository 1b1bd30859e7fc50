//! Manifest fingerprint stamps for reuse mode

use crate::context::ProvisionContext;
use crate::error::{ProvisionError, Result};
use boot_fs::{Error, checksum, io};

/// Fingerprint of the dependency manifest and lock file.
///
/// `None` when the manifest does not exist.
pub fn fingerprint(ctx: &ProvisionContext) -> Result<Option<String>> {
    let manifest = ctx.manifest_path().to_native();
    let lock = ctx.lock_path().to_native();
    checksum::compute_fingerprint(&manifest, &[lock.as_path()])
        .map_err(|e| ProvisionError::from(Error::io(&manifest, e)))
}

/// Whether the venv on disk was synced against `fingerprint`.
pub fn is_current(ctx: &ProvisionContext, fingerprint: &str) -> bool {
    if !ctx.venv_executable("python").exists() {
        return false;
    }
    match io::read_text(&ctx.stamp_path()) {
        Ok(recorded) => recorded.trim() == fingerprint,
        Err(_) => false,
    }
}

pub fn write(ctx: &ProvisionContext, fingerprint: &str) -> Result<()> {
    io::write_text(&ctx.stamp_path(), &format!("{}\n", fingerprint))?;
    Ok(())
}
