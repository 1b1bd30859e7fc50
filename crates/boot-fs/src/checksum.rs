//! SHA-256 checksum utilities
//!
//! Fingerprints use the canonical `sha256:<hex>` format and cover the
//! dependency manifest so an unchanged environment can be detected.

use sha2::{Digest, Sha256};
use std::path::Path;

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute one checksum over several files, in order.
///
/// Missing files are skipped, but their name still feeds the hash so that
/// adding or removing an optional file changes the result. Returns `None`
/// when the first (required) file is missing.
pub fn compute_fingerprint(required: &Path, optional: &[&Path]) -> std::io::Result<Option<String>> {
    if !required.is_file() {
        return Ok(None);
    }

    let mut hasher = Sha256::new();
    hasher.update(std::fs::read(required)?);

    for path in optional {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        hasher.update(name.unwrap_or_default().as_bytes());
        hasher.update([0u8]);
        if path.is_file() {
            hasher.update(std::fs::read(path)?);
        }
        hasher.update([0u8]);
    }

    Ok(Some(format!("{}{:x}", PREFIX, hasher.finalize())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_of_lone_manifest_is_its_sha256() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("pyproject.toml");
        std::fs::write(&manifest, "hello world").unwrap();

        assert_eq!(
            compute_fingerprint(&manifest, &[]).unwrap().as_deref(),
            Some("sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
        );
    }

    #[test]
    fn fingerprint_none_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("pyproject.toml");
        let lock = dir.path().join("uv.lock");
        assert_eq!(compute_fingerprint(&manifest, &[lock.as_path()]).unwrap(), None);
    }

    #[test]
    fn fingerprint_changes_when_lock_appears() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("pyproject.toml");
        let lock = dir.path().join("uv.lock");
        std::fs::write(&manifest, "[project]\nname = \"agent\"\n").unwrap();

        let before = compute_fingerprint(&manifest, &[lock.as_path()]).unwrap().unwrap();
        std::fs::write(&lock, "version = 1\n").unwrap();
        let after = compute_fingerprint(&manifest, &[lock.as_path()]).unwrap().unwrap();

        assert!(before.starts_with("sha256:"));
        assert_ne!(before, after);
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("pyproject.toml");
        std::fs::write(&manifest, "[project]\nname = \"agent\"\n").unwrap();

        let a = compute_fingerprint(&manifest, &[]).unwrap();
        let b = compute_fingerprint(&manifest, &[]).unwrap();
        assert_eq!(a, b);
    }
}
