//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Paths are kept with forward slashes and rendered in a platform's
/// convention only when they are handed to the filesystem or a child
/// process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a PathBuf for I/O operations on the running host.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Rewrite every `/` and `\` in `path` to `separator`.
pub fn normalize_separators(path: &str, separator: char) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { separator } else { c })
        .collect()
}

/// Whether `value` names a location strictly below the directory it is
/// joined onto.
///
/// Either separator is accepted. Empty values, absolute paths, drive
/// prefixes, `..` segments and values made only of `.` segments are
/// rejected.
pub fn is_strict_subpath(value: &str) -> bool {
    let normalized = normalize_separators(value, '/');
    if normalized.starts_with('/') || normalized.as_bytes().get(1) == Some(&b':') {
        return false;
    }

    let mut nested = false;
    for segment in normalized.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if segment == ".." {
            return false;
        }
        nested = true;
    }
    nested
}

/// Resolve `relative` against `root` and return its canonical path when it
/// names a regular file that stays inside `root`.
///
/// Symlinks are followed, so a link pointing outside the root is rejected
/// just like a `..` escape.
pub fn contained_file(root: &Path, relative: &Path) -> Option<PathBuf> {
    let root = dunce::canonicalize(root).ok()?;
    let candidate = dunce::canonicalize(root.join(relative)).ok()?;

    if !candidate.starts_with(&root) {
        tracing::debug!(
            candidate = %candidate.display(),
            root = %root.display(),
            "path escapes project root"
        );
        return None;
    }

    candidate.is_file().then_some(candidate)
}
