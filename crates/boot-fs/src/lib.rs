//! Filesystem helpers for the venv bootstrap provisioner
//!
//! Separator-normalized paths, root containment checks, manifest
//! checksums, atomic writes and TOML config loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::load_toml;
pub use error::{Error, Result};
pub use path::{NormalizedPath, contained_file, is_strict_subpath, normalize_separators};
