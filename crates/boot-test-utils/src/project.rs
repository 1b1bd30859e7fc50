//! [`TestProject`] builder for provisioning scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use boot_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.with_script("agent.py").with_manifest();
/// project.assert_file_exists("agent.py");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a small Python script at `relative`, creating parent dirs.
    pub fn with_script(&self, relative: &str) -> &Self {
        self.write(relative, "print('interface agent ready')\n")
    }

    /// Write a minimal `pyproject.toml`.
    pub fn with_manifest(&self) -> &Self {
        self.write(
            "pyproject.toml",
            "[project]\nname = \"interface-agent\"\nversion = \"0.1.0\"\ndependencies = []\n",
        )
    }

    /// Write a `bootstrap.toml` with the given body.
    pub fn with_settings(&self, body: &str) -> &Self {
        self.write("bootstrap.toml", body)
    }

    /// Lay out a venv as left behind by a previous run.
    ///
    /// Includes a `marker` file that only an untouched venv still contains.
    pub fn with_existing_venv(&self) -> &Self {
        self.write(".venv/bin/python", "")
            .write(".venv/pyvenv.cfg", "home = /usr/bin\n")
            .write(".venv/marker", "left by previous run\n")
    }

    /// Write `content` at `relative`, creating parent dirs.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.path(relative).is_file(),
            "expected file {} to exist",
            relative
        );
    }

    pub fn assert_not_exists(&self, relative: &str) {
        assert!(
            !self.path(relative).exists(),
            "expected {} to be absent",
            relative
        );
    }
}
