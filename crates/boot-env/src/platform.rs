//! Host OS family detection and the venv layout it implies

use crate::error::{ProvisionError, Result};
use std::fmt;
use std::str::FromStr;

/// OS families the provisioner knows how to lay out a venv for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    MacOs,
    /// Native Windows and the POSIX layers on top of it (MSYS, Cygwin, MinGW)
    WindowsCompat,
}

impl Platform {
    /// Detect the family of the running host.
    pub fn detect() -> Result<Self> {
        Self::from_name(std::env::consts::OS)
    }

    /// Use `forced` when given, otherwise detect the host.
    pub fn resolve(forced: Option<&str>) -> Result<Self> {
        match forced {
            Some(name) => Self::from_name(name),
            None => Self::detect(),
        }
    }

    /// Map an OS name to a family.
    ///
    /// Accepts Rust target names (`linux`, `macos`, `windows`) as well as
    /// `uname -s` style strings (`Darwin`, `MINGW64_NT-10.0`, `CYGWIN_NT-10.0`).
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "linux" | "gnu/linux" => Ok(Self::Linux),
            "macos" | "darwin" | "osx" => Ok(Self::MacOs),
            "windows" | "win32" | "msys" | "cygwin" | "mingw" => Ok(Self::WindowsCompat),
            s if s.starts_with("msys") || s.starts_with("mingw") || s.starts_with("cygwin") => {
                Ok(Self::WindowsCompat)
            }
            _ => Err(ProvisionError::UnsupportedPlatform {
                name: name.trim().to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::WindowsCompat => "Windows",
        }
    }

    /// Path separator used when normalizing caller-supplied paths.
    pub fn separator(self) -> char {
        match self {
            Self::Linux | Self::MacOs => '/',
            Self::WindowsCompat => '\\',
        }
    }

    /// Name of the venv subdirectory holding executables.
    pub fn bin_dir(self) -> &'static str {
        match self {
            Self::Linux | Self::MacOs => "bin",
            Self::WindowsCompat => "Scripts",
        }
    }

    pub fn exe_suffix(self) -> &'static str {
        match self {
            Self::Linux | Self::MacOs => "",
            Self::WindowsCompat => ".exe",
        }
    }

    /// Base interpreter used to create the venv when none is configured.
    pub fn default_interpreter(self) -> &'static str {
        match self {
            Self::Linux | Self::MacOs => "python3",
            Self::WindowsCompat => "python",
        }
    }

    /// File name of an executable called `stem` inside the venv.
    pub fn executable_name(self, stem: &str) -> String {
        format!("{}{}", stem, self.exe_suffix())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("linux", Platform::Linux)]
    #[case("Linux", Platform::Linux)]
    #[case("Darwin", Platform::MacOs)]
    #[case("macos", Platform::MacOs)]
    #[case("windows", Platform::WindowsCompat)]
    #[case("MINGW64_NT-10.0-19045", Platform::WindowsCompat)]
    #[case("MSYS_NT-10.0", Platform::WindowsCompat)]
    #[case("CYGWIN_NT-10.0", Platform::WindowsCompat)]
    fn test_from_name(#[case] name: &str, #[case] expected: Platform) {
        assert_eq!(Platform::from_name(name).unwrap(), expected);
    }

    #[rstest]
    #[case("freebsd")]
    #[case("SunOS")]
    #[case("")]
    fn test_from_name_unsupported(#[case] name: &str) {
        let err = Platform::from_name(name).unwrap_err();
        assert!(matches!(err, ProvisionError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn test_windows_layout() {
        let p = Platform::WindowsCompat;
        assert_eq!(p.bin_dir(), "Scripts");
        assert_eq!(p.executable_name("uv"), "uv.exe");
        assert_eq!(p.separator(), '\\');
    }

    #[test]
    fn test_unix_layout() {
        for p in [Platform::Linux, Platform::MacOs] {
            assert_eq!(p.bin_dir(), "bin");
            assert_eq!(p.executable_name("python"), "python");
            assert_eq!(p.separator(), '/');
            assert_eq!(p.default_interpreter(), "python3");
        }
    }

    #[test]
    fn test_resolve_prefers_forced_value() {
        assert_eq!(Platform::resolve(Some("darwin")).unwrap(), Platform::MacOs);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_detect_on_linux_host() {
        assert_eq!(Platform::detect().unwrap(), Platform::Linux);
    }
}
