use crate::ports::outbound::ProfileInstaller;
use crate::shared::error::ScanError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback Conan home when neither `CONAN_USER_HOME` nor `HOME` is set
const FALLBACK_CONAN_HOME: &str = "/root";

/// ConanHomeProfileInstaller adapter for switching the Conan default profile
///
/// Copies the requested profile over `<conan home>/.conan/profiles/default`,
/// which is the profile a bare `conan install .` picks up.
pub struct ConanHomeProfileInstaller {
    conan_home: PathBuf,
}

impl ConanHomeProfileInstaller {
    /// Creates an installer for the Conan home of the current environment
    pub fn new() -> Self {
        Self::with_home(resolve_conan_home(
            env::var("CONAN_USER_HOME").ok(),
            env::var("HOME").ok(),
        ))
    }

    pub fn with_home(conan_home: PathBuf) -> Self {
        Self { conan_home }
    }

    pub fn default_profile_path(&self) -> PathBuf {
        self.conan_home
            .join(".conan")
            .join("profiles")
            .join("default")
    }
}

impl Default for ConanHomeProfileInstaller {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the Conan home: `CONAN_USER_HOME`, then `HOME`, then `/root`; empty values count as unset
fn resolve_conan_home(conan_user_home: Option<String>, home: Option<String>) -> PathBuf {
    conan_user_home
        .filter(|v| !v.is_empty())
        .or_else(|| home.filter(|v| !v.is_empty()))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FALLBACK_CONAN_HOME))
}

impl ProfileInstaller for ConanHomeProfileInstaller {
    fn install_profile(&self, profile_file: &Path) -> Result<PathBuf> {
        if !profile_file.exists() {
            return Err(ScanError::ProfileNotFound {
                path: profile_file.to_path_buf(),
            }
            .into());
        }

        let install_error = |details: String| ScanError::ProfileInstallError {
            path: profile_file.to_path_buf(),
            details,
        };

        validate_regular_file(profile_file, "Conan profile")
            .map_err(|e| install_error(e.to_string()))?;

        let target = self.default_profile_path();
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                install_error(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        fs::copy(profile_file, &target).map_err(|e| {
            install_error(format!("Failed to copy to {}: {}", target.display(), e))
        })?;

        Ok(target)
    }
}
