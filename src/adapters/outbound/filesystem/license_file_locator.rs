use crate::ports::outbound::LicenseFileLocator;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// GlobLicenseFileLocator adapter for the license directory deployed by `conan install`
///
/// Searches `<project_root>/licenses/<name>/**/LICENSE*` and returns the
/// first regular file in lexical order. Symlinks are skipped, since the
/// reader refuses them.
pub struct GlobLicenseFileLocator;

impl GlobLicenseFileLocator {
    pub fn new() -> Self {
        Self
    }

    fn search_pattern(package_name: &str, project_root: &Path) -> String {
        format!(
            "{}/licenses/{}/**/LICENSE*",
            Pattern::escape(&project_root.to_string_lossy()),
            Pattern::escape(package_name)
        )
    }
}

impl Default for GlobLicenseFileLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseFileLocator for GlobLicenseFileLocator {
    fn locate(&self, package_name: &str, project_root: &Path) -> Option<PathBuf> {
        if package_name.is_empty() {
            return None;
        }

        let pattern = Self::search_pattern(package_name, project_root);
        glob(&pattern)
            .ok()?
            .filter_map(|entry| entry.ok())
            .find(|path| {
                fs::symlink_metadata(path)
                    .map(|metadata| metadata.is_file())
                    .unwrap_or(false)
            })
    }

    fn read_license_text(&self, path: &Path) -> Result<String> {
        safe_read_to_string(path, "license file")
    }
}
