use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LicenseFileLocator port for finding license files copied by `conan install`
///
/// After an install, Conan deploys each package's license files under
/// `<project>/licenses/<name>/`. This port abstracts that lookup.
pub trait LicenseFileLocator {
    /// Finds the first license file for a package
    ///
    /// # Arguments
    /// * `package_name` - Name of the package (identifier part before `/`)
    /// * `project_root` - Directory `conan install` was run in
    ///
    /// # Returns
    /// Path of the first match for `licenses/<name>/**/LICENSE*`, or `None`
    fn locate(&self, package_name: &str, project_root: &Path) -> Option<PathBuf>;

    /// Reads the full contents of a located license file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read. Callers treat this the
    /// same as a missing file.
    fn read_license_text(&self, path: &Path) -> Result<String>;
}
