use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ProfileInstaller port for selecting the Conan profile used by `conan install`
///
/// `conan install .` always resolves against the default profile, so
/// scanning with a specific profile means installing it as the default first.
pub trait ProfileInstaller {
    /// Makes `profile_file` the active default profile
    ///
    /// # Returns
    /// The path the profile was installed to
    ///
    /// # Errors
    /// Returns an error if the profile does not exist or cannot be copied
    fn install_profile(&self, profile_file: &Path) -> Result<PathBuf>;
}
