/// Filesystem adapters for file I/O operations
mod file_writer;
mod license_file_locator;
mod profile_installer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use license_file_locator::GlobLicenseFileLocator;
pub use profile_installer::ConanHomeProfileInstaller;
