/// Mock implementations for testing
mod mock_license_file_locator;
mod mock_process_runner;
mod mock_profile_installer;
mod mock_progress_reporter;

pub use mock_license_file_locator::MockLicenseFileLocator;
pub use mock_process_runner::MockProcessRunner;
pub use mock_profile_installer::MockProfileInstaller;
pub use mock_progress_reporter::MockProgressReporter;
