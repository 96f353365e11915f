/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (processes, file system, console).
pub mod license_file_locator;
pub mod output_presenter;
pub mod process_runner;
pub mod profile_installer;
pub mod progress_reporter;
pub mod report_formatter;

pub use license_file_locator::LicenseFileLocator;
pub use output_presenter::OutputPresenter;
pub use process_runner::{ProcessOutput, ProcessRunner};
pub use profile_installer::ProfileInstaller;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
