//! conan-license-scan - License information extraction for Conan projects
//!
//! This library runs `conan install` and `conan info` against a Conan project,
//! parses the textual info report into dependency records and pairs each
//! third-party package with the license file Conan deployed for it. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_scan`): Report parsing, package resolution and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use conan_license_scan::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with the system adapters
//! let use_case = ScanLicensesUseCase::new(
//!     SystemProcessRunner::new(),
//!     GlobLicenseFileLocator::new(),
//!     ConanHomeProfileInstaller::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ScanRequest::new(PathBuf::from("."));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&response.packages, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The parser can also be used on its own:
//!
//! ```
//! use conan_license_scan::license_scan::services::InfoReportParser;
//!
//! let records = InfoReportParser::parse("zlib/1.2.11\n    URL: https://zlib.net\n");
//! assert_eq!(records[0].identifier(), "zlib/1.2.11");
//! assert_eq!(records[0].scalar("URL"), Some("https://zlib.net"));
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_scan;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        ConanHomeProfileInstaller, FileSystemWriter, GlobLicenseFileLocator, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::process::SystemProcessRunner;
    pub use crate::application::dto::{OutputFormat, ScanRequest, ScanResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::ScanLicensesUseCase;
    pub use crate::license_scan::domain::{
        AttributeValue, DependencyRecord, ResolvedPackage, ScanMetadata,
    };
    pub use crate::license_scan::services::{
        InfoReportParser, PackageResolver, PrefixSentinelPolicy, SentinelPolicy,
    };
    pub use crate::ports::outbound::{
        LicenseFileLocator, OutputPresenter, ProcessOutput, ProcessRunner, ProfileInstaller,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
