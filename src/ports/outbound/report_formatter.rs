use crate::license_scan::domain::{ResolvedPackage, ScanMetadata};
use crate::shared::Result;

/// ReportFormatter port for rendering the license report
///
/// This port abstracts the formatting logic for different report formats
/// (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Formats the resolved packages into the target representation
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, packages: &[ResolvedPackage], metadata: &ScanMetadata) -> Result<String>;
}
