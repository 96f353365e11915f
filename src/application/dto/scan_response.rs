use crate::license_scan::domain::{ResolvedPackage, ScanMetadata};

/// ScanResponse - Response DTO from the license scan use case
///
/// Carries the final package list, which formatters turn into the
/// requested output format.
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Third-party packages with license data, in report order
    pub packages: Vec<ResolvedPackage>,
    /// Report identifiers recognised as the project itself
    pub excluded_entries: Vec<String>,
    /// Report metadata (timestamp, tool info, serial number)
    pub metadata: ScanMetadata,
}

impl ScanResponse {
    pub fn new(
        packages: Vec<ResolvedPackage>,
        excluded_entries: Vec<String>,
        metadata: ScanMetadata,
    ) -> Self {
        Self {
            packages,
            excluded_entries,
            metadata,
        }
    }

    /// Number of packages with no license file on disk
    pub fn unknown_license_count(&self) -> usize {
        self.packages.iter().filter(|p| !p.has_license_text()).count()
    }
}
