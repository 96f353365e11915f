use crate::license_scan::domain::{ScanContext, ScanMetadata};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// ScanMetadataGenerator service for stamping license reports
///
/// Each report gets its generation time and a fresh `urn:uuid:` serial
/// number, so repeated scans of the same project stay distinguishable.
pub struct ScanMetadataGenerator;

impl ScanMetadataGenerator {
    /// Stamps `context` with the current UTC time
    pub fn generate(context: ScanContext) -> ScanMetadata {
        Self::generate_at(context, Utc::now())
    }

    /// Stamps `context` with a fixed generation time
    pub fn generate_at(context: ScanContext, generated_at: DateTime<Utc>) -> ScanMetadata {
        ScanMetadata::new(
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            format!("urn:uuid:{}", Uuid::new_v4()),
            context,
        )
    }
}
