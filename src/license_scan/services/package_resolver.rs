use super::sentinel_policy::SentinelPolicy;
use crate::license_scan::domain::{DependencyRecord, ResolvedPackage};
use crate::ports::outbound::LicenseFileLocator;
use std::path::Path;

const URL_ATTRIBUTE: &str = "URL";
const LICENSE_ATTRIBUTE: &str = "License";
const REQUIRES_ATTRIBUTE: &str = "Requires";

/// Splits a Conan reference on its first `/` into name and version
///
/// `zlib/1.2.11@user/stable` yields `("zlib", Some("1.2.11@user/stable"))`;
/// a bare name or an empty version yields no version.
pub fn split_identifier(identifier: &str) -> (&str, Option<&str>) {
    match identifier.split_once('/') {
        Some((name, version)) if !version.is_empty() => (name, Some(version)),
        Some((name, _)) => (name, None),
        None => (identifier, None),
    }
}

/// Result of resolving every record of one info report
#[derive(Debug, Clone, Default)]
pub struct ResolutionOutcome {
    /// Third-party packages, in report order
    pub packages: Vec<ResolvedPackage>,
    /// Identifiers dropped by the sentinel policy
    pub excluded: Vec<String>,
}

/// PackageResolver turns parsed report records into resolved packages
///
/// Each record is split into name and version, dropped if the sentinel
/// policy recognises it as the project itself, and enriched with the URL
/// attribute and the contents of its on-disk license file. A missing or
/// unreadable license file leaves the license text empty.
pub struct PackageResolver<'a, L, S> {
    locator: &'a L,
    sentinel_policy: &'a S,
    project_root: &'a Path,
}

impl<'a, L, S> PackageResolver<'a, L, S>
where
    L: LicenseFileLocator,
    S: SentinelPolicy,
{
    pub fn new(locator: &'a L, sentinel_policy: &'a S, project_root: &'a Path) -> Self {
        Self {
            locator,
            sentinel_policy,
            project_root,
        }
    }

    /// Resolves a single record, or returns `None` when it is a sentinel entry
    pub fn resolve(&self, record: &DependencyRecord) -> Option<ResolvedPackage> {
        let (name, version) = split_identifier(record.identifier());

        if self.sentinel_policy.is_sentinel(name) {
            return None;
        }

        let url = record.scalar(URL_ATTRIBUTE).unwrap_or_default().to_string();
        let license_text = self.license_text_for(name);
        let declared_license = record.scalar(LICENSE_ATTRIBUTE).map(str::to_string);
        let requires = record
            .list(REQUIRES_ATTRIBUTE)
            .unwrap_or_default()
            .iter()
            .map(|edge| split_identifier(edge).0.to_string())
            .collect();

        Some(
            ResolvedPackage::new(
                name.to_string(),
                version.map(str::to_string),
                url,
                license_text,
            )
            .with_declared_license(declared_license)
            .with_requires(requires),
        )
    }

    /// Resolves all records, keeping report order and recording what was excluded
    pub fn resolve_all(&self, records: &[DependencyRecord]) -> ResolutionOutcome {
        let mut outcome = ResolutionOutcome::default();

        for record in records {
            match self.resolve(record) {
                Some(package) => outcome.packages.push(package),
                None => outcome.excluded.push(record.identifier().to_string()),
            }
        }

        outcome
    }

    fn license_text_for(&self, name: &str) -> String {
        self.locator
            .locate(name, self.project_root)
            .and_then(|path| self.locator.read_license_text(&path).ok())
            .unwrap_or_default()
    }
}
