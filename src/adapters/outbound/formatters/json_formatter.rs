use crate::license_scan::domain::{ResolvedPackage, ScanContext, ScanMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

const REPORT_FORMAT: &str = "conan-license-report";
const REPORT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    report_format: &'static str,
    version: u32,
    serial_number: &'a str,
    metadata: Metadata<'a>,
    packages: Vec<Package<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tools: Vec<Tool<'a>>,
    scan: Scan<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Scan<'a> {
    project_path: String,
    conan_command: &'a str,
    profiles: Vec<String>,
}

impl<'a> From<&'a ScanContext> for Scan<'a> {
    fn from(context: &'a ScanContext) -> Self {
        Self {
            project_path: context.project_path().display().to_string(),
            conan_command: context.conan_command(),
            profiles: context
                .profiles()
                .iter()
                .map(|profile| profile.display().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    declared_license: Option<&'a str>,
    license_text: &'a str,
    #[serde(skip_serializing_if = "no_requires")]
    requires: &'a [String],
}

fn no_requires(requires: &&[String]) -> bool {
    requires.is_empty()
}

impl<'a> From<&'a ResolvedPackage> for Package<'a> {
    fn from(package: &'a ResolvedPackage) -> Self {
        Self {
            name: package.name(),
            version: package.version(),
            url: package.url(),
            declared_license: package.declared_license(),
            license_text: package.license_text(),
            requires: package.requires(),
        }
    }
}

/// JsonFormatter adapter for the machine-readable license report
///
/// Emits one entry per package with the full license text, ready for the
/// downstream license classifier.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, packages: &[ResolvedPackage], metadata: &ScanMetadata) -> Result<String> {
        let report = Report {
            report_format: REPORT_FORMAT,
            version: REPORT_FORMAT_VERSION,
            serial_number: metadata.serial_number(),
            metadata: Metadata {
                timestamp: metadata.timestamp(),
                tools: vec![Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                }],
                scan: Scan::from(metadata.context()),
            },
            packages: packages.iter().map(Package::from).collect(),
        };

        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}
