mod info_report_parser;
mod package_filter;
mod package_resolver;
mod scan_metadata_generator;
mod sentinel_policy;

pub use info_report_parser::InfoReportParser;
pub use package_filter::PackageFilter;
pub use package_resolver::{split_identifier, PackageResolver, ResolutionOutcome};
pub use scan_metadata_generator::ScanMetadataGenerator;
pub use sentinel_policy::{PrefixSentinelPolicy, SentinelPolicy, DEFAULT_SENTINEL_PREFIXES};
