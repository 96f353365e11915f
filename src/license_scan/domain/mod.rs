pub mod dependency_record;
pub mod resolved_package;
pub mod scan_metadata;

pub use dependency_record::{AttributeValue, DependencyRecord};
pub use resolved_package::ResolvedPackage;
pub use scan_metadata::{ScanContext, ScanMetadata};
