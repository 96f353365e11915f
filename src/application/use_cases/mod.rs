/// Use cases - Application-specific business rules
mod scan_licenses;

pub use scan_licenses::ScanLicensesUseCase;
