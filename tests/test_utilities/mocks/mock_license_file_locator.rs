use conan_license_scan::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock LicenseFileLocator serving license texts from memory
#[derive(Default)]
pub struct MockLicenseFileLocator {
    licenses: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockLicenseFileLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, package_name: &str, text: &str) -> Self {
        self.licenses
            .insert(package_name.to_string(), text.to_string());
        self
    }
}

impl LicenseFileLocator for MockLicenseFileLocator {
    fn locate(&self, package_name: &str, project_root: &Path) -> Option<PathBuf> {
        if self.licenses.contains_key(package_name) {
            Some(
                project_root
                    .join("licenses")
                    .join(package_name)
                    .join("LICENSE"),
            )
        } else {
            None
        }
    }

    fn read_license_text(&self, path: &Path) -> Result<String> {
        let package_name = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        self.licenses
            .get(package_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock: no license for {}", package_name))
    }
}
