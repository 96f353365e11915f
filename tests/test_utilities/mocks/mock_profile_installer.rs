use conan_license_scan::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ProfileInstaller that records which profiles were installed
#[derive(Default, Clone)]
pub struct MockProfileInstaller {
    pub installed: Arc<Mutex<Vec<PathBuf>>>,
    should_fail: bool,
}

#[allow(dead_code)]
impl MockProfileInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn get_installed(&self) -> Vec<PathBuf> {
        self.installed.lock().unwrap().clone()
    }
}

impl ProfileInstaller for MockProfileInstaller {
    fn install_profile(&self, profile_file: &Path) -> Result<PathBuf> {
        if self.should_fail {
            anyhow::bail!("Mock profile install failure: {}", profile_file.display());
        }
        self.installed
            .lock()
            .unwrap()
            .push(profile_file.to_path_buf());
        Ok(PathBuf::from("/mock/.conan/profiles/default"))
    }
}
