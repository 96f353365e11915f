use std::path::{Path, PathBuf};

/// ScanContext describes which project was scanned and how Conan was driven
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanContext {
    project_path: PathBuf,
    conan_command: String,
    profiles: Vec<PathBuf>,
}

impl ScanContext {
    pub fn new(project_path: PathBuf, conan_command: String) -> Self {
        Self {
            project_path,
            conan_command,
            profiles: Vec::new(),
        }
    }

    /// Records the profiles the scan was repeated with, in run order
    pub fn with_profiles(mut self, profiles: Vec<PathBuf>) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn conan_command(&self) -> &str {
        &self.conan_command
    }

    /// Empty when the scan used whatever default profile was active
    pub fn profiles(&self) -> &[PathBuf] {
        &self.profiles
    }

    /// Number of install/info runs the report was merged from
    pub fn run_count(&self) -> usize {
        self.profiles.len().max(1)
    }
}

/// ScanMetadata value object stamped on every license report
///
/// Identifies the report (time, serial number, generating tool) and the
/// [`ScanContext`] it was produced from.
#[derive(Debug, Clone)]
pub struct ScanMetadata {
    generated_at: String,
    serial_number: String,
    tool_name: String,
    tool_version: String,
    context: ScanContext,
}

impl ScanMetadata {
    /// Creates metadata attributed to this crate; see [`ScanMetadata::with_tool`]
    pub fn new(generated_at: String, serial_number: String, context: ScanContext) -> Self {
        Self {
            generated_at,
            serial_number,
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            context,
        }
    }

    pub fn with_tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self.tool_version = version.into();
        self
    }

    /// RFC 3339 generation time
    pub fn timestamp(&self) -> &str {
        &self.generated_at
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn context(&self) -> &ScanContext {
        &self.context
    }
}
