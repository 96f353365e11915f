use std::path::PathBuf;

/// Executable used when no override is configured
pub const DEFAULT_CONAN_COMMAND: &str = "conan";

/// ScanRequest - Request DTO for the license scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Path to the project directory containing conanfile.py or conanfile.txt
    pub project_path: PathBuf,
    /// Conan executable to invoke
    pub conan_command: String,
    /// Profiles to scan with, relative to the project directory
    ///
    /// Empty means the current default profile.
    pub profile_files: Vec<PathBuf>,
    /// Patterns for excluding packages from the report
    pub exclude_patterns: Vec<String>,
    /// Name prefixes treated as the project itself, in addition to the recipe file names
    pub sentinel_prefixes: Vec<String>,
}

impl ScanRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            conan_command: DEFAULT_CONAN_COMMAND.to_string(),
            profile_files: Vec::new(),
            exclude_patterns: Vec::new(),
            sentinel_prefixes: Vec::new(),
        }
    }

    pub fn with_conan_command(mut self, conan_command: impl Into<String>) -> Self {
        self.conan_command = conan_command.into();
        self
    }

    pub fn with_profile_files(mut self, profile_files: Vec<PathBuf>) -> Self {
        self.profile_files = profile_files;
        self
    }

    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    pub fn with_sentinel_prefixes(mut self, sentinel_prefixes: Vec<String>) -> Self {
        self.sentinel_prefixes = sentinel_prefixes;
        self
    }
}
