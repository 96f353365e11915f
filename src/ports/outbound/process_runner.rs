use crate::shared::Result;
use std::path::Path;

/// Captured result of running an external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl ProcessOutput {
    pub fn new(stdout: String, stderr: String, success: bool) -> Self {
        Self {
            stdout,
            stderr,
            success,
        }
    }
}

/// ProcessRunner port for invoking the package manager
///
/// This port abstracts process spawning so the scan workflow can be
/// exercised without a Conan installation.
pub trait ProcessRunner {
    /// Runs `program` with `args` inside `working_dir` and waits for it to exit
    ///
    /// # Returns
    /// The captured stdout, stderr and whether the exit status was success.
    /// A non-zero exit is reported through `ProcessOutput::success`, not as an error.
    ///
    /// # Errors
    /// Returns an error only if the process could not be started at all
    /// (executable missing, working directory inaccessible, ...).
    fn run(&self, working_dir: &Path, program: &str, args: &[&str]) -> Result<ProcessOutput>;
}
