use crate::ports::outbound::{ProcessOutput, ProcessRunner};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

/// SystemProcessRunner adapter for spawning real processes
///
/// Output streams are captured in full and decoded lossily, since Conan
/// may print non-UTF-8 compiler output during `conan install`.
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, working_dir: &Path, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .with_context(|| {
                format!(
                    "Failed to start '{} {}' in {}",
                    program,
                    args.join(" "),
                    working_dir.display()
                )
            })?;

        Ok(ProcessOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.success(),
        ))
    }
}
