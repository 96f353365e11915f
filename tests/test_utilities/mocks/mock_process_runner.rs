use conan_license_scan::prelude::*;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ProcessRunner that replays canned Conan output
///
/// `install` always returns the same result; each `info` call consumes the
/// next queued report.
#[derive(Default, Clone)]
pub struct MockProcessRunner {
    install_output: Option<ProcessOutput>,
    info_outputs: Arc<Mutex<VecDeque<ProcessOutput>>>,
    pub invocations: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

#[allow(dead_code)]
impl MockProcessRunner {
    pub fn new() -> Self {
        Self {
            install_output: Some(ProcessOutput::new(String::new(), String::new(), true)),
            ..Default::default()
        }
    }

    pub fn with_info_report(self, report: &str) -> Self {
        self.info_outputs
            .lock()
            .unwrap()
            .push_back(ProcessOutput::new(report.to_string(), String::new(), true));
        self
    }

    pub fn with_failing_install(mut self, stderr: &str) -> Self {
        self.install_output = Some(ProcessOutput::new(String::new(), stderr.to_string(), false));
        self
    }

    pub fn get_invocations(&self) -> Vec<(PathBuf, String)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run(&self, working_dir: &Path, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        self.invocations
            .lock()
            .unwrap()
            .push((working_dir.to_path_buf(), format!("{} {}", program, args.join(" "))));

        match args.first().copied() {
            Some("install") => self
                .install_output
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Mock: '{}' not found", program)),
            Some("info") => self
                .info_outputs
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("Mock: no info report queued")),
            _ => anyhow::bail!("Mock: unexpected command {:?}", args),
        }
    }
}
