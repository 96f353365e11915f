use super::*;
use crate::ports::outbound::ProcessOutput;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;

// Mock implementations for testing

/// Answers `install` with a fixed result and `info` from a queue, one report per run
#[derive(Clone, Default)]
struct ScriptedProcessRunner {
    install: Option<ProcessOutput>,
    info_outputs: Rc<RefCell<VecDeque<ProcessOutput>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedProcessRunner {
    fn new(install_succeeds: bool, info_reports: &[&str]) -> Self {
        Self {
            install: Some(ProcessOutput::new(
                String::new(),
                if install_succeeds { String::new() } else { "ERROR: missing binary".to_string() },
                install_succeeds,
            )),
            info_outputs: Rc::new(RefCell::new(
                info_reports
                    .iter()
                    .map(|report| ProcessOutput::new(report.to_string(), String::new(), true))
                    .collect(),
            )),
            calls: Rc::default(),
        }
    }

    fn with_failing_info(self, stdout: &str) -> Self {
        self.info_outputs.borrow_mut().clear();
        self.info_outputs.borrow_mut().push_back(ProcessOutput::new(
            stdout.to_string(),
            "ERROR: conanfile has errors".to_string(),
            false,
        ));
        self
    }
}

impl ProcessRunner for ScriptedProcessRunner {
    fn run(&self, _working_dir: &Path, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));

        match args.first().copied() {
            Some("install") => self
                .install
                .clone()
                .ok_or_else(|| anyhow::anyhow!("No such file or directory (os error 2)")),
            Some("info") => self
                .info_outputs
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("No such file or directory (os error 2)")),
            _ => anyhow::bail!("unexpected command"),
        }
    }
}

/// Fails to start any process, like a missing `conan` executable
struct MissingExecutableRunner;

impl ProcessRunner for MissingExecutableRunner {
    fn run(&self, _working_dir: &Path, program: &str, _args: &[&str]) -> Result<ProcessOutput> {
        anyhow::bail!("Failed to start '{}': No such file or directory", program)
    }
}

#[derive(Default)]
struct MockLicenseFileLocator {
    texts: HashMap<String, String>,
}

impl MockLicenseFileLocator {
    fn with_license(mut self, name: &str, text: &str) -> Self {
        self.texts.insert(name.to_string(), text.to_string());
        self
    }
}

impl LicenseFileLocator for MockLicenseFileLocator {
    fn locate(&self, package_name: &str, project_root: &Path) -> Option<PathBuf> {
        self.texts
            .contains_key(package_name)
            .then(|| project_root.join("licenses").join(package_name).join("LICENSE"))
    }

    fn read_license_text(&self, path: &Path) -> Result<String> {
        let name = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        self.texts
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("not found"))
    }
}

#[derive(Clone, Default)]
struct MockProfileInstaller {
    installed: Rc<RefCell<Vec<PathBuf>>>,
    missing: Option<PathBuf>,
}

impl ProfileInstaller for MockProfileInstaller {
    fn install_profile(&self, profile_file: &Path) -> Result<PathBuf> {
        if self.missing.as_deref() == Some(profile_file) {
            return Err(ScanError::ProfileNotFound {
                path: profile_file.to_path_buf(),
            }
            .into());
        }
        self.installed.borrow_mut().push(profile_file.to_path_buf());
        Ok(PathBuf::from("/home/user/.conan/profiles/default"))
    }
}

#[derive(Clone, Default)]
struct MockProgressReporter {
    errors: Rc<RefCell<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, _message: &str) {}
}

const GCC_REPORT: &str = "\
conanfile.py (myproject/0.1)
    ID: 8a2f
    Requires:
        zlib/1.2.11
        openssl/1.1.1k
zlib/1.2.11
    URL: https://zlib.net
    License: Zlib
openssl/1.1.1k
    URL: https://github.com/openssl/openssl
    License: OpenSSL
    Requires:
        zlib/1.2.11
";

const CLANG_REPORT: &str = "\
conanfile.txt
    Requires:
        zlib/1.2.11
        fmt/8.0.1
zlib/1.2.11
    URL: https://zlib.net
fmt/8.0.1
    URL: https://github.com/fmtlib/fmt
";

fn request() -> ScanRequest {
    ScanRequest::new(PathBuf::from("/test/project"))
}

fn names(response: &ScanResponse) -> Vec<&str> {
    response.packages.iter().map(|p| p.name()).collect()
}

#[test]
fn test_execute_single_run() {
    let runner = ScriptedProcessRunner::new(true, &[GCC_REPORT]);
    let calls = runner.calls.clone();
    let use_case = ScanLicensesUseCase::new(
        runner,
        MockLicenseFileLocator::default().with_license("zlib", "zlib license"),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(
        *calls.borrow(),
        vec!["conan install .".to_string(), "conan info .".to_string()]
    );
    assert_eq!(names(&response), vec!["zlib", "openssl"]);
    assert_eq!(response.excluded_entries, vec!["conanfile.py (myproject/0.1)".to_string()]);
    assert_eq!(response.packages[0].license_text(), "zlib license");
    assert_eq!(response.packages[0].declared_license(), Some("Zlib"));
    assert_eq!(response.packages[1].license_text(), "");
    assert_eq!(response.packages[1].requires(), ["zlib".to_string()]);
    assert_eq!(response.unknown_license_count(), 1);
}

#[test]
fn test_execute_uses_configured_conan_command() {
    let runner = ScriptedProcessRunner::new(true, &[GCC_REPORT]);
    let calls = runner.calls.clone();
    let use_case = ScanLicensesUseCase::new(
        runner,
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    use_case
        .execute(request().with_conan_command("/opt/conan/bin/conan"))
        .unwrap();

    assert!(calls.borrow().iter().all(|c| c.starts_with("/opt/conan/bin/conan ")));
}

#[test]
fn test_install_failure_is_not_fatal() {
    let reporter = MockProgressReporter::default();
    let errors = reporter.errors.clone();
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(false, &[GCC_REPORT]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        reporter,
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.packages.len(), 2);
    let errors = errors.borrow();
    assert!(errors.iter().any(|e| e.contains("'conan install .' failed")));
    assert!(errors.iter().any(|e| e.contains("ERROR: missing binary")));
    assert!(errors
        .iter()
        .any(|e| e.contains("Most/all packages will be rated having an unknown license!")));
}

#[test]
fn test_install_spawn_error_is_not_fatal() {
    let mut runner = ScriptedProcessRunner::new(true, &[GCC_REPORT]);
    runner.install = None;
    let reporter = MockProgressReporter::default();
    let errors = reporter.errors.clone();
    let use_case = ScanLicensesUseCase::new(
        runner,
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        reporter,
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.packages.len(), 2);
    assert!(errors.borrow().iter().any(|e| e.contains("unknown license")));
}

#[test]
fn test_info_spawn_error_is_fatal() {
    let use_case = ScanLicensesUseCase::new(
        MissingExecutableRunner,
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let error = use_case.execute(request()).unwrap_err();

    let scan_error = error.downcast_ref::<ScanError>().unwrap();
    assert!(matches!(scan_error, ScanError::InfoCommandFailed { .. }));
    assert!(format!("{}", error).contains("conan info ."));
}

#[test]
fn test_info_non_zero_exit_still_parses_output() {
    let reporter = MockProgressReporter::default();
    let errors = reporter.errors.clone();
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &[])
            .with_failing_info("zlib/1.2.11\n    URL: https://zlib.net\n"),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        reporter,
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(names(&response), vec!["zlib"]);
    assert!(errors
        .borrow()
        .iter()
        .any(|e| e.contains("ERROR: conanfile has errors")));
}

#[test]
fn test_empty_info_report_yields_empty_response() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &[""]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request()).unwrap();

    assert!(response.packages.is_empty());
    assert!(response.excluded_entries.is_empty());
}

#[test]
fn test_profiles_are_installed_and_results_merged() {
    let installer = MockProfileInstaller::default();
    let installed = installer.installed.clone();
    let runner = ScriptedProcessRunner::new(true, &[GCC_REPORT, CLANG_REPORT]);
    let calls = runner.calls.clone();
    let use_case = ScanLicensesUseCase::new(
        runner,
        MockLicenseFileLocator::default(),
        installer,
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request().with_profile_files(vec![
            PathBuf::from("profiles/gcc"),
            PathBuf::from("/abs/clang"),
        ]))
        .unwrap();

    assert_eq!(
        *installed.borrow(),
        vec![
            PathBuf::from("/test/project/profiles/gcc"),
            PathBuf::from("/abs/clang"),
        ]
    );
    assert_eq!(calls.borrow().len(), 4);
    // zlib/1.2.11 appears in both reports but is listed once
    assert_eq!(names(&response), vec!["zlib", "openssl", "fmt"]);
    assert_eq!(response.excluded_entries.len(), 2);
}

#[test]
fn test_same_name_different_version_is_kept() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &["zlib/1.2.11\n", "zlib/1.2.13\n"]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request().with_profile_files(vec![PathBuf::from("a"), PathBuf::from("b")]))
        .unwrap();

    let versions: Vec<Option<&str>> = response.packages.iter().map(|p| p.version()).collect();
    assert_eq!(versions, vec![Some("1.2.11"), Some("1.2.13")]);
}

#[test]
fn test_missing_profile_is_fatal() {
    let installer = MockProfileInstaller {
        missing: Some(PathBuf::from("/test/project/profiles/missing")),
        ..Default::default()
    };
    let runner = ScriptedProcessRunner::new(true, &[GCC_REPORT]);
    let calls = runner.calls.clone();
    let use_case = ScanLicensesUseCase::new(
        runner,
        MockLicenseFileLocator::default(),
        installer,
        MockProgressReporter::default(),
    );

    let error = use_case
        .execute(request().with_profile_files(vec![PathBuf::from("profiles/missing")]))
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ScanError>(),
        Some(ScanError::ProfileNotFound { .. })
    ));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_exclude_patterns_filter_packages() {
    let reporter = MockProgressReporter::default();
    let errors = reporter.errors.clone();
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &[GCC_REPORT]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        reporter,
    );

    let response = use_case
        .execute(request().with_exclude_patterns(vec!["open*".to_string(), "gtest".to_string()]))
        .unwrap();

    assert_eq!(names(&response), vec!["zlib"]);
    assert!(errors
        .borrow()
        .iter()
        .any(|e| e.contains("Exclude pattern 'gtest' did not match")));
}

#[test]
fn test_excluding_everything_is_an_error() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &[GCC_REPORT]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let error = use_case
        .execute(request().with_exclude_patterns(vec!["*l*".to_string()]))
        .unwrap_err();

    assert!(error.to_string().contains("All 2 package(s) were excluded"));
}

#[test]
fn test_invalid_pattern_fails_before_running_conan() {
    let runner = ScriptedProcessRunner::new(true, &[GCC_REPORT]);
    let calls = runner.calls.clone();
    let use_case = ScanLicensesUseCase::new(
        runner,
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let result = use_case.execute(request().with_exclude_patterns(vec!["***".to_string()]));

    assert!(result.is_err());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_additional_sentinel_prefixes() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &["virtual\nzlib/1.2.11\n"]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request().with_sentinel_prefixes(vec!["virtual".to_string()]))
        .unwrap();

    assert_eq!(names(&response), vec!["zlib"]);
    assert_eq!(response.excluded_entries, vec!["virtual".to_string()]);
}

#[test]
fn test_response_metadata_is_populated() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &[GCC_REPORT]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.metadata.tool_name(), "conan-license-scan");
    assert!(response.metadata.serial_number().starts_with("urn:uuid:"));
}

#[test]
fn test_response_metadata_records_scan_context() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &[GCC_REPORT, CLANG_REPORT]),
        MockLicenseFileLocator::default(),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(
            request()
                .with_conan_command("conan1")
                .with_profile_files(vec![
                    PathBuf::from("profiles/gcc"),
                    PathBuf::from("profiles/clang"),
                ]),
        )
        .unwrap();

    let context = response.metadata.context();
    assert_eq!(context.project_path(), Path::new("/test/project"));
    assert_eq!(context.conan_command(), "conan1");
    assert_eq!(
        context.profiles(),
        [PathBuf::from("profiles/gcc"), PathBuf::from("profiles/clang")]
    );
    assert_eq!(context.run_count(), 2);
}

/// Finds a license file only from the given lookup onwards, like a deploy
/// that only happened on a later profile run
struct LateDeployLocator {
    lookups: std::cell::Cell<usize>,
    found_from: usize,
}

impl LicenseFileLocator for LateDeployLocator {
    fn locate(&self, package_name: &str, project_root: &Path) -> Option<PathBuf> {
        let lookup = self.lookups.get() + 1;
        self.lookups.set(lookup);
        (lookup >= self.found_from)
            .then(|| project_root.join("licenses").join(package_name).join("LICENSE"))
    }

    fn read_license_text(&self, _path: &Path) -> Result<String> {
        Ok("zlib license".to_string())
    }
}

#[test]
fn test_license_found_by_later_profile_run_is_kept() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(
            true,
            &["zlib/1.2.11\n", "zlib/1.2.11\n    URL: https://zlib.net\n"],
        ),
        LateDeployLocator {
            lookups: std::cell::Cell::new(0),
            found_from: 2,
        },
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request().with_profile_files(vec![PathBuf::from("a"), PathBuf::from("b")]))
        .unwrap();

    assert_eq!(response.packages.len(), 1);
    assert_eq!(response.packages[0].license_text(), "zlib license");
    assert_eq!(response.packages[0].url(), "https://zlib.net");
    assert_eq!(response.unknown_license_count(), 0);
}

#[test]
fn test_license_found_by_first_profile_run_is_not_replaced() {
    let use_case = ScanLicensesUseCase::new(
        ScriptedProcessRunner::new(true, &["zlib/1.2.11\n", "zlib/1.2.11\n"]),
        MockLicenseFileLocator::default().with_license("zlib", "first text"),
        MockProfileInstaller::default(),
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request().with_profile_files(vec![PathBuf::from("a"), PathBuf::from("b")]))
        .unwrap();

    assert_eq!(response.packages.len(), 1);
    assert_eq!(response.packages[0].license_text(), "first text");
}
