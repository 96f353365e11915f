use crate::application::dto::{ScanRequest, ScanResponse};
use crate::license_scan::domain::{ResolvedPackage, ScanContext};
use crate::license_scan::services::{
    InfoReportParser, PackageFilter, PackageResolver, PrefixSentinelPolicy, ResolutionOutcome,
    ScanMetadataGenerator,
};
use crate::ports::outbound::{LicenseFileLocator, ProcessRunner, ProfileInstaller, ProgressReporter};
use crate::shared::error::ScanError;
use crate::shared::Result;
use std::collections::HashMap;
use std::path::Path;

const INSTALL_ARGS: [&str; 2] = ["install", "."];
const INFO_ARGS: [&str; 2] = ["info", "."];

/// ScanLicensesUseCase - Core use case for Conan license scanning
///
/// Runs Conan against the project once per configured profile, parses each
/// info report, resolves packages against the deployed license files and
/// merges the results into one package list.
///
/// # Type Parameters
/// * `PRUN` - ProcessRunner implementation
/// * `LOC` - LicenseFileLocator implementation
/// * `PROF` - ProfileInstaller implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanLicensesUseCase<PRUN, LOC, PROF, PR> {
    process_runner: PRUN,
    license_locator: LOC,
    profile_installer: PROF,
    progress_reporter: PR,
}

impl<PRUN, LOC, PROF, PR> ScanLicensesUseCase<PRUN, LOC, PROF, PR>
where
    PRUN: ProcessRunner,
    LOC: LicenseFileLocator,
    PROF: ProfileInstaller,
    PR: ProgressReporter,
{
    /// Creates a new ScanLicensesUseCase with injected dependencies
    pub fn new(
        process_runner: PRUN,
        license_locator: LOC,
        profile_installer: PROF,
        progress_reporter: PR,
    ) -> Self {
        Self {
            process_runner,
            license_locator,
            profile_installer,
            progress_reporter,
        }
    }

    /// Executes the license scan
    ///
    /// # Arguments
    /// * `request` - Scan request containing the project path and options
    ///
    /// # Returns
    /// ScanResponse with the de-duplicated, filtered packages and report metadata
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Validate patterns before spending time on Conan runs
        let filter = PackageFilter::new(request.exclude_patterns.clone())?;
        let sentinel_policy = PrefixSentinelPolicy::conan_default()
            .with_additional_prefixes(request.sentinel_prefixes.clone());

        // Step 1: Scan once per profile, or once with the active default profile
        let mut packages = Vec::new();
        let mut excluded_entries = Vec::new();

        if request.profile_files.is_empty() {
            let outcome = self.scan_once(&request, &sentinel_policy)?;
            Self::merge_outcome(&mut packages, &mut excluded_entries, outcome);
        } else {
            let total = request.profile_files.len();
            for (idx, profile) in request.profile_files.iter().enumerate() {
                let profile_path = request.project_path.join(profile);
                self.progress_reporter.report_progress(
                    idx + 1,
                    total,
                    Some(&profile.display().to_string()),
                );
                self.progress_reporter.report(&format!(
                    "🔧 Using Conan profile: {}",
                    profile_path.display()
                ));

                let installed = self.profile_installer.install_profile(&profile_path)?;
                self.progress_reporter.report(&format!(
                    "   - Installed as: {}",
                    installed.display()
                ));

                let outcome = self.scan_once(&request, &sentinel_policy)?;
                Self::merge_outcome(&mut packages, &mut excluded_entries, outcome);
            }
            self.progress_reporter
                .report_completion(&format!("✅ Scanned {} profile(s)", total));
        }

        // Step 2: Apply exclusion filters
        let packages = self.apply_filter(&filter, packages)?;

        let unknown = packages.iter().filter(|p| !p.has_license_text()).count();
        self.progress_reporter.report(&format!(
            "📋 {} third-party package(s), {} without a license file",
            packages.len(),
            unknown
        ));

        // Step 3: Generate report metadata
        let context = ScanContext::new(request.project_path, request.conan_command)
            .with_profiles(request.profile_files);
        let metadata = ScanMetadataGenerator::generate(context);

        Ok(ScanResponse::new(packages, excluded_entries, metadata))
    }

    /// Runs `install` and `info` once and resolves the resulting report
    fn scan_once(
        &self,
        request: &ScanRequest,
        sentinel_policy: &PrefixSentinelPolicy,
    ) -> Result<ResolutionOutcome> {
        self.run_install(&request.project_path, &request.conan_command);

        let report_text = self.run_info(&request.project_path, &request.conan_command)?;
        let records = InfoReportParser::parse(&report_text);
        self.progress_reporter.report(&format!(
            "✅ Parsed {} entr{} from the info report",
            records.len(),
            if records.len() == 1 { "y" } else { "ies" }
        ));

        self.progress_reporter
            .report("🔍 Looking up deployed license files...");
        let resolver =
            PackageResolver::new(&self.license_locator, sentinel_policy, &request.project_path);
        let outcome = resolver.resolve_all(&records);

        let with_license = outcome
            .packages
            .iter()
            .filter(|p| p.has_license_text())
            .count();
        self.progress_reporter.report(&format!(
            "✅ Resolved {} package(s): {} with license file, {} without",
            outcome.packages.len(),
            with_license,
            outcome.packages.len() - with_license
        ));

        Ok(outcome)
    }

    /// Installs dependencies so their license files get deployed
    ///
    /// Failures only degrade the report, so they are reported and swallowed.
    fn run_install(&self, project_path: &Path, conan_command: &str) {
        let command = format!("{} {}", conan_command, INSTALL_ARGS.join(" "));
        self.progress_reporter
            .report(&format!("📦 Running '{}'...", command));

        let failure = match self
            .process_runner
            .run(project_path, conan_command, &INSTALL_ARGS)
        {
            Ok(output) if output.success => None,
            Ok(output) => Some(Self::describe_output(&output.stderr, &output.stdout)),
            Err(e) => Some(format!("{:#}", e)),
        };

        if let Some(details) = failure {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: '{}' failed: {}",
                command, details
            ));
            self.progress_reporter.report_error(
                "⚠️  Most/all packages will be rated having an unknown license!",
            );
        }
    }

    /// Runs `info` and returns its standard output
    fn run_info(&self, project_path: &Path, conan_command: &str) -> Result<String> {
        let command = format!("{} {}", conan_command, INFO_ARGS.join(" "));
        self.progress_reporter
            .report(&format!("📖 Running '{}'...", command));

        let output = self
            .process_runner
            .run(project_path, conan_command, &INFO_ARGS)
            .map_err(|e| ScanError::InfoCommandFailed {
                command: command.clone(),
                details: format!("{:#}", e),
            })?;

        if !output.success {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: '{}' exited with an error, parsing its output anyway: {}",
                command,
                Self::describe_output(&output.stderr, &output.stdout)
            ));
        }

        Ok(output.stdout)
    }

    fn describe_output(stderr: &str, stdout: &str) -> String {
        let details = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        if details.is_empty() {
            "no output".to_string()
        } else {
            details.to_string()
        }
    }

    /// Appends packages not seen in earlier runs, keyed by (name, version)
    ///
    /// A package seen again keeps its first position, but picks up license
    /// data that only the later run found (e.g. after an install that failed
    /// for the first profile succeeded for another).
    fn merge_outcome(
        packages: &mut Vec<ResolvedPackage>,
        excluded_entries: &mut Vec<String>,
        outcome: ResolutionOutcome,
    ) {
        let owned_identity = |package: &ResolvedPackage| {
            let (name, version) = package.identity();
            (name.to_string(), version.map(str::to_string))
        };
        let mut positions: HashMap<(String, Option<String>), usize> = packages
            .iter()
            .enumerate()
            .map(|(idx, package)| (owned_identity(package), idx))
            .collect();

        for package in outcome.packages {
            match positions.get(&owned_identity(&package)) {
                Some(&idx) => packages[idx].fill_missing_from(package),
                None => {
                    positions.insert(owned_identity(&package), packages.len());
                    packages.push(package);
                }
            }
        }

        for entry in outcome.excluded {
            if !excluded_entries.contains(&entry) {
                excluded_entries.push(entry);
            }
        }
    }

    fn apply_filter(
        &self,
        filter: &PackageFilter,
        packages: Vec<ResolvedPackage>,
    ) -> Result<Vec<ResolvedPackage>> {
        if filter.is_empty() {
            return Ok(packages);
        }

        let original_count = packages.len();
        let filtered = filter.filter_packages(packages);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package(s) based on filters",
                excluded_count
            ));
        }

        if filtered.is_empty() && original_count > 0 {
            anyhow::bail!(
                "All {} package(s) were excluded by the provided filters. \
                     The report would be empty. Please adjust your exclusion patterns.",
                original_count
            );
        }

        for pattern in filter.get_unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests;
