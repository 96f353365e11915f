mod cli;

use cli::Args;
use conan_license_scan::adapters::outbound::console::StderrProgressReporter;
use conan_license_scan::adapters::outbound::filesystem::{
    ConanHomeProfileInstaller, FileSystemWriter, GlobLicenseFileLocator, StdoutPresenter,
};
use conan_license_scan::adapters::outbound::process::SystemProcessRunner;
use conan_license_scan::application::dto::{OutputFormat, ScanRequest, DEFAULT_CONAN_COMMAND};
use conan_license_scan::application::factories::FormatterFactory;
use conan_license_scan::application::use_cases::ScanLicensesUseCase;
use conan_license_scan::config::{self, ConfigFile};
use conan_license_scan::ports::outbound::OutputPresenter;
use conan_license_scan::shared::error::{ExitCode, ScanError};
use conan_license_scan::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Recipe files that mark a directory as a Conan project
const RECIPE_FILES: [&str; 2] = ["conanfile.py", "conanfile.txt"];

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;
    validate_recipe_present(&project_path)?;

    // Load config: explicit path, or auto-discovered in the project directory
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };
    let settings = merge_settings(&args, config)?;

    // Create adapters (Dependency Injection)
    let process_runner = SystemProcessRunner::new();
    let license_locator = GlobLicenseFileLocator::new();
    let profile_installer = ConanHomeProfileInstaller::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ScanLicensesUseCase::new(
        process_runner,
        license_locator,
        profile_installer,
        progress_reporter,
    );

    // Create request
    let request = ScanRequest::new(project_path)
        .with_conan_command(settings.conan_command)
        .with_profile_files(settings.profile_files)
        .with_exclude_patterns(settings.exclude_patterns)
        .with_sentinel_prefixes(settings.sentinel_prefixes);

    // Execute use case
    let response = use_case.execute(request)?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.packages, &response.metadata)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Effective settings after combining the config file with CLI arguments
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    conan_command: String,
    profile_files: Vec<PathBuf>,
    exclude_patterns: Vec<String>,
    sentinel_prefixes: Vec<String>,
}

/// CLI scalars override config values; list options from both sources are combined
fn merge_settings(args: &Args, config: ConfigFile) -> Result<Settings> {
    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => value
            .parse::<OutputFormat>()
            .map_err(|message| ScanError::Validation {
                message: format!("Invalid config: {}", message),
            })?,
        (None, None) => OutputFormat::default(),
    };

    let conan_command = args
        .conan
        .clone()
        .or(config.conan_command)
        .unwrap_or_else(|| DEFAULT_CONAN_COMMAND.to_string());

    Ok(Settings {
        format,
        conan_command,
        profile_files: merge_lists(config.conan_profile_files, &args.profiles),
        exclude_patterns: merge_lists(config.exclude_packages, &args.exclude),
        sentinel_prefixes: config.sentinel_prefixes.unwrap_or_default(),
    })
}

fn merge_lists<T: Clone + PartialEq>(from_config: Option<Vec<T>>, from_cli: &[T]) -> Vec<T> {
    let mut merged = from_config.unwrap_or_default();
    for item in from_cli {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ScanError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ScanError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_recipe_present(path: &Path) -> Result<()> {
    if RECIPE_FILES.iter().any(|recipe| path.join(recipe).is_file()) {
        return Ok(());
    }

    Err(ScanError::RecipeNotFound {
        path: path.to_path_buf(),
        suggestion: format!(
            "Run this command in a directory containing {} or {}, or pass --path",
            RECIPE_FILES[0], RECIPE_FILES[1]
        ),
    }
    .into())
}
