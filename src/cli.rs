use clap::Parser;
use std::path::PathBuf;

use conan_license_scan::application::dto::OutputFormat;

/// Extract third-party license information from Conan projects
#[derive(Parser, Debug)]
#[command(name = "conan-license-scan")]
#[command(version)]
#[command(
    about = "Extract third-party license information from Conan projects",
    long_about = "Runs 'conan install' and 'conan info' in a Conan project, parses the \
                  info report and pairs every dependency with the license file Conan \
                  deployed under licenses/<name>/."
)]
pub struct Args {
    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exclude packages matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "gtest" -e "catch2*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Conan profile to scan with, relative to the project directory
    /// Can be specified multiple times; results are merged
    #[arg(long = "profile", value_name = "FILE")]
    pub profiles: Vec<PathBuf>,

    /// Conan executable to run [default: conan]
    #[arg(long, value_name = "PROGRAM")]
    pub conan: Option<String>,

    /// Path to a config file (defaults to conan-license-scan.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
