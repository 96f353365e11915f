use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a failed scan
/// and a mistyped command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the license report was produced
    Success = 0,
    /// Application error (missing recipe, conan not runnable, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for license scanning.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Conan recipe not found in: {path}\n\n💡 Hint: {suggestion}")]
    RecipeNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to run '{command}'\nDetails: {details}\n\n💡 Hint: Please verify that Conan is installed and available on PATH, or pass --conan")]
    InfoCommandFailed { command: String, details: String },

    #[error("Conan profile file not found: {path}\n\n💡 Hint: Profile paths are resolved relative to the project directory")]
    ProfileNotFound { path: PathBuf },

    #[error("Failed to install Conan profile: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the Conan home directory is writable")]
    ProfileInstallError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for patterns and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
