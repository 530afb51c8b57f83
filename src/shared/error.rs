use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish usage mistakes from
/// failures that happened while reading input or writing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the audit ran to completion (individual lookups may have failed)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors, malformed cutoff)
    InvalidArguments = 2,
    /// Application error (missing lockfile, parse error, file I/O error, etc.)
    ApplicationError = 3,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the release date audit.
///
/// Every variant here is fatal: it stops the run before any registry
/// request is made or any result is written.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Lockfile not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse lockfile: {path}\nDetails: {details}\n\n💡 Hint: The lockfile must be a JSON document with a nested \"dependencies\" tree")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Invalid lockfile path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular JSON file")]
    InvalidLockfilePath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid cutoff timestamp: {value}\nDetails: {details}\n\n💡 Hint: Use the format YYYY-MM-DDTHH:MM:SSZ (e.g. 2023-01-01T00:00:00Z)")]
    InvalidCutoff { value: String, details: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}

/// Reasons a single registry lookup did not yield a timestamp.
///
/// These never abort a run; the resolution pipeline records the failure
/// and moves on to the next package.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found in registry: {0}")]
    PackageNotFound(String),

    #[error("Registry returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid registry response: {0}")]
    InvalidResponse(String),

    #[error("Version {version} of {package} has no publication time")]
    VersionNotPublished { package: String, version: String },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },
}
