use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a finished run from a
/// cancelled one and from a run that never produced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every identifier was processed and the output was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, no valid IDs, output write failure, etc.)
    ApplicationError = 3,
    /// The run was cancelled; a partial output file was written
    Cancelled = 130,
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
            ExitCode::Cancelled => write!(f, "Cancelled (130)"),
        }
    }
}

/// Application-specific errors for CVE enrichment.
///
/// Only setup and output failures are represented here: per-identifier
/// lookup failures never abort a run and are folded into the output rows.
#[derive(Debug, Error)]
pub enum FetcherError {
    #[error("Input file not found: {path}\n\n💡 Hint: Please specify an existing CSV file containing CVE IDs in its first column")]
    InputNotFound { path: PathBuf },

    #[error("CSV file must contain at least one header: {path}\n\n💡 Hint: The first row is treated as the header row (e.g. \"ID\")")]
    MissingHeader { path: PathBuf },

    #[error("No valid CVE IDs found in CSV: {path}\n\n💡 Hint: IDs must look like CVE-YYYY-NNNN (at least 4 sequence digits) and sit in the first column")]
    NoValidIdentifiers { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
