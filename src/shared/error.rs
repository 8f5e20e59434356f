use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The report was written
    Success = 0,
    /// Any failure of the pipeline (malformed input, lookup failure, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid or missing command-line arguments / configuration values
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

/// Application-specific errors for dependency report generation.
///
/// Every variant is fatal for the run. None of them is retried.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Malformed input records (expected at least 4 fields: project, ecosystem, name, version):\n{}", format_malformed(.lines))]
    MalformedRecord { lines: Vec<MalformedLine> },

    #[error("Metadata lookup failed for {reference} ({ecosystem})\nDetails: {details}")]
    Lookup {
        ecosystem: String,
        reference: String,
        details: String,
    },

    #[error("Failed to parse SPDX license expression '{expression}' for {reference}\nDetails: {details}\n\n💡 Hint: Run without --strict-licenses to fall back to the license or project link")]
    LicenseParse {
        reference: String,
        expression: String,
        details: String,
    },

    #[error("No metadata registry available for ecosystem '{ecosystem}'\n\n💡 Hint: Supported ecosystems: {supported}")]
    UnsupportedEcosystem { ecosystem: String, supported: String },

    #[error("Invalid exclusion pattern '{pattern}'\nDetails: {details}")]
    InvalidExcludePattern { pattern: String, details: String },

    #[error("Input file not found: {path}\n\n💡 Hint: Please verify the path given with --input")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}")]
    Security { path: PathBuf, reason: String },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable.")]
    ConfigRead { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax.")]
    ConfigParse { path: PathBuf, details: String },

    /// Invalid or missing configuration value
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// A single input record that did not carry enough fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: usize,
    pub field_count: usize,
}

fn format_malformed(lines: &[MalformedLine]) -> String {
    lines
        .iter()
        .map(|l| format!("  line {}: {} field(s)", l.line, l.field_count))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ReportError {
    /// Stable diagnostic class name printed on the single-line error summary.
    pub fn class(&self) -> &'static str {
        match self {
            ReportError::MalformedRecord { .. } => "MalformedRecordError",
            ReportError::Lookup { .. } => "LookupError",
            ReportError::LicenseParse { .. } => "LicenseParseError",
            ReportError::UnsupportedEcosystem { .. } => "UnsupportedEcosystemError",
            ReportError::InvalidExcludePattern { .. } => "InvalidExcludePatternError",
            ReportError::InputNotFound { .. } => "InputNotFoundError",
            ReportError::FileRead { .. } => "FileReadError",
            ReportError::FileWrite { .. } => "FileWriteError",
            ReportError::Security { .. } => "SecurityError",
            ReportError::ConfigRead { .. } => "ConfigReadError",
            ReportError::ConfigParse { .. } => "ConfigParseError",
            ReportError::Validation { .. } => "ValidationError",
        }
    }

    /// Exit code this error maps to at the top level.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReportError::Validation { .. }
            | ReportError::InvalidExcludePattern { .. }
            | ReportError::ConfigRead { .. }
            | ReportError::ConfigParse { .. } => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}
