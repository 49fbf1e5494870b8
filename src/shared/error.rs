use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures. Per-part resolution failures never change the
/// exit code; they are surfaced in the report itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written (including reports with unresolved parts)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, configuration, unexpected failures)
    ApplicationError = 3,
    /// The distributor rejected the credentials or could not be reached
    AuthenticationFailed = 4,
    /// The BOM file is missing a required column
    MalformedBom = 5,
    /// The report could not be rendered or written
    RenderFailed = 6,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a fatal error by walking its cause chain.
    pub fn for_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if cause.downcast_ref::<AuthError>().is_some() {
                return ExitCode::AuthenticationFailed;
            }
            if let Some(report_error) = cause.downcast_ref::<ReportError>() {
                return report_error.exit_code();
            }
        }
        ExitCode::ApplicationError
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::AuthenticationFailed => write!(f, "Authentication Failed (4)"),
            ExitCode::MalformedBom => write!(f, "Malformed BOM (5)"),
            ExitCode::RenderFailed => write!(f, "Render Failed (6)"),
        }
    }
}

/// Application-specific errors for BOM report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("BOM file not found: {path}\n\n💡 Hint: Check the bom_file argument; paths are resolved relative to the working directory")]
    BomNotFound { path: PathBuf },

    #[error("Malformed BOM file: {path}\nDetails: {details}\n\n💡 Hint: Map the BOM's column names with --part-number-column / --quantity-column or the `columns` config section")]
    MalformedBom { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render report: {details}\n\n💡 Hint: {hint}")]
    Render { details: String, hint: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl ReportError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReportError::MalformedBom { .. } => ExitCode::MalformedBom,
            ReportError::Render { .. } | ReportError::FileWriteError { .. } => {
                ExitCode::RenderFailed
            }
            ReportError::BomNotFound { .. }
            | ReportError::FileReadError { .. }
            | ReportError::Validation { .. }
            | ReportError::SecurityError { .. } => ExitCode::ApplicationError,
        }
    }
}

/// Failure of the credential exchange. Always fatal for the run.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("DigiKey rejected the API credentials (HTTP {status})\nDetails: {details}\n\n💡 Hint: Check the DIGIKEY_CLIENT_ID and DIGIKEY_CLIENT_SECRET secrets")]
    Rejected { status: u16, details: String },

    #[error("DigiKey authentication service unavailable\nDetails: {details}\n\n💡 Hint: This is a network or service problem, not a credentials problem; retry the pipeline later")]
    Unavailable { details: String },

    #[error("Unexpected response from the DigiKey token endpoint\nDetails: {details}")]
    InvalidResponse { details: String },
}
