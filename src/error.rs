//! Error types and handling for Groundwork
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every error here is fatal for the run it occurs in; nothing is retried
//! automatically. Filesystem failures are treated as caller-actionable.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Groundwork operations
#[derive(Error, Diagnostic, Debug)]
pub enum GroundworkError {
    // Configuration errors
    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(groundwork::platform::not_supported),
        help("Supported platforms: cursor, claude, codex, copilot")
    )]
    PlatformNotSupported { platform: String },

    // Conflict errors
    #[error("Existing Groundwork files detected: {}", paths.join(", "))]
    #[diagnostic(
        code(groundwork::install::existing_files),
        help("Re-run with --force to overwrite, or --dry-run to preview the plan")
    )]
    ExistingFilesDetected { paths: Vec<String> },

    #[error("File already exists: {path}")]
    #[diagnostic(
        code(groundwork::install::destination_exists),
        help("Re-run with --force to overwrite files in place")
    )]
    DestinationExists { path: String },

    // Template errors
    #[error("Template '{name}' is unavailable")]
    #[diagnostic(
        code(groundwork::template::unavailable),
        help("The installation was aborted before any file was written")
    )]
    TemplateUnavailable { name: String },

    // Context/state file errors
    #[error("Failed to parse context file: {path}")]
    #[diagnostic(
        code(groundwork::context::parse_failed),
        help(
            "The existing context file is not valid JSON. Fix or move it aside; it is never discarded silently."
        )
    )]
    ContextParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(groundwork::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(groundwork::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(groundwork::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GroundworkError {
    fn from(err: std::io::Error) -> Self {
        GroundworkError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for GroundworkError {
    fn from(err: inquire::InquireError) -> Self {
        GroundworkError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GroundworkError>;
