//! Error types and handling for Viltkit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Viltkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum ViltkitError {
    // Project errors
    #[error("Not a Laravel project: {path}")]
    #[diagnostic(
        code(viltkit::project::not_found),
        help(
            "The project root must contain the 'artisan' script. Point --project (or VILTKIT_PROJECT) at a Laravel application root."
        )
    )]
    ProjectNotFound { path: String },

    #[error("Module '{name}' not found")]
    #[diagnostic(
        code(viltkit::module::not_found),
        help("Run 'viltkit modules' to list the installed modules")
    )]
    ModuleNotFound { name: String },

    // Manifest errors
    #[error("Failed to parse manifest: {path}")]
    #[diagnostic(code(viltkit::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // Account errors
    #[error("Name, email, and password are all required")]
    #[diagnostic(code(viltkit::accounts::missing_fields))]
    MissingUserFields,

    #[error("Invalid email format")]
    #[diagnostic(
        code(viltkit::accounts::invalid_email),
        help("Provide an address like user@example.com")
    )]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    #[diagnostic(code(viltkit::accounts::weak_password))]
    WeakPassword,

    #[error("A user with email '{email}' already exists")]
    #[diagnostic(code(viltkit::accounts::duplicate_email))]
    DuplicateEmail { email: String },

    #[error("Failed to parse account store: {path}")]
    #[diagnostic(
        code(viltkit::accounts::store_parse_failed),
        help("The store is plain JSON; fix or remove the file and retry")
    )]
    AccountStoreParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(viltkit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(viltkit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(viltkit::fs::io_error))]
    IoError { message: String },

    // MCP errors
    #[error("MCP server failed: {reason}")]
    #[diagnostic(code(viltkit::mcp::server_failed))]
    McpServerFailed { reason: String },
}

impl From<std::io::Error> for ViltkitError {
    fn from(err: std::io::Error) -> Self {
        ViltkitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ViltkitError {
    fn from(err: serde_json::Error) -> Self {
        ViltkitError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ViltkitError {
    fn from(err: inquire::InquireError) -> Self {
        ViltkitError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ViltkitError>;
