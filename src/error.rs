//! Error types for csp-create operations.
//!
//! This module defines [`ScaffoldError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ScaffoldError` for the scaffolding failure taxonomy that the
//!   top-level handler maps to exit codes
//! - Use `anyhow::Error` (via `ScaffoldError::Other`) for unexpected errors
//! - All errors are fatal to the run; nothing is retried

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for csp-create operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Template manifest missing at the resolved path.
    #[error("No package.json found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// The registry reports the package does not exist.
    #[error("Unable to find \"{package}\" in the package registry")]
    RegistryLookupFailed { package: String },

    /// The registry could not be reached or returned an unexpected response.
    #[error("Registry unavailable while looking up \"{package}\": {message}")]
    RegistryUnavailable { package: String, message: String },

    /// Template manifest lacks the required marker keyword.
    #[error(
        "\"{template}\" is not a CSP template (missing \"{marker}\" keyword in package.json); \
         check the template name to make sure you are using the current template name"
    )]
    UntrustedTemplate { template: String, marker: String },

    /// Retrieving the template package into the target failed.
    #[error("Failed to fetch template \"{template}\":\n{output}")]
    FetchFailed { template: String, output: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for csp-create operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
