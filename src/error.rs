//! Error types for sitecheck operations.
//!
//! This module defines [`SitecheckError`], the error type for conditions that
//! prevent the readiness check from reaching any verdict, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems *inside* a workspace (missing files, placeholders, no marker)
//!   are findings, not errors; they end up in the report
//! - `SitecheckError` is reserved for conditions where no determination can
//!   be made at all (unreadable workspace, malformed marker, bad rule file)
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sitecheck operations.
#[derive(Debug, Error)]
pub enum SitecheckError {
    /// The workspace root does not exist or cannot be listed.
    #[error("Cannot read workspace at {path}: {source}")]
    WorkspaceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The vertical marker exists but is not a well-formed marker record.
    #[error("Malformed vertical marker at {path}: {message}")]
    MarkerParseError { path: PathBuf, message: String },

    /// Rule override file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the rule override file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Rule override file parsed but contains unusable values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sitecheck operations.
pub type Result<T> = std::result::Result<T, SitecheckError>;
