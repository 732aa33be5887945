//! Error types for need operations.
//!
//! This module defines [`NeedError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Loading, decoding and validating a needs document returns `NeedError`
//!   and aborts the run
//! - Failures inside the resolution protocol never surface as `NeedError`;
//!   they are reported on the console and folded into the run outcome
//! - Use `anyhow::Error` (via `NeedError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for need operations.
#[derive(Debug, Error)]
pub enum NeedError {
    /// A needs file does not exist.
    #[error("Needs file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// A needs document is not valid YAML or lacks a required field.
    #[error("Failed to parse needs from {name}: {message}")]
    ConfigParseError { name: String, message: String },

    /// A needs document parsed but describes something other than needs.
    #[error("Invalid needs document {name}: {message}")]
    ConfigValidationError { name: String, message: String },

    /// The shell could not be started or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Help text could not be rendered for the terminal.
    #[error("Failed to render help: {message}")]
    HelpRender { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for need operations.
pub type Result<T> = std::result::Result<T, NeedError>;
