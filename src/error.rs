//! Error types for envprobe operations.
//!
//! This module defines [`EnvprobeError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EnvprobeError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EnvprobeError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//!
//! Callers can tell the failure classes apart by variant: a rejected
//! application name ([`BlankAppName`](EnvprobeError::BlankAppName),
//! [`AbsoluteAppName`](EnvprobeError::AbsoluteAppName)) is a caller bug; an
//! unresolvable log root ([`LogRootUnset`](EnvprobeError::LogRootUnset),
//! [`UnsupportedPlatform`](EnvprobeError::UnsupportedPlatform)) is a
//! deployment problem; a missing program name
//! ([`ProgramNameUnavailable`](EnvprobeError::ProgramNameUnavailable)) means
//! no application name was available in the first place.

use thiserror::Error;

use crate::platform::Platform;

/// Core error type for envprobe operations.
#[derive(Debug, Error)]
pub enum EnvprobeError {
    /// Application name was empty or whitespace-only.
    #[error("Application name must not be empty")]
    BlankAppName,

    /// Application name is an absolute path and would escape the log root.
    #[error("Application name '{name}' must be a relative path segment")]
    AbsoluteAppName { name: String },

    /// The root environment variable for the current platform is unset or blank.
    #[error("Log root cannot be determined: environment variable '{variable}' is not set")]
    LogRootUnset { variable: &'static str },

    /// No log directory convention is known for the identified platform.
    #[error("No log directory convention for platform '{platform}'")]
    UnsupportedPlatform { platform: Platform },

    /// The running program's name could not be determined.
    #[error("Could not determine the running program's name: {message}")]
    ProgramNameUnavailable { message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envprobe operations.
pub type Result<T> = std::result::Result<T, EnvprobeError>;
