//! Envprobe - deployment environment and log directory introspection.
//!
//! Envprobe answers the questions a service asks about its surroundings at
//! startup: which deployment environment it runs in, whether that is a
//! development environment, whether it is containerized, and where it should
//! put its log files on the current platform.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Deployment environment and container introspection
//! - [`error`] - Error types and result aliases
//! - [`logdir`] - Platform-aware log directory resolution
//! - [`platform`] - Host platform identification
//!
//! # Example
//!
//! ```
//! use envprobe::logdir::LogDirResolver;
//! use envprobe::platform::Platform;
//!
//! // Resolve against a fixed platform instead of the detected one
//! let resolver = LogDirResolver::with_host(Box::new(Platform::Linux));
//! let dir = resolver.resolve("myapp").unwrap();
//! assert_eq!(dir, std::path::PathBuf::from("/var/log/myapp"));
//! ```
//!
//! The resolver only computes paths; creating the directory (and anything
//! else that touches the filesystem) is the caller's business.

pub mod cli;
pub mod environment;
pub mod error;
pub mod logdir;
pub mod platform;

pub use error::{EnvprobeError, Result};
