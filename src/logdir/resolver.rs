//! Platform-aware log directory resolver.

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::error::{EnvprobeError, Result};
use crate::platform::{HostIdentity, NativeHost, Platform};

/// Environment variable holding the Windows log root.
pub const WINDOWS_ROOT_VAR: &str = "LocalAppData";

/// Environment variable holding the macOS log root.
pub const UNIX_HOME_VAR: &str = "HOME";

/// Fixed log root on Linux and FreeBSD.
pub const SYSLOG_ROOT: &str = "/var/log";

/// Name of the per-application log subdirectory on Windows and macOS.
const LOG_SEGMENT: &str = "log";

/// Resolves the log directory for an application.
///
/// Takes the host identity as a constructor parameter so tests and the CLI
/// `--platform` override can substitute a fixed [`Platform`] for the
/// detected one.
///
/// # Example
///
/// ```
/// use envprobe::logdir::LogDirResolver;
/// use envprobe::platform::Platform;
///
/// let resolver = LogDirResolver::with_host(Box::new(Platform::Linux));
/// let dir = resolver.resolve("myapp").unwrap();
/// assert_eq!(dir, std::path::PathBuf::from("/var/log/myapp"));
/// ```
pub struct LogDirResolver {
    host: Box<dyn HostIdentity>,
}

impl LogDirResolver {
    /// Create a resolver using the native host identity.
    pub fn new() -> Self {
        Self::with_host(Box::new(NativeHost))
    }

    /// Create a resolver with a custom host identity.
    pub fn with_host(host: Box<dyn HostIdentity>) -> Self {
        Self { host }
    }

    /// The platform this resolver sees.
    pub fn platform(&self) -> Platform {
        self.host.identify()
    }

    /// Resolve the log directory for `app_name`.
    ///
    /// The name is trimmed and stripped of leading path separators, then
    /// placed under the platform's log root. Embedded separators are kept
    /// as-is; only an absolute name is rejected.
    pub fn resolve(&self, app_name: &str) -> Result<PathBuf> {
        self.resolve_with_env(app_name, |key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(&self, app_name: &str, env_fn: F) -> Result<PathBuf>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let app_name = sanitize_app_name(app_name)?;
        let platform = self.host.identify();

        let path = match platform {
            Platform::Windows => {
                let root = require_var(WINDOWS_ROOT_VAR, &env_fn)?;
                PathBuf::from(root).join(app_name).join(LOG_SEGMENT)
            }
            Platform::MacOs => {
                let root = require_var(UNIX_HOME_VAR, &env_fn)?;
                PathBuf::from(root).join(app_name).join(LOG_SEGMENT)
            }
            // Applications log directly under the system log root here;
            // there is no per-app `log` subdirectory on these platforms.
            Platform::Linux | Platform::FreeBsd => PathBuf::from(SYSLOG_ROOT).join(app_name),
            Platform::Unknown => {
                return Err(EnvprobeError::UnsupportedPlatform { platform });
            }
        };

        tracing::debug!(%platform, path = %path.display(), "Log directory resolved");
        Ok(path)
    }

    /// Resolve the log directory for the currently running program.
    ///
    /// Uses the executable's file stem as the application name; everything
    /// after that is identical to [`resolve`](Self::resolve). Fails with
    /// [`EnvprobeError::ProgramNameUnavailable`] when the executable path
    /// cannot be determined.
    pub fn resolve_for_current_exe(&self) -> Result<PathBuf> {
        let name = current_program_name()?;
        self.resolve(&name)
    }
}

impl Default for LogDirResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate and canonicalize an application name for use as a path segment.
///
/// Order matters: the blank check runs on the raw input, the absolute-path
/// check on the trimmed, separator-stripped remainder.
fn sanitize_app_name(raw: &str) -> Result<&str> {
    if raw.trim().is_empty() {
        return Err(EnvprobeError::BlankAppName);
    }

    let name = raw.trim().trim_start_matches(['/', '\\']);
    if name.is_empty() {
        // Nothing but separators, e.g. "///".
        return Err(EnvprobeError::BlankAppName);
    }
    if is_absolute_input(name) {
        return Err(EnvprobeError::AbsoluteAppName {
            name: name.to_string(),
        });
    }

    Ok(name)
}

/// Absolute-path check covering both path styles regardless of host.
///
/// A Windows drive prefix (`C:...`) survives the leading-separator strip, so
/// it is checked explicitly; everything else defers to the host's own
/// notion of an absolute path.
fn is_absolute_input(name: &str) -> bool {
    let mut chars = name.chars();
    if let (Some(drive), Some(':')) = (chars.next(), chars.next()) {
        if drive.is_ascii_alphabetic() {
            return true;
        }
    }
    Path::new(name).is_absolute()
}

/// Look up a root variable, treating blank the same as unset.
fn require_var<F>(variable: &'static str, env_fn: &F) -> Result<String>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    match env_fn(variable) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EnvprobeError::LogRootUnset { variable }),
    }
}

/// File stem of the currently running executable.
fn current_program_name() -> Result<String> {
    let exe = std::env::current_exe().map_err(|e| EnvprobeError::ProgramNameUnavailable {
        message: e.to_string(),
    })?;
    exe.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| EnvprobeError::ProgramNameUnavailable {
            message: format!("executable path '{}' has no usable file name", exe.display()),
        })
}
