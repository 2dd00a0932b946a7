//! Host platform classification.

use serde::Serialize;

/// Recognized host platforms.
///
/// The set is closed: a host the runtime cannot classify maps to
/// [`Platform::Unknown`], and call sites are expected to match exhaustively
/// so the unknown case is handled rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    FreeBsd,
    Unknown,
}

impl Platform {
    /// Classify an operating system name as reported by
    /// `std::env::consts::OS`.
    ///
    /// Candidates are checked in a fixed order (windows, linux, macos,
    /// freebsd); the first match wins and anything else is
    /// [`Platform::Unknown`].
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "freebsd" => Platform::FreeBsd,
            _ => Platform::Unknown,
        }
    }

    /// Lowercase name of the platform, matching `std::env::consts::OS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::FreeBsd => "freebsd",
            Platform::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability for querying the host operating system identity.
///
/// One method, one closed result set. Queries are pure and infallible;
/// implementations answer fresh on every call and never cache.
pub trait HostIdentity {
    /// Identify the current platform.
    fn identify(&self) -> Platform;
}

/// Host identity backed by the runtime's view of the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeHost;

impl HostIdentity for NativeHost {
    fn identify(&self) -> Platform {
        Platform::from_os_name(std::env::consts::OS)
    }
}

/// A fixed answer. Lets tests and CLI overrides stand in for the native
/// host without a dedicated mock type.
impl HostIdentity for Platform {
    fn identify(&self) -> Platform {
        *self
    }
}
