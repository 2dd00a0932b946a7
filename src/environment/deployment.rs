//! Deployment environment name resolution.
//!
//! Reads the well-known hosting variables and classifies the result against
//! the three conventional environment names.

use std::env::VarError;

/// Conventional name of the development environment.
pub const DEVELOPMENT: &str = "Development";

/// Conventional name of the staging environment.
pub const STAGING: &str = "Staging";

/// Conventional name of the production environment. Also the fallback when
/// no environment variable is set.
pub const PRODUCTION: &str = "Production";

/// Variables consulted for the environment name, in priority order.
const ENVIRONMENT_VARS: [&str; 2] = ["DOTNET_ENVIRONMENT", "ASPNETCORE_ENVIRONMENT"];

/// Resolve the active deployment environment name.
///
/// Checks `DOTNET_ENVIRONMENT` then `ASPNETCORE_ENVIRONMENT`; the first
/// non-blank value wins. Falls back to `"Production"` when neither is set.
///
/// # Example
///
/// ```
/// let name = envprobe::environment::environment_name();
/// assert!(!name.is_empty());
/// ```
pub fn environment_name() -> String {
    environment_name_with_env(|key| std::env::var(key))
}

/// Resolve the environment name with a custom env var lookup (for testing).
pub fn environment_name_with_env<F>(env_fn: F) -> String
where
    F: Fn(&str) -> Result<String, VarError>,
{
    for var in ENVIRONMENT_VARS {
        if let Ok(value) = env_fn(var) {
            if !value.trim().is_empty() {
                tracing::debug!(variable = var, value = %value, "Environment name resolved");
                return value;
            }
        }
    }
    PRODUCTION.to_string()
}

/// Check whether the process runs in the development environment.
///
/// The comparison is case-insensitive, so `development` and `DeveLopment`
/// both count.
pub fn is_development() -> bool {
    is_development_with_env(|key| std::env::var(key))
}

/// Development check with a custom env var lookup (for testing).
pub fn is_development_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    environment_name_with_env(env_fn).eq_ignore_ascii_case(DEVELOPMENT)
}

/// Check whether the process runs in the staging environment.
pub fn is_staging() -> bool {
    is_staging_with_env(|key| std::env::var(key))
}

/// Staging check with a custom env var lookup (for testing).
pub fn is_staging_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    environment_name_with_env(env_fn).eq_ignore_ascii_case(STAGING)
}

/// Check whether the process runs in the production environment.
///
/// True both when a variable names production explicitly and when no
/// environment variable is set at all.
pub fn is_production() -> bool {
    is_production_with_env(|key| std::env::var(key))
}

/// Production check with a custom env var lookup (for testing).
pub fn is_production_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    environment_name_with_env(env_fn).eq_ignore_ascii_case(PRODUCTION)
}

/// Raw process environment lookup.
///
/// Returns `None` when the variable is unset (or not valid Unicode). Unlike
/// [`environment_name`], a blank value is returned as-is.
pub fn var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
