//! Container detection.

use std::env::VarError;

/// Variable the .NET container images set to mark containerized processes.
const CONTAINER_VAR: &str = "DOTNET_RUNNING_IN_CONTAINER";

/// Check whether the process runs inside a container.
///
/// `DOTNET_RUNNING_IN_CONTAINER` is parsed as a case-insensitive boolean:
/// only `true` (any casing, surrounding whitespace ignored) counts. Blank,
/// missing, or unparseable values are `false`.
pub fn in_container() -> bool {
    in_container_with_env(|key| std::env::var(key))
}

/// Container check with a custom env var lookup (for testing).
pub fn in_container_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match env_fn(CONTAINER_VAR) {
        Ok(value) => value.trim().eq_ignore_ascii_case("true"),
        Err(_) => false,
    }
}
