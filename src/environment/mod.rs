//! Deployment environment introspection.
//!
//! Answers "which environment is this process deployed in" from the
//! well-known variables the .NET hosting model sets. The priority chain is:
//!
//! 1. `DOTNET_ENVIRONMENT`
//! 2. `ASPNETCORE_ENVIRONMENT`
//! 3. Fallback to "Production"
//!
//! Blank values are skipped, not taken literally; an empty variable is the
//! same as an unset one.

pub mod container;
pub mod deployment;

pub use container::{in_container, in_container_with_env};
pub use deployment::{
    environment_name, environment_name_with_env, is_development, is_development_with_env,
    is_production, is_production_with_env, is_staging, is_staging_with_env, var, DEVELOPMENT,
    PRODUCTION, STAGING,
};
