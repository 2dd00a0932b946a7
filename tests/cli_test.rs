//! Integration tests for the CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

/// A command with the hosting variables cleared, so the test process's own
/// environment cannot leak into assertions.
fn envprobe() -> Command {
    let mut cmd = Command::new(cargo_bin("envprobe"));
    cmd.env_remove("DOTNET_ENVIRONMENT");
    cmd.env_remove("ASPNETCORE_ENVIRONMENT");
    cmd.env_remove("DOTNET_RUNNING_IN_CONTAINER");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "deployment environment and log directory introspection",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_shows_report() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Environment"))
        .stdout(predicate::str::contains("Production"));
    Ok(())
}

#[test]
fn report_prefers_dotnet_environment() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env("DOTNET_ENVIRONMENT", "unit");
    cmd.env("ASPNETCORE_ENVIRONMENT", "test");
    cmd.arg("report");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("unit"))
        .stdout(predicate::str::contains("test").not());
    Ok(())
}

#[test]
fn report_falls_back_to_aspnetcore_environment() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env("ASPNETCORE_ENVIRONMENT", "test");
    cmd.arg("report");
    cmd.assert().success().stdout(predicate::str::contains("test"));
    Ok(())
}

#[test]
fn report_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.args(["report", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["environment"], "Production");
    assert_eq!(report["development"], false);
    assert!(report["platform"].is_string());
    Ok(())
}

#[test]
fn report_marks_development_environments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env("DOTNET_ENVIRONMENT", "DeveLopment");
    cmd.args(["report", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["development"], true);
    Ok(())
}

#[test]
fn report_detects_container_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env("DOTNET_RUNNING_IN_CONTAINER", "TRUE");
    cmd.args(["report", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["container"], true);
    Ok(())
}

#[test]
fn logdir_resolves_for_linux() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.args(["logdir", "myapp", "--platform", "linux"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/var/log"))
        .stdout(predicate::str::contains("myapp"));
    Ok(())
}

#[test]
fn logdir_resolves_for_macos_from_home() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env("HOME", "/home/USER");
    cmd.args(["logdir", "myapp", "--platform", "macos"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let printed = String::from_utf8(output)?;
    let expected = std::path::PathBuf::from("/home/USER").join("myapp").join("log");
    assert_eq!(printed.trim(), expected.display().to_string());
    Ok(())
}

#[test]
fn logdir_fails_without_windows_root() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env_remove("LocalAppData");
    cmd.args(["logdir", "myapp", "--platform", "windows"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("LocalAppData"));
    Ok(())
}

#[test]
fn logdir_rejects_absolute_names() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.args(["logdir", "C:\\oops", "--platform", "linux"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("relative path segment"));
    Ok(())
}

#[test]
fn logdir_defaults_to_the_program_name() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.args(["logdir", "--platform", "linux"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let printed = String::from_utf8(output)?;
    let expected = std::path::PathBuf::from("/var/log").join("envprobe");
    assert_eq!(printed.trim(), expected.display().to_string());
    Ok(())
}

#[test]
fn var_prints_a_set_variable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env("ENVPROBE_TEST_VAR", "hello");
    cmd.args(["var", "ENVPROBE_TEST_VAR"]);
    cmd.assert().success().stdout(predicate::str::contains("hello"));
    Ok(())
}

#[test]
fn var_fails_for_an_unset_variable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.env_remove("ENVPROBE_TEST_VAR");
    cmd.args(["var", "ENVPROBE_TEST_VAR"]);
    cmd.assert().failure().stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = envprobe();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("envprobe"));
    Ok(())
}
