#![allow(dead_code)]

use std::process::{Command, Output};

use tempfile::TempDir;

/// A host nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Get live service settings from environment.
/// Returns None if not set, causing tests to be skipped.
pub fn get_test_service() -> Option<(String, String, String)> {
    let url = std::env::var("SKYFRAME_TEST_URL").ok()?;
    let username = std::env::var("SKYFRAME_TEST_USERNAME").ok()?;
    let password = std::env::var("SKYFRAME_TEST_PASSWORD").ok()?;
    Some((url, username, password))
}

/// Run the CLI binary with arguments, isolated from the user's settings
/// file and SKYFRAME_* environment.
pub fn run_cli(args: &[&str]) -> Output {
    let home = TempDir::new().expect("Failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skyframe"));
    cmd.args(args);
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"));
    for var in [
        "SKYFRAME_URL",
        "SKYFRAME_USERNAME",
        "SKYFRAME_PASSWORD",
        "SKYFRAME_CONFIG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str]) -> String {
    let output = run_cli(args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure.
pub fn run_cli_failure(args: &[&str]) -> String {
    let output = run_cli(args);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
