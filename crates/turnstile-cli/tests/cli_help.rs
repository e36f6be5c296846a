//! Smoke tests for CLI argument parsing.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("turnstile")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("login")
                .and(predicate::str::contains("signup"))
                .and(predicate::str::contains("events"))
                .and(predicate::str::contains("logout"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("turnstile")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("turnstile"));
}

#[test]
fn test_unknown_subcommand_fails() {
    cargo_bin_cmd!("turnstile")
        .arg("frobnicate")
        .assert()
        .failure();
}

#[test]
fn test_login_requires_email_and_password() {
    cargo_bin_cmd!("turnstile")
        .args(["login", "--email", "ada@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--password"));
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", dir.path())
        .args(["--api-url", "not a url", "events"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --api-url"));
}
