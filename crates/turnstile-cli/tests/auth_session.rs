//! Integration tests for the session lifecycle: login, whoami, logout.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn ada() -> serde_json::Value {
    serde_json::json!({
        "id": 2,
        "name": "Ada",
        "email": "ada@example.com",
        "role": "customer"
    })
}

#[tokio::test]
async fn test_login_persists_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "email": "ada@example.com",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ada()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .args([
            "login",
            "--email",
            "ada@example.com",
            "--password",
            "secret",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Ada (customer)"));

    let session = fs::read_to_string(home.path().join("session.json")).unwrap();
    let record: serde_json::Value = serde_json::from_str(&session).unwrap();
    assert_eq!(record, ada());
}

#[tokio::test]
async fn test_login_rejected_shows_server_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .args(["login", "--email", "ada@example.com", "--password", "wrong1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn test_login_validates_before_sending() {
    let home = TempDir::new().unwrap();

    // No server at all: validation failure must short-circuit the request.
    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .args(["login", "--email", "not-an-email", "--password", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email"));
}

#[tokio::test]
async fn test_signup_persists_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "secret",
            "role": "customer"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ada()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .args([
            "signup",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--password",
            "secret",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created"));

    assert!(home.path().join("session.json").exists());
}

#[test]
fn test_whoami_and_logout_roundtrip() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("session.json"),
        serde_json::to_string_pretty(&ada()).unwrap(),
    )
    .unwrap();

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada <ada@example.com> (customer)"));

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    assert!(!home.path().join("session.json").exists());

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn test_whoami_treats_malformed_session_as_signed_out() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("session.json"), "{not json").unwrap();

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}
