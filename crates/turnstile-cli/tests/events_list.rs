//! Integration tests for `turnstile events`.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn sample_events() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "title": "Rust Meetup",
            "date": "2024-05-01T18:30:00",
            "location": "Berlin",
            "description": "systems talk",
            "price": 0.0,
            "category": "Community / Local",
            "image": null
        },
        {
            "id": 2,
            "title": "Launch Party",
            "date": "2024-06-10T20:00:00",
            "location": "HQ",
            "description": null,
            "price": 25.0,
            "category": "Corporate / Business",
            "image": null
        }
    ])
}

async fn mock_events(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_events()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_events_lists_all() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mock_events(&server).await;

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .arg("events")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rust Meetup")
                .and(predicate::str::contains("Launch Party"))
                .and(predicate::str::contains("$25.00")),
        );
}

#[tokio::test]
async fn test_events_search_filters_client_side() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mock_events(&server).await;

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .args(["events", "--search", "berlin"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rust Meetup")
                .and(predicate::str::contains("Launch Party").not()),
        );
}

#[tokio::test]
async fn test_events_category_filter_is_exact() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mock_events(&server).await;

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .args(["events", "--category", "Corporate / Business"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Launch Party")
                .and(predicate::str::contains("Rust Meetup").not()),
        );

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .args(["events", "--category", "corporate / business"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[tokio::test]
async fn test_events_surfaces_server_failure() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    cargo_bin_cmd!("turnstile")
        .env("TURNSTILE_HOME", home.path())
        .env("TURNSTILE_API_URL", server.uri())
        .arg("events")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not list events"));
}
