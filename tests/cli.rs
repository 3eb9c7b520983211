use std::path::Path;
use std::process::Output;

use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs the relpublish binary against `server` with a fixed release version.
async fn run_relpublish(server: &MockServer, notes_dir: &Path, version: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relpublish"))
        .current_dir(notes_dir)
        .env_remove("GITHUB_TOKEN")
        .env_remove("RELPUBLISH_REPO")
        .env_remove("GITHUB_API_URL")
        .env_remove("RELPUBLISH_LOG")
        .args(["--repo", "test/repo", "--api-url"])
        .arg(server.uri())
        .arg("--notes-dir")
        .arg(notes_dir)
        .args(["--release-version", version])
        .output()
        .await
        .expect("Failed to run relpublish")
}

fn notes_dir(version: &str, text: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{version}.md")), text).unwrap();
    dir
}

async fn mount_list(server: &MockServer, releases: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/repos/test/repo/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(releases))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_skip_exits_successfully() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, serde_json::json!([{ "tag_name": "2.3.0" }])).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let notes = notes_dir("2.3.0", "Bug fixes");
    let output = run_relpublish(&mock_server, notes.path(), "2.3.0").await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Found release 2.3.0, skipping creation!"
    );
}

#[tokio::test]
async fn test_created_release_exits_successfully() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, serde_json::json!([])).await;

    Mock::given(method("POST"))
        .and(path("/repos/test/repo/releases"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "tag_name": "2.3.0",
            "html_url": "https://github.com/test/repo/releases/tag/2.3.0"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notes = notes_dir("2.3.0", "Bug fixes");
    let output = run_relpublish(&mock_server, notes.path(), "2.3.0").await;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Release 2.3.0 created successfully"));
}

#[tokio::test]
async fn test_missing_notes_exits_with_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let notes = notes_dir("2.3.0", "Bug fixes");
    let output = run_relpublish(&mock_server, notes.path(), "9.9.9").await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Release notes not found for 9.9.9"));
}

#[tokio::test]
async fn test_rejected_create_exits_with_failure() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, serde_json::json!([])).await;

    Mock::given(method("POST"))
        .and(path("/repos/test/repo/releases"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Validation Failed"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notes = notes_dir("2.3.0", "Bug fixes");
    let output = run_relpublish(&mock_server, notes.path(), "2.3.0").await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Failed to create release (status 422): Validation Failed"));
}
