//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn tabmove_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("tabmove")
}

/// Command isolated from the caller's environment and profile file
fn tabmove(home: &TempDir) -> Command {
    let mut cmd = Command::new(tabmove_bin());
    cmd.env("HOME", home.path())
        .env_remove("TABLEAU_SERVER")
        .env_remove("TABLEAU_USERNAME")
        .env_remove("TABLEAU_SITE")
        .env_remove("TABLEAU_API_VERSION")
        .env_remove("TABLEAU_PASSWORD")
        .env_remove("TABMOVE_PROFILE");
    cmd
}

async fn mount_happy_path(mock_server: &MockServer, put_status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/3.19/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "credentials": {
                "site": { "id": "site-1" },
                "user": { "id": "user-1" },
                "token": "tok-abc"
            }
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/3.19/sites/site-1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "projects": { "project": [
                { "id": "p1", "name": "Marketing" },
                { "id": "p2", "name": "Sales" }
            ]}
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/3.19/sites/site-1/users/user-1/workbooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "workbooks": { "workbook": [
                { "id": "w1", "name": "Report A", "project": { "id": "p1", "name": "Marketing" } }
            ]}
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/3.19/sites/site-1/workbooks/w1"))
        .and(body_json(serde_json::json!({
            "workbook": { "project": { "id": "p2" } }
        })))
        .respond_with(ResponseTemplate::new(put_status))
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/3.19/auth/signout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    tabmove(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Move a Tableau Server workbook between projects",
        ));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    tabmove(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabmove"));
}

#[test]
fn test_invalid_output_format() {
    let home = TempDir::new().unwrap();
    tabmove(&home)
        .args(["--output", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_missing_server_fails() {
    let home = TempDir::new().unwrap();
    tabmove(&home)
        .args(["-u", "alice", "-w", "Report A", "-p", "Sales", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No server configured"));
}

#[test]
fn test_batch_requires_workbook_name() {
    let home = TempDir::new().unwrap();
    tabmove(&home)
        .args(["--server", "http://127.0.0.1:9", "-u", "alice", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--workbook"));
}

#[test]
fn test_batch_requires_password() {
    let home = TempDir::new().unwrap();
    tabmove(&home)
        .args([
            "--server",
            "http://127.0.0.1:9",
            "-u",
            "alice",
            "-w",
            "Report A",
            "-p",
            "Sales",
            "--batch",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TABLEAU_PASSWORD"));
}

#[test]
fn test_unknown_profile_fails() {
    let home = TempDir::new().unwrap();
    tabmove(&home)
        .args(["--profile", "missing", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'missing' not found"));
}

#[test]
fn test_corrupt_profile_file_fails() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".tabmove");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.json"), r#"{ "current-profile": "prod", oops"#).unwrap();

    tabmove(&home)
        .args(["-w", "Report A", "-p", "Sales", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse profile config"))
        .stderr(predicate::str::contains("No server configured").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_move_json_output() {
    let mock_server = MockServer::start().await;
    mount_happy_path(&mock_server, 200).await;

    let home = TempDir::new().unwrap();
    tabmove(&home)
        .env("TABLEAU_PASSWORD", "pw")
        .args([
            "--server",
            &mock_server.uri(),
            "-u",
            "alice",
            "-w",
            "Report A",
            "-p",
            "sales",
            "--batch",
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"destination_project_id\": \"p2\""))
        .stdout(predicate::str::contains("\"source_project_id\": \"p1\""))
        .stdout(predicate::str::contains(
            "\"destination_project_name\": \"Sales\"",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_move_uses_profile_file() {
    let mock_server = MockServer::start().await;
    mount_happy_path(&mock_server, 200).await;

    let home = TempDir::new().unwrap();
    let dir = home.path().join(".tabmove");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.json"),
        serde_json::json!({
            "current-profile": "test",
            "profiles": {
                "test": { "server": mock_server.uri(), "username": "alice" }
            }
        })
        .to_string(),
    )
    .unwrap();

    tabmove(&home)
        .env("TABLEAU_PASSWORD", "pw")
        .args(["-w", "Report A", "-p", "Sales", "--batch", "-o", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report A,w1,Marketing,p1,Sales,p2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_forbidden_move_exits_non_zero() {
    let mock_server = MockServer::start().await;
    mount_happy_path(&mock_server, 403).await;

    let home = TempDir::new().unwrap();
    tabmove(&home)
        .env("TABLEAU_PASSWORD", "pw")
        .args([
            "--server",
            &mock_server.uri(),
            "-u",
            "alice",
            "-w",
            "Report A",
            "-p",
            "Sales",
            "--batch",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("status 403"));
}
