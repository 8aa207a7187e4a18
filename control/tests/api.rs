//! Endpoint contract tests.
//!
//! The server is exercised over real HTTP with the child commands
//! replaced by harmless stand-ins, so no browser is involved.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use almanac_control::{ControlConfig, ControlServer};
use serde_json::Value;

struct TestServer {
    base: String,
    _server: Arc<ControlServer>,
}

fn spawn_server(config: ControlConfig) -> TestServer {
    let server = Arc::new(ControlServer::bind("127.0.0.1:0", config).expect("bind"));
    let base = format!("http://127.0.0.1:{}", server.port());
    let worker = Arc::clone(&server);
    thread::spawn(move || worker.run());
    TestServer {
        base,
        _server: server,
    }
}

fn test_config(raw_dir: PathBuf) -> ControlConfig {
    ControlConfig {
        // A long-lived stand-in for the batch child.
        batch_command: vec!["sleep".to_string(), "30".to_string()],
        // Exits 0 without producing a file; individual tests override.
        capture_command: vec!["true".to_string()],
        raw_dir,
        year_label: "2026".to_string(),
    }
}

fn post(base: &str, path: &str, body: &str) -> reqwest::blocking::Response {
    reqwest::blocking::Client::new()
        .post(format!("{base}{path}"))
        .body(body.to_string())
        .send()
        .expect("request")
}

fn get_status(base: &str) -> String {
    let value: Value = reqwest::blocking::get(format!("{base}/api/batch/status"))
        .expect("request")
        .json()
        .expect("json");
    value["status"].as_str().unwrap_or_default().to_string()
}

#[test]
fn status_start_conflict_stop_lifecycle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = spawn_server(test_config(dir.path().to_path_buf()));

    assert_eq!(get_status(&server.base), "IDLE");

    let started = post(&server.base, "/api/batch/start", "");
    assert_eq!(started.status(), 200);
    let body: Value = started.json().expect("json");
    assert_eq!(body["status"], "STARTED");
    assert_eq!(get_status(&server.base), "RUNNING");

    // Second start while active: conflict, not queued.
    let conflict = post(&server.base, "/api/batch/start", "");
    assert_eq!(conflict.status(), 409);
    let body: Value = conflict.json().expect("json");
    assert_eq!(body["status"], "ALREADY_RUNNING");

    let stopped = post(&server.base, "/api/batch/stop", "");
    assert_eq!(stopped.status(), 200);
    let body: Value = stopped.json().expect("json");
    assert_eq!(body["status"], "STOPPED");
    assert_eq!(get_status(&server.base), "IDLE");

    // Stop with nothing running is a success, not an error.
    let noop = post(&server.base, "/api/batch/stop", "");
    assert_eq!(noop.status(), 200);
    let body: Value = noop.json().expect("json");
    assert_eq!(body["status"], "NOT_RUNNING");
}

#[test]
fn capture_rejects_bad_payloads_without_spawning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path().to_path_buf());
    // A command that would fail loudly if it were ever reached.
    config.capture_command = vec!["/nonexistent/never-spawned".to_string()];
    let server = spawn_server(config);

    for body in [
        r#"{"month":-1,"day":5}"#,
        r#"{"month":3,"day":32}"#,
        r#"{"month":"3","day":5}"#,
        r#"{"month":3}"#,
        "not json",
    ] {
        let response = post(&server.base, "/api/batch/capture", body);
        assert_eq!(response.status(), 400, "payload {body:?}");
    }
}

#[test]
fn capture_streams_the_produced_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let raw_dir = dir.path().to_path_buf();
    // Stand-in capture child: ignores its arguments and writes the file
    // the server expects for month=3, day=5.
    let png = raw_dir.join("2026_04_05.png");
    let mut config = test_config(raw_dir);
    config.capture_command = vec![
        "sh".to_string(),
        "-c".to_string(),
        format!("printf png-bytes > {}", png.display()),
    ];
    let server = spawn_server(config);

    let response = post(&server.base, "/api/batch/capture", r#"{"month":3,"day":5}"#);
    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    let disposition = response
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("2026_04_05.png"), "{disposition}");
    assert_eq!(response.bytes().expect("body").as_ref(), b"png-bytes");
}

#[test]
fn capture_reports_missing_output_as_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = spawn_server(test_config(dir.path().to_path_buf()));

    // `true` exits 0 but writes nothing.
    let response = post(&server.base, "/api/batch/capture", r#"{"month":3,"day":5}"#);
    assert_eq!(response.status(), 404);
}

#[test]
fn capture_reports_child_failure_as_500() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path().to_path_buf());
    config.capture_command = vec!["false".to_string()];
    let server = spawn_server(config);

    let response = post(&server.base, "/api/batch/capture", r#"{"month":3,"day":5}"#);
    assert_eq!(response.status(), 500);
    let body: Value = response.json().expect("json");
    assert_eq!(body["status"], "FAILED");
}

#[test]
fn unknown_routes_are_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = spawn_server(test_config(dir.path().to_path_buf()));

    let response = post(&server.base, "/api/batch/unknown", "");
    assert_eq!(response.status(), 404);
}
