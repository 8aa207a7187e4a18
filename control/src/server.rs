//! Local HTTP control surface for the batch generator.
//!
//! Four endpoints under `/api/batch`: status, start, stop, and a
//! synchronous single-day capture that streams the produced PNG back.
//! Dev-server tooling only — bound to localhost, no auth, permissive CORS.

use std::process::Command;

use serde_json::json;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::config::ControlConfig;
use crate::registry::{RunRegistry, StartError};

/// Reply payload: either JSON or a PNG attachment.
enum Reply {
    Json(u16, serde_json::Value),
    Png(Vec<u8>, String),
}

pub struct ControlServer {
    server: Server,
    registry: RunRegistry,
    config: ControlConfig,
}

impl ControlServer {
    /// Bind to `addr` (e.g. `127.0.0.1:5174`; port 0 picks a free one).
    pub fn bind(addr: &str, config: ControlConfig) -> std::io::Result<Self> {
        let server = Server::http(addr).map_err(std::io::Error::other)?;
        Ok(Self {
            server,
            registry: RunRegistry::new(),
            config,
        })
    }

    /// The port actually bound.
    pub fn port(&self) -> u16 {
        self.server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .unwrap_or(0)
    }

    /// Serve requests until the process exits. Single-threaded: control
    /// traffic is rare and a capture request is deliberately synchronous.
    pub fn run(&self) {
        tracing::info!("batch control listening on port {}", self.port());
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
    }

    fn handle(&self, mut request: Request) {
        let reply = self.route(&mut request);
        let method = request.method().clone();
        let url = request.url().to_string();
        if let Err(e) = respond(request, reply) {
            tracing::warn!("failed to respond to {method} {url}: {e}");
        }
    }

    fn route(&self, request: &mut Request) -> Reply {
        match (request.method(), request.url()) {
            (Method::Get, "/api/batch/status") => self.status(),
            (Method::Post, "/api/batch/start") => self.start(),
            (Method::Post, "/api/batch/stop") => self.stop(),
            (Method::Post, "/api/batch/capture") => {
                let mut body = String::new();
                if request.as_reader().read_to_string(&mut body).is_err() {
                    return Reply::Json(400, json!({"error": "Invalid Payload"}));
                }
                self.capture(&body)
            }
            _ => Reply::Json(404, json!({"error": "not found"})),
        }
    }

    fn status(&self) -> Reply {
        let status = match self.registry.status() {
            crate::registry::RunStatus::Running => "RUNNING",
            crate::registry::RunStatus::Idle => "IDLE",
        };
        Reply::Json(200, json!({"status": status}))
    }

    fn start(&self) -> Reply {
        match self.registry.start(build_command(&self.config.batch_command, &[])) {
            Ok(pid) => {
                tracing::info!("batch generator started (pid {pid})");
                Reply::Json(200, json!({"status": "STARTED"}))
            }
            Err(StartError::AlreadyRunning) => {
                Reply::Json(409, json!({"status": "ALREADY_RUNNING"}))
            }
            Err(StartError::Spawn(e)) => {
                tracing::error!("batch generator spawn failed: {e}");
                Reply::Json(500, json!({"status": "FAILED", "error": e.to_string()}))
            }
        }
    }

    fn stop(&self) -> Reply {
        if self.registry.stop() {
            tracing::info!("batch generator stopped");
            Reply::Json(200, json!({"status": "STOPPED"}))
        } else {
            Reply::Json(200, json!({"status": "NOT_RUNNING"}))
        }
    }

    /// Validate the payload, run one capture child synchronously, and
    /// stream the produced file back. Validation failures never spawn.
    fn capture(&self, body: &str) -> Reply {
        let Some((month, day)) = parse_capture_payload(body) else {
            return Reply::Json(400, json!({"error": "Invalid Payload"}));
        };

        tracing::info!("single capture request: month {month}, day {day}");

        let mut command = build_command(
            &self.config.capture_command,
            &[
                "--month".to_string(),
                month.to_string(),
                "--day".to_string(),
                day.to_string(),
            ],
        );
        let status = match command.status() {
            Ok(status) => status,
            Err(e) => {
                tracing::error!("capture spawn failed: {e}");
                return Reply::Json(500, json!({"status": "FAILED", "error": e.to_string()}));
            }
        };

        if !status.success() {
            return Reply::Json(500, json!({"status": "FAILED"}));
        }

        let path = self.config.day_path(month, day);
        match std::fs::read(&path) {
            Ok(bytes) => Reply::Png(bytes, self.config.day_filename(month, day)),
            Err(_) => Reply::Json(404, json!({"error": "File generated but not found"})),
        }
    }
}

/// Extract `{month, day}`, requiring both to be JSON integers in range
/// (month 0-11, day 1-31). Strings, floats, and missing fields all fail.
fn parse_capture_payload(body: &str) -> Option<(u32, u32)> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let month = value.get("month")?.as_i64()?;
    let day = value.get("day")?.as_i64()?;
    if !(0..=11).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((month as u32, day as u32))
}

fn build_command(template: &[String], extra: &[String]) -> Command {
    let program = template.first().map(String::as_str).unwrap_or("almanac");
    let mut command = Command::new(program);
    command.args(&template[1.min(template.len())..]);
    command.args(extra);
    command
}

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn respond(request: Request, reply: Reply) -> std::io::Result<()> {
    match reply {
        Reply::Json(code, body) => {
            let mut response =
                Response::from_string(body.to_string()).with_status_code(code);
            if let Some(h) = header("Content-Type", "application/json") {
                response.add_header(h);
            }
            if let Some(h) = header("Access-Control-Allow-Origin", "*") {
                response.add_header(h);
            }
            request.respond(response)
        }
        Reply::Png(bytes, filename) => {
            let mut response = Response::from_data(bytes).with_status_code(200);
            if let Some(h) = header("Content-Type", "image/png") {
                response.add_header(h);
            }
            if let Some(h) = header(
                "Content-Disposition",
                &format!("attachment; filename=\"{filename}\""),
            ) {
                response.add_header(h);
            }
            if let Some(h) = header("Access-Control-Allow-Origin", "*") {
                response.add_header(h);
            }
            request.respond(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_integer_month_and_day() {
        assert_eq!(parse_capture_payload(r#"{"month":3,"day":5}"#), Some((3, 5)));
        assert_eq!(parse_capture_payload(r#"{"month":0,"day":1}"#), Some((0, 1)));
        assert_eq!(parse_capture_payload(r#"{"month":11,"day":31}"#), Some((11, 31)));

        // Range violations.
        assert_eq!(parse_capture_payload(r#"{"month":-1,"day":5}"#), None);
        assert_eq!(parse_capture_payload(r#"{"month":12,"day":5}"#), None);
        assert_eq!(parse_capture_payload(r#"{"month":3,"day":0}"#), None);
        assert_eq!(parse_capture_payload(r#"{"month":3,"day":32}"#), None);

        // Type violations.
        assert_eq!(parse_capture_payload(r#"{"month":"3","day":5}"#), None);
        assert_eq!(parse_capture_payload(r#"{"month":3,"day":5.5}"#), None);
        assert_eq!(parse_capture_payload(r#"{"month":3}"#), None);
        assert_eq!(parse_capture_payload("not json"), None);
    }

    #[test]
    fn command_template_appends_extra_args() {
        let command = build_command(
            &["almanac".to_string(), "capture".to_string()],
            &["--month".to_string(), "3".to_string()],
        );
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(command.get_program(), "almanac");
        assert_eq!(args, ["capture", "--month", "3"]);
    }
}
