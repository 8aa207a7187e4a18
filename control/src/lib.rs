//! `almanac-control` — local HTTP control surface for batch capture.
//!
//! A thin tiny_http server over a [`RunRegistry`] that tracks at most one
//! active batch child process. Start/stop/status manage that run; the
//! capture endpoint spawns an independent single-day child per request
//! and streams the produced PNG back.

mod config;
mod registry;
mod server;

pub use config::ControlConfig;
pub use registry::{RunRegistry, RunStatus, StartError};
pub use server::ControlServer;
