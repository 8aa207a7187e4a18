//! `almanac` — capture toolchain for the almanac card UI.
//!
//! Subcommands:
//! - `batch`   — capture every day in a month range (interactive: P/Q).
//! - `capture` — capture a single day.
//! - `serve`   — run the local HTTP control surface.
//! - `resolve` — print the content record for a day as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use almanac_capture::{CaptureConfig, CaptureControl, keyboard, run_batch, run_single};
use almanac_control::{ControlConfig, ControlServer};

#[derive(Debug, Parser)]
#[command(name = "almanac", about = "Almanac card capture toolchain", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture every day in the configured month range.
    Batch(BatchArgs),
    /// Capture a single day.
    Capture(CaptureArgs),
    /// Run the local batch control server.
    Serve(ServeArgs),
    /// Print the resolved content record for a day.
    Resolve(ResolveArgs),
}

#[derive(Debug, Parser)]
struct BatchArgs {
    /// Capture config TOML (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the first month (0-11).
    #[arg(long)]
    start_month: Option<u32>,

    /// Override the last month (0-11).
    #[arg(long)]
    end_month: Option<u32>,
}

#[derive(Debug, Parser)]
struct CaptureArgs {
    /// Month, 0-indexed (0-11).
    #[arg(long)]
    month: u32,

    /// Day of month (1-31).
    #[arg(long)]
    day: u32,

    /// Capture config TOML (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct ServeArgs {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:5174")]
    addr: String,

    /// Control config TOML (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct ResolveArgs {
    /// Month, 0-indexed (0-11).
    #[arg(long)]
    month: u32,

    /// Day of month (1-31).
    #[arg(long)]
    day: u32,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Batch(args) => batch(args),
        Command::Capture(args) => capture(args),
        Command::Serve(args) => serve(args),
        Command::Resolve(args) => resolve(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn batch(args: BatchArgs) -> anyhow::Result<ExitCode> {
    let mut config = CaptureConfig::load(args.config.as_deref())
        .context("loading capture config")?;
    if let Some(month) = args.start_month {
        config.start_month = month;
    }
    if let Some(month) = args.end_month {
        config.end_month = month;
    }

    eprintln!("[ controls: \"P\" = pause/resume | \"Q\" = quit ]");
    let control = CaptureControl::new();
    let _keys = keyboard::listen(control.clone());

    let summary = run_batch(&config, &control).await?;
    eprintln!(
        "capture complete: {} saved, {} failed, {} attempted{}",
        summary.saved,
        summary.failed,
        summary.attempted,
        if summary.cancelled { " (cancelled)" } else { "" }
    );
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn capture(args: CaptureArgs) -> anyhow::Result<ExitCode> {
    let config = CaptureConfig::load(args.config.as_deref())
        .context("loading capture config")?;
    let path = run_single(&config, args.month, args.day).await?;
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let config = ControlConfig::load(args.config.as_deref())
        .context("loading control config")?;
    let server = ControlServer::bind(&args.addr, config)
        .with_context(|| format!("binding {}", args.addr))?;
    server.run();
    Ok(ExitCode::SUCCESS)
}

fn resolve(args: ResolveArgs) -> anyhow::Result<ExitCode> {
    anyhow::ensure!(args.month <= 11, "month must be 0-11");
    anyhow::ensure!(
        (1..=almanac_content::days_in_month(args.month)).contains(&args.day),
        "day out of range for month {}",
        args.month
    );
    let event = almanac_content::resolve(args.month, args.day);
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_all_subcommands() {
        Cli::try_parse_from(["almanac", "batch", "--start-month", "2"]).unwrap();
        Cli::try_parse_from(["almanac", "capture", "--month", "3", "--day", "5"]).unwrap();
        Cli::try_parse_from(["almanac", "serve", "--addr", "127.0.0.1:0"]).unwrap();
        Cli::try_parse_from(["almanac", "resolve", "--month", "0", "--day", "1"]).unwrap();
    }

    #[test]
    fn capture_requires_month_and_day() {
        assert!(Cli::try_parse_from(["almanac", "capture", "--month", "3"]).is_err());
    }
}
