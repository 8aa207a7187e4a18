//! The batch capture loop and the single-day capture path.
//!
//! One day is captured fully before the next begins; cancellation is
//! cooperative and checked at the top of each day and inside the pause
//! wait. In batch mode a failing day is logged and skipped; in single
//! mode the failure is the caller's problem.

use std::path::PathBuf;

use almanac_content::days_in_month;

use crate::config::CaptureConfig;
use crate::control::CaptureControl;
use crate::error::CaptureError;
use crate::session::ExportSession;

/// Outcome of a batch run. Attempts, saves, and failures are tracked
/// separately; a skipped day is never counted as saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub attempted: u32,
    pub saved: u32,
    pub failed: u32,
    pub cancelled: bool,
}

fn validate_date(month: u32, day: u32) -> Result<(), CaptureError> {
    let max_day = days_in_month(month);
    if month > 11 || day == 0 || day > max_day {
        return Err(CaptureError::InvalidDate {
            month,
            day,
            max_day,
        });
    }
    Ok(())
}

async fn capture_day(
    session: &ExportSession,
    config: &CaptureConfig,
    month: u32,
    day: u32,
) -> Result<PathBuf, CaptureError> {
    session.goto_day(config, month, day).await?;
    session.wait_for_card(config).await?;
    let png = session.screenshot_frame().await?;

    let path = config.day_path(month, day);
    tokio::fs::write(&path, &png)
        .await
        .map_err(|source| CaptureError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Capture every day in the configured month range.
///
/// The browser is launched once and shared; errors on individual days do
/// not abort the run. Returns the summary; the session is closed before
/// returning, cancelled or not.
pub async fn run_batch(
    config: &CaptureConfig,
    control: &CaptureControl,
) -> Result<BatchSummary, CaptureError> {
    tokio::fs::create_dir_all(&config.raw_dir).await?;
    let session = ExportSession::launch(config).await?;
    let mut summary = BatchSummary::default();

    'months: for month in config.start_month..=config.end_month.min(11) {
        for day in 1..=days_in_month(month) {
            if control.is_cancelled() || control.wait_while_paused().await {
                summary.cancelled = true;
                break 'months;
            }

            summary.attempted += 1;
            match capture_day(&session, config, month, day).await {
                Ok(path) => {
                    summary.saved += 1;
                    tracing::info!("saved {}", path.display());
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!("skipping {:02}-{:02}: {e}", month + 1, day);
                }
            }
        }
    }

    session.close().await;
    tracing::info!(
        "capture complete: {} saved, {} failed, {} attempted{}",
        summary.saved,
        summary.failed,
        summary.attempted,
        if summary.cancelled { " (cancelled)" } else { "" }
    );
    Ok(summary)
}

/// Capture exactly one day, surfacing any failure to the caller.
pub async fn run_single(
    config: &CaptureConfig,
    month: u32,
    day: u32,
) -> Result<PathBuf, CaptureError> {
    validate_date(month, day)?;
    tokio::fs::create_dir_all(&config.raw_dir).await?;

    let session = ExportSession::launch(config).await?;
    let result = capture_day(&session, config, month, day).await;
    session.close().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_validation_bounds() {
        assert!(validate_date(0, 1).is_ok());
        assert!(validate_date(11, 31).is_ok());
        assert!(validate_date(12, 1).is_err());
        assert!(validate_date(0, 0).is_err());
        // Short months are bounded by the real calendar, not 31.
        assert!(validate_date(1, 29).is_err());
        assert!(validate_date(1, 28).is_ok());
    }

    #[test]
    fn summary_defaults_to_zero() {
        let summary = BatchSummary::default();
        assert_eq!(summary.attempted, 0);
        assert_eq!(summary.saved, 0);
        assert_eq!(summary.failed, 0);
        assert!(!summary.cancelled);
    }
}
