//! Capture error taxonomy.
//!
//! Every failure is terminal for its unit of work (one day, or one single
//! capture); there is no automatic retry anywhere.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("invalid date: month {month} (0-11), day {day} (1-{max_day})")]
    InvalidDate { month: u32, day: u32, max_day: u32 },

    #[error("browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("browser configuration rejected: {0}")]
    BrowserConfig(String),

    #[error("navigation to {url} did not finish within {timeout_ms}ms")]
    NavigationTimeout { url: String, timeout_ms: u64 },

    #[error("card element `{selector}` did not appear within {waited_ms}ms")]
    CardTimeout { selector: String, waited_ms: u64 },

    #[error("export frame injection produced no `{selector}` element")]
    FrameMissing { selector: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
