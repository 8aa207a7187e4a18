//! `almanac-capture` — batch screenshot engine for the almanac card UI.
//!
//! Drives one headless Chrome page across a day range: navigate to the
//! export-mode URL, wait for the card to render, wrap it in a fixed-size
//! export frame, screenshot exactly that frame, and persist one PNG per
//! day. Interactive pause/resume/cancel comes in through [`CaptureControl`];
//! the keyboard listener is just one adapter feeding it.

mod batch;
mod config;
mod control;
mod error;
pub mod keyboard;
mod session;

pub use batch::{BatchSummary, run_batch, run_single};
pub use config::CaptureConfig;
pub use control::CaptureControl;
pub use error::CaptureError;
pub use session::{CARD_SELECTOR, FRAME_SELECTOR, ExportSession};
