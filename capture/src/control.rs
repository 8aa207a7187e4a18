//! Run control for the capture loop.
//!
//! Pause and cancel are orthogonal booleans, not modes: the loop reads
//! them between steps, never mid-step, so plain atomics are enough. The
//! keyboard listener is one adapter feeding this handle; an HTTP caller
//! killing the process is another.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Poll interval while paused. Cancel is re-checked every tick so a
/// cancel during a pause is honored promptly.
const PAUSE_POLL: Duration = Duration::from_millis(500);

/// Cloneable control handle shared between the capture loop and its
/// input adapters.
#[derive(Debug, Clone, Default)]
pub struct CaptureControl {
    paused: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl CaptureControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }

    /// Toggle pause, returning the new paused state.
    pub fn toggle_pause(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::Relaxed)
    }

    /// Request a stop after the current day completes. Never aborts a
    /// capture mid-step.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Block (async) while paused. Returns `true` if cancellation was
    /// requested during the wait, so the caller can exit without
    /// attempting another navigation.
    pub async fn wait_while_paused(&self) -> bool {
        while self.is_paused() {
            if self.is_cancelled() {
                return true;
            }
            tokio::time::sleep(PAUSE_POLL).await;
        }
        self.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reports_new_state() {
        let control = CaptureControl::new();
        assert!(control.toggle_pause());
        assert!(control.is_paused());
        assert!(!control.toggle_pause());
        assert!(!control.is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_during_pause_breaks_the_wait() {
        let control = CaptureControl::new();
        control.pause();

        let waiter = control.clone();
        let handle = tokio::spawn(async move { waiter.wait_while_paused().await });

        // Let the waiter observe the paused flag, then cancel without
        // ever resuming.
        tokio::time::sleep(Duration::from_millis(600)).await;
        control.cancel();
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert!(handle.await.unwrap(), "wait must report cancellation");
    }

    #[tokio::test]
    async fn unpaused_wait_is_immediate() {
        let control = CaptureControl::new();
        assert!(!control.wait_while_paused().await);
        control.cancel();
        assert!(control.wait_while_paused().await);
    }
}
