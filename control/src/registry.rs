//! Single-run registry.
//!
//! At most one batch run may be active at a time. The registry holds the
//! one child handle behind a mutex; start and stop are atomic against it,
//! so a second start while one is active is rejected, never queued.

use std::process::{Child, Command};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Idle,
}

#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("a batch run is already active")]
    AlreadyRunning,

    #[error("failed to spawn batch process: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Tracks the single active batch child process.
#[derive(Debug, Default)]
pub struct RunRegistry {
    active: Mutex<Option<Child>>,
}

impl RunRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Child>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reap the child if it has exited. Holds the lock the caller passes in.
    fn reap(slot: &mut Option<Child>) {
        if let Some(child) = slot.as_mut()
            && matches!(child.try_wait(), Ok(Some(_)))
        {
            *slot = None;
        }
    }

    /// Spawn `command` as the active run. Fails with `AlreadyRunning` if a
    /// live child is registered. A spawn failure leaves the slot empty so
    /// a later start is not blocked.
    pub fn start(&self, mut command: Command) -> Result<u32, StartError> {
        let mut slot = self.slot();
        Self::reap(&mut slot);
        if slot.is_some() {
            return Err(StartError::AlreadyRunning);
        }

        let child = command.spawn()?;
        let pid = child.id();
        *slot = Some(child);
        Ok(pid)
    }

    /// Kill and reap the active run. Returns `false` when none was active
    /// (still a success for callers).
    pub fn stop(&self) -> bool {
        let mut slot = self.slot();
        let Some(mut child) = slot.take() else {
            return false;
        };
        if let Err(e) = child.kill() {
            tracing::warn!("kill batch child failed: {e}");
        }
        let _ = child.wait();
        true
    }

    pub fn status(&self) -> RunStatus {
        let mut slot = self.slot();
        Self::reap(&mut slot);
        if slot.is_some() {
            RunStatus::Running
        } else {
            RunStatus::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleep_command() -> Command {
        let mut cmd = Command::new("sleep");
        cmd.arg("30");
        cmd
    }

    #[test]
    fn start_rejects_second_run() {
        let registry = RunRegistry::new();
        registry.start(sleep_command()).unwrap();
        assert_eq!(registry.status(), RunStatus::Running);

        let second = registry.start(sleep_command());
        assert!(matches!(second, Err(StartError::AlreadyRunning)));

        assert!(registry.stop());
        assert_eq!(registry.status(), RunStatus::Idle);
    }

    #[test]
    fn stop_without_run_is_noop() {
        let registry = RunRegistry::new();
        assert!(!registry.stop());
        assert_eq!(registry.status(), RunStatus::Idle);
    }

    #[test]
    fn finished_child_is_reaped_on_start() {
        let registry = RunRegistry::new();
        registry.start(Command::new("true")).unwrap();

        // Give the child a moment to exit, then a new start must succeed.
        std::thread::sleep(std::time::Duration::from_millis(200));
        registry.start(sleep_command()).unwrap();
        assert!(registry.stop());
    }

    #[test]
    fn spawn_failure_leaves_registry_usable() {
        let registry = RunRegistry::new();
        let result = registry.start(Command::new("/nonexistent/almanac-batch"));
        assert!(matches!(result, Err(StartError::Spawn(_))));

        registry.start(sleep_command()).unwrap();
        assert!(registry.stop());
    }
}
