//! Shared-flag process monitor adapter
//!
//! Holds the three readiness signals as atomics that the embedding host
//! flips from its own process and window tracking, and republishes every
//! change on a watch channel. Operations always poll [`ProcessMonitor::snapshot`]
//! directly; the channel exists for diagnostics and UI, not correctness.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::application::ports::ProcessMonitor;
use crate::domain::ReadinessSnapshot;

/// Process monitor backed by host-maintained flags
pub struct SharedProcessMonitor {
    running: AtomicBool,
    focused: AtomicBool,
    interactive: AtomicBool,
    notify: watch::Sender<ReadinessSnapshot>,
}

impl SharedProcessMonitor {
    /// Create a monitor with every signal unset
    pub fn new() -> Self {
        let (notify, _) = watch::channel(ReadinessSnapshot::default());
        Self {
            running: AtomicBool::new(false),
            focused: AtomicBool::new(false),
            interactive: AtomicBool::new(false),
            notify,
        }
    }

    /// Monitor reporting every signal as already satisfied.
    ///
    /// Used by the CLI, where the operator owns process and focus state;
    /// embedding hosts should maintain the flags themselves instead.
    pub fn assume_ready() -> Self {
        let monitor = Self::new();
        monitor.set_running(true);
        monitor.set_focused(true);
        monitor.set_interactive(true);
        monitor
    }

    /// Record whether the foreign process exists
    pub fn set_running(&self, value: bool) {
        self.running.store(value, Ordering::SeqCst);
        self.publish();
    }

    /// Record whether the foreign window holds input focus
    pub fn set_focused(&self, value: bool) {
        self.focused.store(value, Ordering::SeqCst);
        self.publish();
    }

    /// Record whether the foreign application is in an interactive state
    pub fn set_interactive(&self, value: bool) {
        self.interactive.store(value, Ordering::SeqCst);
        self.publish();
    }

    /// Subscribe to readiness changes (diagnostics only)
    pub fn subscribe(&self) -> watch::Receiver<ReadinessSnapshot> {
        self.notify.subscribe()
    }

    fn publish(&self) {
        self.notify.send_replace(self.current());
    }

    fn current(&self) -> ReadinessSnapshot {
        ReadinessSnapshot {
            running: self.running.load(Ordering::SeqCst),
            focused: self.focused.load(Ordering::SeqCst),
            interactive: self.interactive.load(Ordering::SeqCst),
        }
    }
}

impl Default for SharedProcessMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessMonitor for SharedProcessMonitor {
    fn snapshot(&self) -> ReadinessSnapshot {
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_monitor_is_not_ready() {
        let monitor = SharedProcessMonitor::new();
        assert!(!monitor.snapshot().is_ready());
    }

    #[test]
    fn assume_ready_reports_all_signals() {
        let monitor = SharedProcessMonitor::assume_ready();
        assert!(monitor.snapshot().is_ready());
    }

    #[test]
    fn losing_one_signal_drops_readiness() {
        let monitor = SharedProcessMonitor::assume_ready();
        monitor.set_focused(false);
        assert!(!monitor.snapshot().is_ready());
        assert!(monitor.snapshot().running);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let monitor = SharedProcessMonitor::new();
        let mut receiver = monitor.subscribe();

        monitor.set_running(true);
        monitor.set_focused(true);
        monitor.set_interactive(true);

        receiver.changed().await.unwrap();
        assert!(receiver.borrow().is_ready());
    }
}
