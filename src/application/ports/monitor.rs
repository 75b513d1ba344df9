//! Foreign-process monitor port interface

use crate::domain::ReadinessSnapshot;

/// Port reading the externally owned process signals.
///
/// Pure query: implementations report state maintained by the host's own
/// process and window tracking. Operations poll it at their start and never
/// cache the result.
pub trait ProcessMonitor: Send + Sync {
    /// Current readiness signals of the foreign application.
    fn snapshot(&self) -> ReadinessSnapshot;
}
