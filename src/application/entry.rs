//! Text entry use case
//!
//! Orchestrates readiness gating, the clipboard borrow, and synthetic input
//! into the four public operations: send, paste, read, clear.
//!
//! Every operation follows the same discipline: validate, gate on readiness,
//! take the single-flight lock without queuing, then run the OS phase in the
//! fixed order save -> mutate -> inject -> restore. The OS phase executes on
//! its own tokio task so that once the clipboard has been mutated, dropping
//! the caller's future cannot abandon it unrestored.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::gesture::{self, CLIPBOARD_SYNC_SETTLE};
use crate::domain::Message;

use super::ports::{
    Clipboard, ClipboardError, ClipboardPayload, Injector, ProcessMonitor, WindowGeometry,
};

/// Errors from the text entry use case
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Clipboard operation failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Automation task failed: {0}")]
    TaskFailed(String),
}

/// How an operation concluded.
///
/// `NotReady`, `Busy` and `InvalidText` are routine, not errors: callers are
/// driving a foreign application they do not control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The full gesture sequence ran and the clipboard was restored.
    Completed,
    /// The foreign application was absent, unfocused, or not interactive.
    NotReady,
    /// Another operation holds the single-flight lock.
    Busy,
    /// The text exceeds the input field's capacity.
    InvalidText,
}

impl Outcome {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::NotReady => "not ready",
            Self::Busy => "busy",
            Self::InvalidText => "invalid text",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of the admission check every operation performs up front.
enum Admission {
    Go(OwnedMutexGuard<()>),
    Refused(Outcome),
}

/// Text entry use case.
///
/// Generic over the four ports; the clipboard and injector are shared with
/// the spawned OS phase, the monitor and geometry are consulted inline.
pub struct TextEntryUseCase<C, I, M, G>
where
    C: Clipboard + 'static,
    I: Injector + 'static,
    M: ProcessMonitor,
    G: WindowGeometry,
{
    clipboard: Arc<C>,
    injector: Arc<I>,
    monitor: M,
    geometry: G,
    // Single-flight lock: lives for the use case's whole lifetime, held per
    // operation. Contention fails fast; queued operations could inject stale
    // text into a field whose state has since changed.
    flight: Arc<Mutex<()>>,
}

impl<C, I, M, G> TextEntryUseCase<C, I, M, G>
where
    C: Clipboard + 'static,
    I: Injector + 'static,
    M: ProcessMonitor,
    G: WindowGeometry,
{
    /// Create a new use case instance
    pub fn new(clipboard: C, injector: I, monitor: M, geometry: G) -> Self {
        Self {
            clipboard: Arc::new(clipboard),
            injector: Arc::new(injector),
            monitor,
            geometry,
            flight: Arc::new(Mutex::new(())),
        }
    }

    /// Put `text` in the input field and submit it.
    pub async fn send(&self, text: &str) -> Result<Outcome, EntryError> {
        let message = match Message::new(text) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(length = e.length, "Rejected over-length text");
                return Ok(Outcome::InvalidText);
            }
        };

        let guard = match self.admit("send") {
            Admission::Go(guard) => guard,
            Admission::Refused(outcome) => return Ok(outcome),
        };

        let clipboard = Arc::clone(&self.clipboard);
        let injector = Arc::clone(&self.injector);
        let point = gesture::neutral_point(self.geometry.client_width());

        run_to_completion("send", async move {
            let _guard = guard;
            send_sequence(&clipboard, &injector, point, &message).await
        })
        .await
    }

    /// Append `text` to the input field without submitting.
    ///
    /// The current field content is read first and the combined length is
    /// validated; the injected clipboard content is the combined text, since
    /// the read leaves the field selected and the paste replaces the
    /// selection.
    pub async fn paste(&self, text: &str) -> Result<Outcome, EntryError> {
        // If the appended text alone overflows, the combination will too;
        // reject before any OS interaction.
        if let Err(e) = Message::new(text) {
            tracing::debug!(length = e.length, "Rejected over-length text");
            return Ok(Outcome::InvalidText);
        }

        let guard = match self.admit("paste") {
            Admission::Go(guard) => guard,
            Admission::Refused(outcome) => return Ok(outcome),
        };

        let clipboard = Arc::clone(&self.clipboard);
        let injector = Arc::clone(&self.injector);
        let point = gesture::neutral_point(self.geometry.client_width());
        let text = text.to_owned();

        run_to_completion("paste", async move {
            let _guard = guard;
            paste_sequence(&clipboard, &injector, point, &text).await
        })
        .await
    }

    /// Read the input field's current text.
    ///
    /// Returns an empty string when the foreign application is not ready or
    /// another operation is in flight.
    pub async fn read(&self) -> Result<String, EntryError> {
        let guard = match self.admit("read") {
            Admission::Go(guard) => guard,
            Admission::Refused(_) => return Ok(String::new()),
        };

        let clipboard = Arc::clone(&self.clipboard);
        let injector = Arc::clone(&self.injector);
        let point = gesture::neutral_point(self.geometry.client_width());

        run_to_completion("read", async move {
            let _guard = guard;
            read_sequence(&clipboard, &injector, point).await
        })
        .await
    }

    /// Empty the input field. No clipboard interaction is needed, but the
    /// focus transfer still is.
    pub async fn clear(&self) -> Result<Outcome, EntryError> {
        let guard = match self.admit("clear") {
            Admission::Go(guard) => guard,
            Admission::Refused(outcome) => return Ok(outcome),
        };

        let injector = Arc::clone(&self.injector);
        let point = gesture::neutral_point(self.geometry.client_width());

        run_to_completion("clear", async move {
            let _guard = guard;
            focus_field(&*injector, point).await;
            deliver(&*injector, &gesture::clear_field()).await;
            tracing::info!("Cleared the input field");
            Ok(Outcome::Completed)
        })
        .await
    }

    /// Gate on a fresh readiness snapshot, then take the single-flight lock
    /// without queuing.
    fn admit(&self, operation: &'static str) -> Admission {
        let snapshot = self.monitor.snapshot();
        if !snapshot.is_ready() {
            tracing::debug!(operation, ?snapshot, "Foreign application not ready");
            return Admission::Refused(Outcome::NotReady);
        }

        match Arc::clone(&self.flight).try_lock_owned() {
            Ok(guard) => Admission::Go(guard),
            Err(_) => {
                tracing::debug!(operation, "Another operation is in flight");
                Admission::Refused(Outcome::Busy)
            }
        }
    }
}

/// Run an operation's OS phase on its own task and wait for it.
///
/// The spawned task keeps running if the caller's future is dropped, which is
/// what guarantees the clipboard restore after the first mutation.
async fn run_to_completion<T: Send + 'static>(
    operation: &'static str,
    phase: impl std::future::Future<Output = Result<T, EntryError>> + Send + 'static,
) -> Result<T, EntryError> {
    let result = match tokio::spawn(phase).await {
        Ok(result) => result,
        Err(e) => Err(EntryError::TaskFailed(e.to_string())),
    };
    if let Err(e) = &result {
        tracing::warn!(operation, error = %e, "Operation aborted");
    }
    result
}

async fn send_sequence<C: Clipboard, I: Injector>(
    clipboard: &C,
    injector: &I,
    point: (i32, i32),
    message: &Message,
) -> Result<Outcome, EntryError> {
    let saved = clipboard.save().await?;

    let mutated = clipboard.set_text(message.as_str()).await;
    if mutated.is_ok() {
        focus_field(injector, point).await;
        deliver(injector, &gesture::paste()).await;
        deliver(injector, &gesture::submit()).await;
        tokio::time::sleep(CLIPBOARD_SYNC_SETTLE).await;
    }

    restore_best_effort(clipboard, saved).await;
    mutated?;

    tracing::info!(units = message.utf16_len(), "Sent text to the input field");
    Ok(Outcome::Completed)
}

async fn paste_sequence<C: Clipboard, I: Injector>(
    clipboard: &C,
    injector: &I,
    point: (i32, i32),
    appended: &str,
) -> Result<Outcome, EntryError> {
    let current = read_sequence(clipboard, injector, point).await?;

    let combined = match Message::new(format!("{current}{appended}")) {
        Ok(combined) => combined,
        Err(e) => {
            tracing::debug!(length = e.length, "Combined field text would overflow");
            return Ok(Outcome::InvalidText);
        }
    };

    let saved = clipboard.save().await?;

    let mutated = clipboard.set_text(combined.as_str()).await;
    if mutated.is_ok() {
        focus_field(injector, point).await;
        deliver(injector, &gesture::paste()).await;
        tokio::time::sleep(CLIPBOARD_SYNC_SETTLE).await;
    }

    restore_best_effort(clipboard, saved).await;
    mutated?;

    tracing::info!(units = combined.utf16_len(), "Pasted text into the input field");
    Ok(Outcome::Completed)
}

async fn read_sequence<C: Clipboard, I: Injector>(
    clipboard: &C,
    injector: &I,
    point: (i32, i32),
) -> Result<String, EntryError> {
    let saved = clipboard.save().await?;

    focus_field(injector, point).await;
    deliver(injector, &gesture::copy_all()).await;
    tokio::time::sleep(CLIPBOARD_SYNC_SETTLE).await;

    let text = match clipboard.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Could not read back the copied field text");
            String::new()
        }
    };

    restore_best_effort(clipboard, saved).await;

    Ok(text)
}

/// Transfer OS focus to the foreign window and open its input field.
async fn focus_field<I: Injector>(injector: &I, point: (i32, i32)) {
    if let Err(e) = injector.click_at(point.0, point.1).await {
        tracing::warn!(error = %e, "Focus-transfer click failed");
    }
    deliver(injector, &gesture::activate_field()).await;
}

/// Deliver a chord, logging failure. There is no confirmation channel into
/// the foreign application, so a synthesis error never aborts the operation;
/// the clipboard restore still runs.
async fn deliver<I: Injector>(injector: &I, chord: &crate::domain::KeyChord) {
    if let Err(e) = injector.send_chord(chord).await {
        tracing::warn!(error = %e, "Key chord was not fully delivered");
    }
}

/// Attempt the paired restore for a successful save. Failure is logged, not
/// propagated: the operation already did its work, and the only consequence
/// is that the clipboard may still hold automation text.
async fn restore_best_effort<C: Clipboard>(clipboard: &C, saved: ClipboardPayload) {
    if let Err(e) = clipboard.restore(saved).await {
        tracing::warn!(
            error = %e,
            "Could not restore the previous clipboard content; the clipboard may still hold automation text"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::InjectError;
    use crate::domain::{KeyChord, ReadinessSnapshot, MAX_FIELD_UNITS};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Mock implementations for testing. The integration suite in
    // tests/entry_tests.rs covers ordering and round-trips; these tests pin
    // the admission rules.

    #[derive(Default)]
    struct CountingClipboard {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Clipboard for CountingClipboard {
        async fn save(&self) -> Result<ClipboardPayload, ClipboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ClipboardPayload::Empty)
        }

        async fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn text(&self) -> Result<String, ClipboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(String::new())
        }

        async fn restore(&self, _payload: ClipboardPayload) -> Result<(), ClipboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingInjector {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Injector for CountingInjector {
        async fn click_at(&self, _x: i32, _y: i32) -> Result<(), InjectError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn send_chord(&self, _chord: &KeyChord) -> Result<(), InjectError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FixedMonitor(ReadinessSnapshot);

    impl ProcessMonitor for FixedMonitor {
        fn snapshot(&self) -> ReadinessSnapshot {
            self.0
        }
    }

    struct FixedWidth(u32);

    impl WindowGeometry for FixedWidth {
        fn client_width(&self) -> u32 {
            self.0
        }
    }

    fn use_case(
        ready: bool,
    ) -> TextEntryUseCase<Arc<CountingClipboard>, Arc<CountingInjector>, FixedMonitor, FixedWidth>
    {
        let snapshot = if ready {
            ReadinessSnapshot::ready()
        } else {
            ReadinessSnapshot::default()
        };
        TextEntryUseCase::new(
            Arc::new(CountingClipboard::default()),
            Arc::new(CountingInjector::default()),
            FixedMonitor(snapshot),
            FixedWidth(1920),
        )
    }

    #[tokio::test]
    async fn over_length_send_is_rejected_before_any_side_effect() {
        let clipboard = Arc::new(CountingClipboard::default());
        let injector = Arc::new(CountingInjector::default());
        let use_case = TextEntryUseCase::new(
            Arc::clone(&clipboard),
            Arc::clone(&injector),
            FixedMonitor(ReadinessSnapshot::ready()),
            FixedWidth(1920),
        );

        let text = "a".repeat(MAX_FIELD_UNITS);
        let outcome = use_case.send(&text).await.unwrap();

        assert_eq!(outcome, Outcome::InvalidText);
        assert_eq!(clipboard.calls.load(Ordering::SeqCst), 0);
        assert_eq!(injector.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn not_ready_operations_are_silent_no_ops() {
        let use_case = use_case(false);

        assert_eq!(use_case.send("hi").await.unwrap(), Outcome::NotReady);
        assert_eq!(use_case.paste("hi").await.unwrap(), Outcome::NotReady);
        assert_eq!(use_case.read().await.unwrap(), "");
        assert_eq!(use_case.clear().await.unwrap(), Outcome::NotReady);
    }

    #[tokio::test]
    async fn ready_send_completes() {
        let use_case = use_case(true);
        assert_eq!(use_case.send("gg").await.unwrap(), Outcome::Completed);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Completed.to_string(), "completed");
        assert_eq!(Outcome::NotReady.to_string(), "not ready");
        assert_eq!(Outcome::Busy.to_string(), "busy");
        assert_eq!(Outcome::InvalidText.to_string(), "invalid text");
    }
}
