//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::borrow::Cow;
use std::thread;
use std::time::Duration;

use arboard::ImageData;
use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError, ClipboardPayload};

/// Attempts made to open the OS clipboard before giving up. Another process
/// holding the clipboard open is a transient condition.
pub const OPEN_ATTEMPTS: u32 = 4;

/// Pause between open attempts.
pub const OPEN_BACKOFF: Duration = Duration::from_millis(25);

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an arboard handle, retrying while another process holds the
/// clipboard.
fn open_with_retry() -> Result<arboard::Clipboard, ClipboardError> {
    let mut last_error = String::new();
    for attempt in 1..=OPEN_ATTEMPTS {
        match arboard::Clipboard::new() {
            Ok(clipboard) => return Ok(clipboard),
            Err(e) => {
                last_error = e.to_string();
                tracing::debug!(attempt, error = %last_error, "Clipboard open failed");
                if attempt < OPEN_ATTEMPTS {
                    thread::sleep(OPEN_BACKOFF);
                }
            }
        }
    }
    Err(ClipboardError::Unavailable {
        attempts: OPEN_ATTEMPTS,
        reason: last_error,
    })
}

fn join_error(e: tokio::task::JoinError) -> ClipboardError {
    ClipboardError::TaskFailed(format!("Task join error: {e}"))
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn save(&self) -> Result<ClipboardPayload, ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            let mut clipboard = open_with_retry()?;
            if let Ok(text) = clipboard.get_text() {
                return Ok(ClipboardPayload::Text(text));
            }
            if let Ok(image) = clipboard.get_image() {
                return Ok(ClipboardPayload::Image {
                    width: image.width,
                    height: image.height,
                    bytes: image.bytes.into_owned(),
                });
            }
            Ok(ClipboardPayload::Empty)
        })
        .await
        .map_err(join_error)?
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = open_with_retry()?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(join_error)?
    }

    async fn text(&self) -> Result<String, ClipboardError> {
        tokio::task::spawn_blocking(|| {
            let mut clipboard = open_with_retry()?;
            // Empty or non-text payloads read as empty text.
            Ok(clipboard.get_text().unwrap_or_default())
        })
        .await
        .map_err(join_error)?
    }

    async fn restore(&self, payload: ClipboardPayload) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || {
            let mut clipboard = open_with_retry()?;
            match payload {
                // The user had nothing on the clipboard; leaving automation
                // text behind would not be a faithful restore.
                ClipboardPayload::Empty => clipboard
                    .clear()
                    .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
                ClipboardPayload::Text(text) => clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
                ClipboardPayload::Image {
                    width,
                    height,
                    bytes,
                } => clipboard
                    .set_image(ImageData {
                        width,
                        height,
                        bytes: Cow::Owned(bytes),
                    })
                    .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            }
        })
        .await
        .map_err(join_error)?
    }
}
