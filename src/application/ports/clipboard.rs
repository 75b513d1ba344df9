//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable after {attempts} attempts: {reason}")]
    Unavailable { attempts: u32, reason: String },

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    #[error("Clipboard worker failed: {0}")]
    TaskFailed(String),
}

/// Whatever the user had on the clipboard before an operation borrowed it.
///
/// Restoring only text would silently destroy image content, so the arbiter
/// captures whichever representable format is present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipboardPayload {
    /// The clipboard held nothing the platform adapter can represent.
    #[default]
    Empty,
    Text(String),
    Image {
        width: usize,
        height: usize,
        bytes: Vec<u8>,
    },
}

/// Port for exclusive save/set/restore of the OS clipboard.
///
/// The OS clipboard is a single global resource shared with every other
/// process on the machine; adapters retry transient open failures before
/// surfacing [`ClipboardError::Unavailable`].
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Capture the current clipboard payload.
    async fn save(&self) -> Result<ClipboardPayload, ClipboardError>;

    /// Replace the clipboard content with `text`.
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Read the clipboard's text; empty string when it holds no text payload.
    async fn text(&self) -> Result<String, ClipboardError>;

    /// Write a previously saved payload back.
    async fn restore(&self, payload: ClipboardPayload) -> Result<(), ClipboardError>;
}

/// Blanket implementation for shared clipboard types
#[async_trait]
impl<T: Clipboard + ?Sized> Clipboard for std::sync::Arc<T> {
    async fn save(&self) -> Result<ClipboardPayload, ClipboardError> {
        self.as_ref().save().await
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().set_text(text).await
    }

    async fn text(&self) -> Result<String, ClipboardError> {
        self.as_ref().text().await
    }

    async fn restore(&self, payload: ClipboardPayload) -> Result<(), ClipboardError> {
        self.as_ref().restore(payload).await
    }
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn save(&self) -> Result<ClipboardPayload, ClipboardError> {
        self.as_ref().save().await
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().set_text(text).await
    }

    async fn text(&self) -> Result<String, ClipboardError> {
        self.as_ref().text().await
    }

    async fn restore(&self, payload: ClipboardPayload) -> Result<(), ClipboardError> {
        self.as_ref().restore(payload).await
    }
}
