//! In-memory clipboard adapter
//!
//! Backs dry runs and tests; holds the payload in process memory and never
//! touches the OS clipboard.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError, ClipboardPayload};

/// In-memory clipboard adapter
pub struct MemoryClipboard {
    payload: Mutex<ClipboardPayload>,
}

impl MemoryClipboard {
    /// Create an empty in-memory clipboard
    pub fn new() -> Self {
        Self {
            payload: Mutex::new(ClipboardPayload::Empty),
        }
    }

    /// Create an in-memory clipboard preloaded with text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(ClipboardPayload::Text(text.into())),
        }
    }

    /// Current payload, for assertions
    pub fn payload(&self) -> ClipboardPayload {
        self.payload.lock().unwrap().clone()
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn save(&self) -> Result<ClipboardPayload, ClipboardError> {
        Ok(self.payload())
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.payload.lock().unwrap() = ClipboardPayload::Text(text.to_owned());
        Ok(())
    }

    async fn text(&self) -> Result<String, ClipboardError> {
        match &*self.payload.lock().unwrap() {
            ClipboardPayload::Text(text) => Ok(text.clone()),
            _ => Ok(String::new()),
        }
    }

    async fn restore(&self, payload: ClipboardPayload) -> Result<(), ClipboardError> {
        *self.payload.lock().unwrap() = payload;
        Ok(())
    }
}
