//! No-op input adapter
//!
//! Logs gestures instead of synthesizing them. Used for dry runs and when no
//! injection backend is wanted.

use async_trait::async_trait;

use crate::application::ports::{InjectError, Injector};
use crate::domain::KeyChord;

/// No-op input adapter that logs instead of injecting
pub struct NoOpInjector;

impl NoOpInjector {
    /// Create a new no-op input adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Injector for NoOpInjector {
    async fn click_at(&self, x: i32, y: i32) -> Result<(), InjectError> {
        tracing::info!(x, y, "Dry run: left click");
        Ok(())
    }

    async fn send_chord(&self, chord: &KeyChord) -> Result<(), InjectError> {
        tracing::info!(steps = ?chord.steps(), "Dry run: key chord");
        Ok(())
    }
}
