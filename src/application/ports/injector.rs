//! Input injection port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::KeyChord;

/// Injection errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InjectError {
    #[error("Input backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to synthesize input: {0}")]
    SynthesisFailed(String),
}

/// Port for low-level input synthesis.
///
/// Synthesis is fire-and-forget: no channel confirms that the foreign
/// application observed a click or key event. Delivery is governed entirely
/// by the timing carried in [`crate::domain::gesture`].
#[async_trait]
pub trait Injector: Send + Sync {
    /// Left-click at absolute screen coordinates.
    async fn click_at(&self, x: i32, y: i32) -> Result<(), InjectError>;

    /// Deliver one key chord, honoring its step timing.
    async fn send_chord(&self, chord: &KeyChord) -> Result<(), InjectError>;
}

/// Blanket implementation for shared injector types
#[async_trait]
impl<T: Injector + ?Sized> Injector for std::sync::Arc<T> {
    async fn click_at(&self, x: i32, y: i32) -> Result<(), InjectError> {
        self.as_ref().click_at(x, y).await
    }

    async fn send_chord(&self, chord: &KeyChord) -> Result<(), InjectError> {
        self.as_ref().send_chord(chord).await
    }
}

/// Blanket implementation for boxed injector types
#[async_trait]
impl Injector for Box<dyn Injector> {
    async fn click_at(&self, x: i32, y: i32) -> Result<(), InjectError> {
        self.as_ref().click_at(x, y).await
    }

    async fn send_chord(&self, chord: &KeyChord) -> Result<(), InjectError> {
        self.as_ref().send_chord(chord).await
    }
}
