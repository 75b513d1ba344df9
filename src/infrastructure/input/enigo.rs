//! Cross-platform input adapter using enigo
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{InjectError, Injector};
use crate::domain::gesture::{ChordStep, Key, KeyChord};

/// Cross-platform input adapter using enigo
pub struct EnigoInjector;

impl EnigoInjector {
    /// Create a new enigo input adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoInjector {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a gesture key onto the enigo keycode space.
fn backend_key(key: Key) -> enigo::Key {
    match key {
        Key::Control => enigo::Key::Control,
        Key::Enter => enigo::Key::Return,
        Key::Backspace => enigo::Key::Backspace,
        Key::A => enigo::Key::Unicode('a'),
        Key::C => enigo::Key::Unicode('c'),
        Key::V => enigo::Key::Unicode('v'),
    }
}

#[async_trait]
impl Injector for EnigoInjector {
    async fn click_at(&self, x: i32, y: i32) -> Result<(), InjectError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

            let mut enigo = Enigo::new(&Settings::default())
                .map_err(|e| InjectError::BackendUnavailable(e.to_string()))?;

            enigo
                .move_mouse(x, y, Coordinate::Abs)
                .map_err(|e| InjectError::SynthesisFailed(e.to_string()))?;
            enigo
                .button(Button::Left, Direction::Click)
                .map_err(|e| InjectError::SynthesisFailed(e.to_string()))
        })
        .await
        .map_err(|e| InjectError::SynthesisFailed(format!("Task join error: {e}")))?
    }

    async fn send_chord(&self, chord: &KeyChord) -> Result<(), InjectError> {
        let chord = chord.clone();

        // The whole chord runs on one blocking thread so the inter-step
        // timing is not at the mercy of the async scheduler.
        tokio::task::spawn_blocking(move || {
            use enigo::{Direction, Enigo, Keyboard, Settings};

            let mut enigo = Enigo::new(&Settings::default())
                .map_err(|e| InjectError::BackendUnavailable(e.to_string()))?;

            let fail = |e: enigo::InputError| InjectError::SynthesisFailed(e.to_string());

            for (index, step) in chord.steps().iter().enumerate() {
                if index > 0 {
                    std::thread::sleep(chord.step_gap());
                }
                match step {
                    ChordStep::Press(key) => {
                        enigo.key(backend_key(*key), Direction::Press).map_err(fail)?;
                    }
                    ChordStep::Release(key) => {
                        enigo
                            .key(backend_key(*key), Direction::Release)
                            .map_err(fail)?;
                    }
                    ChordStep::Tap(key) => {
                        enigo.key(backend_key(*key), Direction::Press).map_err(fail)?;
                        std::thread::sleep(chord.tap_hold());
                        enigo
                            .key(backend_key(*key), Direction::Release)
                            .map_err(fail)?;
                    }
                    ChordStep::Settle(pause) => std::thread::sleep(*pause),
                }
            }

            Ok(())
        })
        .await
        .map_err(|e| InjectError::SynthesisFailed(format!("Task join error: {e}")))?
    }
}
