//! Synthetic input gestures and their timing
//!
//! The foreign application polls input on its own loop, so every delay here
//! is empirical timing it needs to observe an event, not business logic.
//! None of these constants are exposed through configuration.

use std::time::Duration;

/// Keys the gestures use. Injector adapters map these to backend keycodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Control,
    Enter,
    Backspace,
    A,
    C,
    V,
}

/// One step of a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordStep {
    /// Key down, held until a matching `Release`.
    Press(Key),
    /// Key up.
    Release(Key),
    /// Key down followed by key up after the chord's tap hold.
    Tap(Key),
    /// Pause before the next step.
    Settle(Duration),
}

/// Hold applied to a tapped key so its down and up events land in different
/// input polls.
pub const TAP_HOLD: Duration = Duration::from_millis(8);

/// Gap between consecutive chord steps.
pub const STEP_GAP: Duration = Duration::from_millis(10);

/// Delay after striking the keys of a modifier combo, before the modifier is
/// released. Released earlier, the foreign application observes a bare
/// keypress instead of the combo.
pub const MODIFIER_SETTLE: Duration = Duration::from_millis(50);

/// Delay between a copy/paste chord and touching the clipboard again. The
/// foreign application services clipboard I/O on its own message loop, and
/// swapping the clipboard back immediately races it.
pub const CLIPBOARD_SYNC_SETTLE: Duration = Duration::from_millis(100);

/// An ordered key gesture delivered as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    steps: Vec<ChordStep>,
    tap_hold: Duration,
    step_gap: Duration,
}

impl KeyChord {
    fn from_steps(steps: Vec<ChordStep>) -> Self {
        Self {
            steps,
            tap_hold: TAP_HOLD,
            step_gap: STEP_GAP,
        }
    }

    /// Strike a single key.
    pub fn tap(key: Key) -> Self {
        Self::from_steps(vec![ChordStep::Tap(key)])
    }

    /// Hold `modifier`, tap `keys` in order, settle, release the modifier.
    pub fn combo(modifier: Key, keys: &[Key]) -> Self {
        let mut steps = vec![ChordStep::Press(modifier)];
        steps.extend(keys.iter().copied().map(ChordStep::Tap));
        steps.push(ChordStep::Settle(MODIFIER_SETTLE));
        steps.push(ChordStep::Release(modifier));
        Self::from_steps(steps)
    }

    /// Like [`KeyChord::combo`], with a trailing tap after the modifier is
    /// released.
    pub fn combo_then(modifier: Key, keys: &[Key], trailing: Key) -> Self {
        let mut chord = Self::combo(modifier, keys);
        chord.steps.push(ChordStep::Tap(trailing));
        chord
    }

    /// The chord's steps in delivery order.
    pub fn steps(&self) -> &[ChordStep] {
        &self.steps
    }

    /// How long a tapped key is held down.
    pub fn tap_hold(&self) -> Duration {
        self.tap_hold
    }

    /// Pause between consecutive steps.
    pub fn step_gap(&self) -> Duration {
        self.step_gap
    }
}

/// Gesture opening the foreign input field once focus has been transferred
/// by the neutral click.
pub fn activate_field() -> KeyChord {
    KeyChord::tap(Key::Enter)
}

/// Ctrl+V.
pub fn paste() -> KeyChord {
    KeyChord::combo(Key::Control, &[Key::V])
}

/// Ctrl+A, Ctrl+C: select the field content and copy it.
pub fn copy_all() -> KeyChord {
    KeyChord::combo(Key::Control, &[Key::A, Key::C])
}

/// Ctrl+A, then Backspace once the modifier is up: empty the field.
pub fn clear_field() -> KeyChord {
    KeyChord::combo_then(Key::Control, &[Key::A], Key::Backspace)
}

/// Enter, submitting the field content.
pub fn submit() -> KeyChord {
    KeyChord::tap(Key::Enter)
}

/// Point inside the foreign window that transfers focus without hitting any
/// control: horizontal center of the client area, top edge.
pub fn neutral_point(client_width: u32) -> (i32, i32) {
    ((client_width / 2) as i32, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_is_a_single_step() {
        let chord = KeyChord::tap(Key::Enter);
        assert_eq!(chord.steps(), &[ChordStep::Tap(Key::Enter)]);
    }

    #[test]
    fn combo_settles_before_releasing_the_modifier() {
        let chord = KeyChord::combo(Key::Control, &[Key::V]);
        assert_eq!(
            chord.steps(),
            &[
                ChordStep::Press(Key::Control),
                ChordStep::Tap(Key::V),
                ChordStep::Settle(MODIFIER_SETTLE),
                ChordStep::Release(Key::Control),
            ]
        );
    }

    #[test]
    fn copy_all_taps_both_keys_under_one_hold() {
        let chord = copy_all();
        assert_eq!(
            chord.steps(),
            &[
                ChordStep::Press(Key::Control),
                ChordStep::Tap(Key::A),
                ChordStep::Tap(Key::C),
                ChordStep::Settle(MODIFIER_SETTLE),
                ChordStep::Release(Key::Control),
            ]
        );
    }

    #[test]
    fn clear_taps_backspace_after_the_modifier_is_up() {
        let chord = clear_field();
        assert_eq!(
            chord.steps().last(),
            Some(&ChordStep::Tap(Key::Backspace))
        );
        let release_at = chord
            .steps()
            .iter()
            .position(|s| *s == ChordStep::Release(Key::Control))
            .unwrap();
        assert_eq!(release_at, chord.steps().len() - 2);
    }

    #[test]
    fn neutral_point_is_top_center() {
        assert_eq!(neutral_point(1920), (960, 0));
        assert_eq!(neutral_point(1), (0, 0));
    }

    #[test]
    fn submit_and_activation_use_enter() {
        assert_eq!(submit(), KeyChord::tap(Key::Enter));
        assert_eq!(activate_field(), KeyChord::tap(Key::Enter));
    }
}
