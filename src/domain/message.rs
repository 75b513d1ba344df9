//! Validated input-field text

use std::fmt;

use super::error::TextTooLong;

/// Capacity of the foreign input field, in UTF-16 code units.
///
/// The field counts UTF-16 units rather than characters, so validation
/// counts the same way.
pub const MAX_FIELD_UNITS: usize = 200;

/// Text payload validated against the foreign input field's capacity.
///
/// Construction is the only validation point; an instance is always safe to
/// hand to the clipboard arbiter and the injector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// Validate `text` against the field capacity.
    pub fn new(text: impl Into<String>) -> Result<Self, TextTooLong> {
        let text = text.into();
        let length = text.encode_utf16().count();
        if length >= MAX_FIELD_UNITS {
            return Err(TextTooLong { length });
        }
        Ok(Self(text))
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in UTF-16 code units, the unit the field caps on.
    pub fn utf16_len(&self) -> usize {
        self.0.encode_utf16().count()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_text() {
        let message = Message::new("hello").unwrap();
        assert_eq!(message.as_str(), "hello");
        assert_eq!(message.utf16_len(), 5);
    }

    #[test]
    fn accepts_empty_text() {
        let message = Message::new("").unwrap();
        assert_eq!(message.utf16_len(), 0);
    }

    #[test]
    fn accepts_text_just_under_the_cap() {
        let text = "a".repeat(MAX_FIELD_UNITS - 1);
        assert!(Message::new(text).is_ok());
    }

    #[test]
    fn rejects_text_at_the_cap() {
        let text = "a".repeat(MAX_FIELD_UNITS);
        let err = Message::new(text).unwrap_err();
        assert_eq!(err.length, MAX_FIELD_UNITS);
    }

    #[test]
    fn counts_utf16_units_not_chars() {
        // Each emoji is one char but two UTF-16 units.
        let text = "😀".repeat(100);
        assert_eq!(text.chars().count(), 100);
        let err = Message::new(text).unwrap_err();
        assert_eq!(err.length, 200);
    }

    #[test]
    fn error_display_names_the_limit() {
        let err = Message::new("a".repeat(300)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("200"));
    }
}
