//! Domain error types

use thiserror::Error;

use super::message::MAX_FIELD_UNITS;

/// Error when text does not fit the foreign input field
#[derive(Debug, Clone, Error)]
#[error("Text is {length} UTF-16 units long; the input field accepts fewer than {max}", max = MAX_FIELD_UNITS)]
pub struct TextTooLong {
    pub length: usize,
}
