//! Message field: required, bounded length.

use crate::messages;
use crate::types::{Field, ValidationResult};

use super::{char_len, trimmed, FieldValidator};

pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;

/// Validate the message field. Bounds apply to the trimmed length.
pub fn validate_message(value: Option<&str>) -> ValidationResult {
    let message = trimmed(value);

    if message.is_empty() {
        return ValidationResult::invalid(messages::MESSAGE_REQUIRED);
    }

    let len = char_len(message);
    if len < MESSAGE_MIN_LEN {
        return ValidationResult::invalid(messages::MESSAGE_TOO_SHORT);
    }

    if len > MESSAGE_MAX_LEN {
        return ValidationResult::invalid(messages::MESSAGE_TOO_LONG);
    }

    ValidationResult::ok()
}

pub struct MessageValidator;

impl FieldValidator for MessageValidator {
    fn field(&self) -> Field {
        Field::Message
    }

    fn validate(&self, value: Option<&str>) -> ValidationResult {
        validate_message(value)
    }
}
