//! Email field: required, permissive `x@y.z` shape.

use crate::messages;
use crate::patterns;
use crate::types::{Field, ValidationResult};

use super::{trimmed, FieldValidator};

/// Validate the email field.
///
/// The pattern is matched against the raw value, so leading or trailing
/// whitespace makes the address invalid.
pub fn validate_email(value: Option<&str>) -> ValidationResult {
    if trimmed(value).is_empty() {
        return ValidationResult::invalid(messages::EMAIL_REQUIRED);
    }

    if !patterns::is_email(value.unwrap_or_default()) {
        return ValidationResult::invalid(messages::EMAIL_INVALID_FORMAT);
    }

    ValidationResult::ok()
}

pub struct EmailValidator;

impl FieldValidator for EmailValidator {
    fn field(&self) -> Field {
        Field::Email
    }

    fn validate(&self, value: Option<&str>) -> ValidationResult {
        validate_email(value)
    }
}
