//! Phone field: optional.

use crate::messages;
use crate::patterns;
use crate::types::{Field, ValidationResult};

use super::{trimmed, FieldValidator};

/// Validate the phone field. Blank input is always valid.
pub fn validate_phone(value: Option<&str>) -> ValidationResult {
    if trimmed(value).is_empty() {
        return ValidationResult::ok();
    }

    if !patterns::is_phone(value.unwrap_or_default()) {
        return ValidationResult::invalid(messages::PHONE_INVALID_FORMAT);
    }

    ValidationResult::ok()
}

pub struct PhoneValidator;

impl FieldValidator for PhoneValidator {
    fn field(&self) -> Field {
        Field::Phone
    }

    fn validate(&self, value: Option<&str>) -> ValidationResult {
        validate_phone(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_optional() {
        assert!(validate_phone(None).valid);
        assert!(validate_phone(Some("")).valid);
        assert!(validate_phone(Some("   ")).valid);
    }

    #[test]
    fn test_formats() {
        assert!(validate_phone(Some("+1 (849) 447-0901")).valid);
        assert!(validate_phone(Some("809-555-1234")).valid);

        let result = validate_phone(Some("call me"));
        assert!(!result.valid);
        assert_eq!(result.message, messages::PHONE_INVALID_FORMAT);
        assert!(!validate_phone(Some("ext. 12")).valid);
    }

    proptest! {
        #[test]
        fn prop_phone_characters_accepted(phone in "[0-9+()\\-][0-9 +()\\-]{0,20}") {
            prop_assert!(validate_phone(Some(phone.as_str())).valid);
        }

        #[test]
        fn prop_idempotent(phone in ".*") {
            prop_assert_eq!(validate_phone(Some(phone.as_str())), validate_phone(Some(phone.as_str())));
        }
    }
}
