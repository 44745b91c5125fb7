//! Field validators.
//!
//! One validator per form field. Each is a pure function of its input:
//! no state, no I/O, and `None` behaves exactly like `""`.

mod email;
mod message;
mod name;
mod phone;

pub use email::{validate_email, EmailValidator};
pub use message::{validate_message, MessageValidator, MESSAGE_MAX_LEN, MESSAGE_MIN_LEN};
pub use name::{validate_name, NameValidator, NAME_MAX_LEN, NAME_MIN_LEN};
pub use phone::{validate_phone, PhoneValidator};

use crate::types::{Field, ValidationResult};

/// A validator for a single form field.
pub trait FieldValidator: Send + Sync {
    /// The field this validator checks.
    fn field(&self) -> Field;

    /// Validate a raw value.
    fn validate(&self, value: Option<&str>) -> ValidationResult;
}

static NAME: NameValidator = NameValidator;
static EMAIL: EmailValidator = EmailValidator;
static PHONE: PhoneValidator = PhoneValidator;
static MESSAGE: MessageValidator = MessageValidator;

/// The validator responsible for `field`.
pub fn validator_for(field: Field) -> &'static dyn FieldValidator {
    match field {
        Field::Name => &NAME,
        Field::Email => &EMAIL,
        Field::Phone => &PHONE,
        Field::Message => &MESSAGE,
    }
}

/// Trimmed view of an optional raw value.
pub(crate) fn trimmed(value: Option<&str>) -> &str {
    value.unwrap_or_default().trim()
}

/// Length in characters, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_for_matches_field() {
        for field in Field::ALL {
            assert_eq!(validator_for(field).field(), field);
        }
    }

    #[test]
    fn test_none_behaves_like_empty() {
        for field in Field::ALL {
            let validator = validator_for(field);
            assert_eq!(validator.validate(None), validator.validate(Some("")));
        }
    }

    #[test]
    fn test_only_phone_accepts_blank() {
        for field in Field::ALL {
            let result = validator_for(field).validate(Some("   "));
            assert_eq!(result.valid, !field.is_required(), "field {}", field);
        }
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("ñandú"), 5);
        assert_eq!(trimmed(Some("  hola \n")), "hola");
        assert_eq!(trimmed(None), "");
    }
}
