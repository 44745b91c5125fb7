//! Name field: required, letters and spaces only.

use crate::messages;
use crate::patterns;
use crate::types::{Field, ValidationResult};

use super::{char_len, trimmed, FieldValidator};

/// Minimum trimmed length of a name.
pub const NAME_MIN_LEN: usize = 2;

/// Maximum trimmed length of a name.
pub const NAME_MAX_LEN: usize = 50;

/// Validate the name field.
///
/// Checks, in order: present, at least two characters once trimmed, and
/// made only of letters and spaces (2 to 50 characters). A name longer than
/// 50 characters fails with the letters-and-spaces message.
pub fn validate_name(value: Option<&str>) -> ValidationResult {
    let name = trimmed(value);

    if name.is_empty() {
        return ValidationResult::invalid(messages::NAME_REQUIRED);
    }

    if char_len(name) < NAME_MIN_LEN {
        return ValidationResult::invalid(messages::NAME_TOO_SHORT);
    }

    if char_len(name) > NAME_MAX_LEN || !patterns::is_name(name) {
        return ValidationResult::invalid(messages::NAME_INVALID_CHARACTERS);
    }

    ValidationResult::ok()
}

pub struct NameValidator;

impl FieldValidator for NameValidator {
    fn field(&self) -> Field {
        Field::Name
    }

    fn validate(&self, value: Option<&str>) -> ValidationResult {
        validate_name(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required() {
        assert_eq!(validate_name(Some("")).message, messages::NAME_REQUIRED);
        assert_eq!(validate_name(None).message, messages::NAME_REQUIRED);
        assert_eq!(validate_name(Some(" \t ")).message, messages::NAME_REQUIRED);
    }

    #[test]
    fn test_too_short() {
        let result = validate_name(Some("A"));
        assert!(!result.valid);
        assert_eq!(result.message, messages::NAME_TOO_SHORT);

        // Surrounding whitespace does not count towards the length
        assert_eq!(validate_name(Some("  A  ")).message, messages::NAME_TOO_SHORT);
    }

    #[test]
    fn test_digits_rejected() {
        let result = validate_name(Some("John123"));
        assert!(!result.valid);
        assert_eq!(result.message, messages::NAME_INVALID_CHARACTERS);
    }

    #[test]
    fn test_accented_names_accepted() {
        for name in ["José", "María Ñúñez", "Ángel Ríos", "Lú"] {
            assert!(validate_name(Some(name)).valid, "{name}");
        }
    }

    #[test]
    fn test_marks_without_letter_rejected() {
        for name in ["\u{301}\u{301}\u{301}", "\u{20DD}\u{20DD}", "Ana \u{301}"] {
            let result = validate_name(Some(name));
            assert!(!result.valid, "{name:?}");
            assert_eq!(result.message, messages::NAME_INVALID_CHARACTERS);
        }
    }

    #[test]
    fn test_decomposed_accents_accepted() {
        assert!(validate_name(Some("Jose\u{301} Nu\u{303}n\u{303}ez")).valid);
    }

    #[test]
    fn test_length_limit() {
        assert!(validate_name(Some("a".repeat(50).as_str())).valid);
        assert_eq!(
            validate_name(Some("a".repeat(51).as_str())).message,
            messages::NAME_INVALID_CHARACTERS
        );
    }

    proptest! {
        #[test]
        fn prop_letters_and_spaces_accepted(
            name in "[a-zA-ZáéíóúÁÉÍÓÚñÑ][a-zA-ZáéíóúÁÉÍÓÚñÑ ]{0,48}[a-zA-ZáéíóúÁÉÍÓÚñÑ]"
        ) {
            prop_assert!(validate_name(Some(name.as_str())).valid);
        }

        #[test]
        fn prop_idempotent(name in ".*") {
            prop_assert_eq!(validate_name(Some(name.as_str())), validate_name(Some(name.as_str())));
        }
    }
}
