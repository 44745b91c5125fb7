//! Core value types shared by validators, the form report and delivery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::ContactError;

/// Outcome of validating a single field.
///
/// `message` is empty when `valid` is true and holds a user-facing
/// (Spanish) explanation otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// A passing result with an empty message.
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// The fields of the contact form, in the order they appear on the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Identifier used by the form controls and the JSON payload.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Email => "Email",
            Field::Phone => "Teléfono",
            Field::Message => "Mensaje",
        }
    }

    /// Phone is the only optional field.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raw values as read from the form controls.
///
/// Missing and empty values are equivalent for every validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone,
            message: Some(message.into()),
        }
    }

    /// Raw value of `field`, if one was provided.
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    /// Parse a form from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ContactError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a form from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ContactError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a form from a file, choosing the format by extension.
    /// Anything other than `.json` is read as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContactError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validation_result_constructors() {
        let ok = ValidationResult::ok();
        assert!(ok.is_valid());
        assert!(ok.message.is_empty());

        let bad = ValidationResult::invalid("El email es obligatorio");
        assert!(!bad.is_valid());
        assert_eq!(bad.message, "El email es obligatorio");
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(Field::Phone.id(), "phone");
        assert_eq!(Field::Phone.label(), "Teléfono");
        assert!(!Field::Phone.is_required());
        assert!(Field::ALL
            .iter()
            .filter(|f| **f != Field::Phone)
            .all(|f| f.is_required()));
    }

    #[test]
    fn test_form_from_yaml_with_missing_fields() {
        let form = ContactForm::from_yaml(
            r#"
name: "María"
email: "maria@example.com"
"#,
        )
        .unwrap();

        assert_eq!(form.value(Field::Name), Some("María"));
        assert_eq!(form.value(Field::Phone), None);
        assert_eq!(form.value(Field::Message), None);
    }

    #[test]
    fn test_form_from_json() {
        let form = ContactForm::from_json(
            r#"{"name": "Ana", "email": "ana@example.com", "phone": null, "message": "Hola"}"#,
        )
        .unwrap();
        assert_eq!(form.email.as_deref(), Some("ana@example.com"));
        assert!(form.phone.is_none());
    }

    #[test]
    fn test_form_from_invalid_json() {
        let result = ContactForm::from_json("{ not json");
        assert!(matches!(result, Err(ContactError::JsonError(_))));
    }

    #[test]
    fn test_form_from_file_by_extension() {
        let dir = TempDir::new().unwrap();

        let json_path = dir.path().join("form.json");
        fs::write(&json_path, r#"{"name": "Ana", "email": "ana@example.com"}"#).unwrap();
        let form = ContactForm::from_file(&json_path).unwrap();
        assert_eq!(form.value(Field::Name), Some("Ana"));

        let yaml_path = dir.path().join("form.yml");
        fs::write(&yaml_path, "name: Luis\nmessage: Hola, buenas tardes.\n").unwrap();
        let form = ContactForm::from_file(&yaml_path).unwrap();
        assert_eq!(form.value(Field::Name), Some("Luis"));
        assert_eq!(form.value(Field::Message), Some("Hola, buenas tardes."));

        let wrong_path = dir.path().join("form.json");
        fs::write(&wrong_path, "name: Luis\n").unwrap();
        assert!(matches!(
            ContactForm::from_file(&wrong_path),
            Err(ContactError::JsonError(_))
        ));
    }
}
