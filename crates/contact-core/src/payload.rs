//! The cleaned-up form data handed to a delivery sink.

use serde::{Deserialize, Serialize};

use crate::types::ContactForm;
use crate::{validate_form, ContactError};

/// Trimmed values of a valid contact form.
///
/// `phone` is empty when the visitor left it blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactPayload {
    /// Validate `form` and build the payload from its trimmed values.
    ///
    /// Fails with [`ContactError::InvalidForm`] carrying the full report
    /// when any field is invalid.
    pub fn from_form(form: &ContactForm) -> Result<Self, ContactError> {
        let report = validate_form(form);
        if !report.is_valid() {
            return Err(ContactError::InvalidForm(Box::new(report)));
        }

        Ok(Self::from_validated(form))
    }

    /// Build the payload from a form the caller has already validated.
    pub(crate) fn from_validated(form: &ContactForm) -> Self {
        let clean = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();

        Self {
            name: clean(&form.name),
            email: clean(&form.email),
            phone: clean(&form.phone),
            message: clean(&form.message),
        }
    }

    /// The phone number, or `fallback` when none was given.
    pub fn phone_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.phone.is_empty() {
            fallback
        } else {
            &self.phone
        }
    }
}
