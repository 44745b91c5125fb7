//! Whole-form report: aggregates per-field results.
//!
//! The aggregate rule is strict: the form is valid only when every field is
//! valid. Errors are always listed in form order, so the first one is the
//! field a UI should focus.

use serde::{Deserialize, Serialize};

use crate::types::{Field, ValidationResult};

/// One invalid field and why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Validation results for every field of the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormReport {
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub phone: ValidationResult,
    pub message: ValidationResult,
}

impl FormReport {
    /// True iff every field is valid.
    pub fn is_valid(&self) -> bool {
        self.iter().all(|(_, result)| result.valid)
    }

    /// Result for a single field.
    pub fn result(&self, field: Field) -> &ValidationResult {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// All results in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationResult)> {
        Field::ALL.into_iter().map(move |field| (field, self.result(field)))
    }

    /// Invalid fields with their messages, in form order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.iter()
            .filter(|(_, result)| !result.valid)
            .map(|(field, result)| FieldError {
                field,
                message: result.message.clone(),
            })
            .collect()
    }

    /// The first invalid field, if any.
    pub fn first_invalid(&self) -> Option<Field> {
        self.iter()
            .find(|(_, result)| !result.valid)
            .map(|(field, _)| field)
    }
}
