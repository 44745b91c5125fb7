//! # contact-core
//!
//! Deterministic validation for the boutique's contact form.
//!
//! This crate answers, for a set of raw form values:
//! - Is each field acceptable, and if not, what should the visitor be told?
//! - Is the whole form ready to send?
//! - What exactly gets sent, and where?
//!
//! ## Key Guarantees
//!
//! 1. **Pure**: validators hold no state and do no I/O
//! 2. **Total**: missing values behave like empty strings, nothing panics
//! 3. **Strict aggregate**: a form is valid only if every field is
//! 4. **No network**: delivery sinks build links and requests, callers send them
//!
//! ## Example
//!
//! ```rust
//! use contact_core::{validate_form, ContactForm, Field};
//!
//! let form = ContactForm::new("A", "ana@example.com", None, "Hola, buenas tardes.");
//! let report = validate_form(&form);
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.first_invalid(), Some(Field::Name));
//! ```

pub mod config;
pub mod delivery;
pub mod messages;
pub mod patterns;
pub mod payload;
pub mod report;
pub mod submission;
pub mod types;
pub mod validators;

// Re-export main types at crate root
pub use config::{ConfigError, ContactConfig};
pub use delivery::{Delivery, DeliveryError, DeliverySink, FormBackendSink, WhatsAppSink};
pub use payload::ContactPayload;
pub use report::{FieldError, FormReport};
pub use submission::{submit, Submission};
pub use types::{ContactForm, Field, ValidationResult};
pub use validators::{
    validate_email, validate_message, validate_name, validate_phone, validator_for,
    FieldValidator,
};

use thiserror::Error;

/// Errors that can occur while loading or submitting a form.
///
/// Invalid field values are not errors; they are reported through
/// [`ValidationResult`] and [`FormReport`].
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Failed to read form file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Form has {} invalid field(s)", .0.errors().len())]
    InvalidForm(Box<FormReport>),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Validate every field of a contact form.
///
/// All four validators always run, so the report lists every problem at
/// once rather than stopping at the first.
pub fn validate_form(form: &ContactForm) -> FormReport {
    let check = |field: Field| {
        let result = validator_for(field).validate(form.value(field));
        if !result.valid {
            tracing::debug!(field = %field, reason = %result.message, "Field failed validation");
        }
        result
    };

    FormReport {
        name: check(Field::Name),
        email: check(Field::Email),
        phone: check(Field::Phone),
        message: check(Field::Message),
    }
}
