//! Submitting a contact form: validate, build the payload, hand it to a sink.

use serde::Serialize;

use crate::delivery::{Delivery, DeliverySink};
use crate::payload::ContactPayload;
use crate::report::FormReport;
use crate::types::{ContactForm, Field};
use crate::{validate_form, ContactError};

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Submission {
    /// At least one field is invalid; nothing was delivered.
    Rejected {
        report: FormReport,
        /// Field to focus first
        focus: Field,
    },

    /// The form was valid and the sink produced its artifact.
    Delivered {
        payload: ContactPayload,
        delivery: Delivery,
    },
}

impl Submission {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Submission::Delivered { .. })
    }
}

/// Validate `form` and, if it passes, deliver it through `sink`.
///
/// An invalid form is a normal outcome (`Submission::Rejected`), not an
/// error. Errors come only from the sink.
pub fn submit(form: &ContactForm, sink: &dyn DeliverySink) -> Result<Submission, ContactError> {
    let report = validate_form(form);

    if let Some(focus) = report.first_invalid() {
        tracing::info!(
            errors = report.errors().len(),
            focus = %focus,
            "Contact form rejected"
        );
        return Ok(Submission::Rejected { report, focus });
    }

    let payload = ContactPayload::from_validated(form);
    let delivery = sink.deliver(&payload)?;

    tracing::info!(sink = sink.name(), "Contact form delivered");

    Ok(Submission::Delivered { payload, delivery })
}
