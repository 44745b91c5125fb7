//! Delivery sinks.
//!
//! A sink turns a valid [`ContactPayload`] into the artifact an external
//! collaborator acts on: a pre-filled messaging link to open, or a request
//! to post to a form backend. Sinks never perform network I/O themselves.

mod form_backend;
mod whatsapp;

pub use form_backend::FormBackendSink;
pub use whatsapp::{render_whatsapp_message, WhatsAppSink};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::ContactPayload;

/// Errors from building a delivery artifact.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Sink not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid WhatsApp number: {0}")]
    InvalidNumber(String),

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What a sink produced for a payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Delivery {
    /// A link to open (e.g. in a new browser tab)
    Link { url: String },

    /// An HTTP request to send
    Request {
        endpoint: String,
        content_type: String,
        body: String,
    },
}

/// A destination for contact requests.
pub trait DeliverySink {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Build the delivery artifact for `payload`.
    fn deliver(&self, payload: &ContactPayload) -> Result<Delivery, DeliveryError>;
}
