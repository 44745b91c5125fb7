//! JSON requests for a hosted form backend (Formspree and similar).

use crate::config::ContactConfig;
use crate::payload::ContactPayload;

use super::{Delivery, DeliveryError, DeliverySink};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds a `POST <endpoint>` request with the payload as JSON.
#[derive(Debug, Clone)]
pub struct FormBackendSink {
    endpoint: String,
}

impl FormBackendSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Fails when the config has no `form_endpoint`.
    pub fn from_config(config: &ContactConfig) -> Result<Self, DeliveryError> {
        config
            .form_endpoint
            .clone()
            .map(Self::new)
            .ok_or_else(|| DeliveryError::NotConfigured("form_endpoint".to_string()))
    }
}

impl DeliverySink for FormBackendSink {
    fn name(&self) -> &'static str {
        "form_backend"
    }

    fn deliver(&self, payload: &ContactPayload) -> Result<Delivery, DeliveryError> {
        Ok(Delivery::Request {
            endpoint: self.endpoint.clone(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            body: serde_json::to_string(payload)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let sink = FormBackendSink::new("https://formspree.io/f/abc123");
        let payload = ContactPayload {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            message: "Hola, una consulta.".to_string(),
        };

        let Delivery::Request {
            endpoint,
            content_type,
            body,
        } = sink.deliver(&payload).unwrap()
        else {
            panic!("expected a request");
        };

        assert_eq!(endpoint, "https://formspree.io/f/abc123");
        assert_eq!(content_type, "application/json");

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["phone"], "");
        assert_eq!(json["message"], "Hola, una consulta.");
    }

    #[test]
    fn test_requires_endpoint() {
        let result = FormBackendSink::from_config(&ContactConfig::default());
        assert!(matches!(result, Err(DeliveryError::NotConfigured(_))));
    }
}
