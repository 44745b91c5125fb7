//! Pre-filled WhatsApp chat links.

use crate::config::ContactConfig;
use crate::messages;
use crate::payload::ContactPayload;

use super::{Delivery, DeliveryError, DeliverySink};

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Render the chat message sent to the boutique.
pub fn render_whatsapp_message(payload: &ContactPayload, missing_phone_label: &str) -> String {
    format!(
        "Nuevo mensaje de contacto:\n\
         \n\
         Nombre: {}\n\
         Email: {}\n\
         Teléfono: {}\n\
         \n\
         Mensaje:\n\
         {}",
        payload.name,
        payload.email,
        payload.phone_or(missing_phone_label),
        payload.message,
    )
    .trim()
    .to_string()
}

/// Builds `https://wa.me/<number>?text=<message>` links.
#[derive(Debug, Clone)]
pub struct WhatsAppSink {
    number: String,
    missing_phone_label: String,
}

impl WhatsAppSink {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            missing_phone_label: messages::MISSING_PHONE_LABEL.to_string(),
        }
    }

    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(config.whatsapp_number.clone())
            .with_missing_phone_label(config.missing_phone_label.clone())
    }

    pub fn with_missing_phone_label(mut self, label: impl Into<String>) -> Self {
        self.missing_phone_label = label.into();
        self
    }
}

impl DeliverySink for WhatsAppSink {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    fn deliver(&self, payload: &ContactPayload) -> Result<Delivery, DeliveryError> {
        if self.number.is_empty() || !self.number.chars().all(|c| c.is_ascii_digit()) {
            return Err(DeliveryError::InvalidNumber(self.number.clone()));
        }

        let text = render_whatsapp_message(payload, &self.missing_phone_label);
        let url = format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            self.number,
            urlencoding::encode(&text)
        );

        Ok(Delivery::Link { url })
    }
}
