//! User-facing error messages (Spanish, as shown on the site).

pub const NAME_REQUIRED: &str = "El nombre es obligatorio";
pub const NAME_TOO_SHORT: &str = "El nombre debe tener al menos 2 caracteres";
pub const NAME_INVALID_CHARACTERS: &str = "El nombre solo puede contener letras y espacios";

pub const EMAIL_REQUIRED: &str = "El email es obligatorio";
pub const EMAIL_INVALID_FORMAT: &str = "Por favor, ingresa un email válido";

pub const PHONE_INVALID_FORMAT: &str = "Por favor, ingresa un teléfono válido";

pub const MESSAGE_REQUIRED: &str = "El mensaje es obligatorio";
pub const MESSAGE_TOO_SHORT: &str = "El mensaje debe tener al menos 10 caracteres";
pub const MESSAGE_TOO_LONG: &str = "El mensaje no puede exceder 1000 caracteres";

/// Shown in place of the phone number when none was given.
pub const MISSING_PHONE_LABEL: &str = "No proporcionado";
