//! Centralized localized strings.
//!
//! Validation errors are raised before a language is reliably established,
//! so those two messages are single multilingual constants. Everything
//! shown after the language field has been parsed goes through
//! [`LanguageStrings`], selected with an exhaustive match on [`Language`].

use crate::i18n::Language;

/// Validation error for empty required fields (HTTP 400, plain text).
pub const MISSING_FIELDS_ERROR: &str =
    "All fields are required / Todos os campos são obrigatórios / Todos los campos son obligatorios";

/// Validation error for a malformed email address (HTTP 400, plain text).
pub const INVALID_EMAIL_ERROR: &str =
    "Invalid email address / Endereço de e-mail inválido / Dirección de correo electrónico no válida";

/// All language-selected user-facing strings for one locale.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Subject line of the notification mail.
    pub mail_subject: &'static str,

    /// Heading of the delivery-failure page.
    pub delivery_error_title: &'static str,

    /// Supporting text of the delivery-failure page.
    pub delivery_error_hint: &'static str,

    /// Label of the link back to the referring page.
    pub go_back: &'static str,
}

/// Portuguese strings (canonical, also the fallback).
pub const PORTUGUESE_STRINGS: LanguageStrings = LanguageStrings {
    mail_subject: "Nova mensagem do site",
    delivery_error_title: "Não foi possível enviar a mensagem.",
    delivery_error_hint: "Por favor, tente novamente mais tarde.",
    go_back: "Voltar",
};

/// English strings.
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    mail_subject: "New message from the website",
    delivery_error_title: "The message could not be sent.",
    delivery_error_hint: "Please try again later.",
    go_back: "Go back",
};

/// Spanish strings.
pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    mail_subject: "Nuevo mensaje del sitio web",
    delivery_error_title: "No se pudo enviar el mensaje.",
    delivery_error_hint: "Por favor, inténtalo de nuevo más tarde.",
    go_back: "Volver",
};

impl Language {
    /// Localized strings for this locale.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self {
            Language::Portuguese => &PORTUGUESE_STRINGS,
            Language::English => &ENGLISH_STRINGS,
            Language::Spanish => &SPANISH_STRINGS,
        }
    }
}
