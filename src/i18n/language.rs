//! Language type for the site's supported locales.

use serde::{Deserialize, Serialize};

/// A supported site locale.
///
/// Portuguese is the canonical locale: its pages are served from the site
/// root, while every other locale lives under a `/<code>/` URL prefix.
/// The set is closed on purpose; routing and mail templating match on it
/// exhaustively, so adding a locale is a compile-checked change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// All supported locales, canonical first.
    pub const ALL: [Language; 3] = [Language::Portuguese, Language::English, Language::Spanish];

    /// Parse an ISO 639-1 language code.
    ///
    /// # Returns
    /// * `Some(Language)` for a supported code
    /// * `None` for anything outside the supported set
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "pt" => Some(Language::Portuguese),
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            _ => None,
        }
    }

    /// Parse a language code, falling back to Portuguese when the value is
    /// missing, padded, or not one of the supported codes.
    ///
    /// This is the lenient entry point used for form data, where the field
    /// is client-controlled and may carry anything.
    pub fn from_code_or_default(code: &str) -> Language {
        Language::from_code(code.trim()).unwrap_or_default()
    }

    /// ISO 639-1 language code (e.g., "pt", "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Portuguese => "Portuguese",
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    /// Language name in its native form.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Portuguese => "Português",
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    /// Whether this is the canonical locale, served without a URL prefix.
    pub fn is_canonical(&self) -> bool {
        matches!(self, Language::Portuguese)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
