//! Multilingual static site server with an SMTP contact form relay.
//!
//! Two loosely coupled components share a language-code and URL-path
//! convention: the language preference manager (a `language` cookie plus
//! localized path mapping) and the contact submission handler (form
//! validation and delivery through an SMTP mailer). Portuguese pages live
//! at the site root; English and Spanish pages live under `/en/` and
//! `/es/`.

pub mod config;
pub mod contact;
pub mod i18n;
pub mod mailer;
pub mod prefs;
pub mod routing;
pub mod sanitize;
pub mod server;
