//! Contact form submissions: parsing, validation, and mail rendering.
//!
//! Checks run in wire order: honeypot, required fields, email syntax.
//! The first failure wins and nothing later runs, so a flagged bot never
//! costs an address parse and an invalid address never reaches the mailer.

use chrono::Utc;
use lettre::Address;
use serde::Deserialize;

use crate::i18n::Language;
use crate::mailer::ContactEmail;
use crate::sanitize;

/// Raw form payload.
///
/// Field names are the wire contract with the site's markup, underscore
/// prefixes included. Every field defaults to empty so a partial post
/// is a validation failure, not a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mensagem: String,
    #[serde(default, rename = "_language")]
    pub language: String,
    #[serde(default, rename = "_gotcha")]
    pub gotcha: String,
}

/// A submission that passed every check, trimmed and language-resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub language: Language,
}

/// Why a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The hidden field was filled in; the sender is treated as a bot.
    Honeypot,
    /// A required field is empty after trimming.
    MissingFields,
    /// The email field does not parse as a mailbox address.
    InvalidEmail,
}

impl SubmissionForm {
    /// Language the submitter was browsing in, Portuguese when the hidden
    /// field is absent or carries an unsupported code.
    pub fn submitted_language(&self) -> Language {
        Language::from_code_or_default(&self.language)
    }

    /// Trim and validate, returning the first rejection encountered.
    pub fn validate(&self) -> Result<Submission, Rejection> {
        if !self.gotcha.trim().is_empty() {
            return Err(Rejection::Honeypot);
        }

        let name = self.nome.trim();
        let email = self.email.trim();
        let message = self.mensagem.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(Rejection::MissingFields);
        }
        if email.parse::<Address>().is_err() {
            return Err(Rejection::InvalidEmail);
        }

        Ok(Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            language: self.submitted_language(),
        })
    }
}

impl Submission {
    /// Render the notification mail for this submission.
    ///
    /// User-supplied values are HTML-escaped in the HTML body (message
    /// line breaks preserved as `<br>`) and stripped of markup in the
    /// plain-text alternative.
    pub fn to_email(&self) -> ContactEmail {
        ContactEmail {
            reply_to_name: self.name.clone(),
            reply_to_email: self.email.clone(),
            subject: self.language.strings().mail_subject.to_string(),
            html_body: self.render_html(),
            text_body: self.render_text(),
        }
    }

    fn render_html(&self) -> String {
        let sent_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        format!(
            r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .field {{ margin-bottom: 15px; }}
    .field-label {{ font-weight: bold; color: #555; }}
    .field-value {{ margin-top: 5px; padding: 10px; background-color: #f9f9f9; }}
    .footer {{ margin-top: 20px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 12px; color: #777; }}
</style>
</head>
<body>
<div class="container">
    <h2>Contact Form</h2>
    <div class="field">
        <div class="field-label">Name / Nome / Nombre:</div>
        <div class="field-value">{name}</div>
    </div>
    <div class="field">
        <div class="field-label">Email:</div>
        <div class="field-value">{email}</div>
    </div>
    <div class="field">
        <div class="field-label">Message / Mensagem / Mensaje:</div>
        <div class="field-value">{message}</div>
    </div>
    <div class="footer">
        <p>This message was sent from the site contact form.</p>
        <p>Sent: {sent_at}</p>
    </div>
</div>
</body>
</html>
"#,
            name = sanitize::escape_html(&self.name),
            email = sanitize::escape_html(&self.email),
            message = sanitize::escape_html_multiline(&self.message),
            sent_at = sent_at,
        )
    }

    fn render_text(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}\n\n---\nSent from the site contact form",
            sanitize::strip_markup(&self.name),
            sanitize::strip_markup(&self.email),
            sanitize::strip_markup(&self.message),
        )
    }
}
