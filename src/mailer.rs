//! Mail delivery through authenticated SMTP.
//!
//! The [`Mailer`] trait is the seam between the submission handler and the
//! transport: production code uses [`SmtpMailer`] over STARTTLS, tests
//! substitute in-memory implementations. One delivery attempt per
//! submission; there is no retry or queueing.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::Config;

/// A rendered notification mail, ready for delivery.
///
/// Both bodies are fully rendered before they reach the mailer; the
/// transport never touches raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    /// Submitter's name, used for the reply-to display name.
    pub reply_to_name: String,
    /// Submitter's address, used for the reply-to mailbox.
    pub reply_to_email: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailError::InvalidAddress(err.to_string())
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::Build(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Smtp(err.to_string())
    }
}

/// Port for delivering contact notifications.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Attempt delivery once.
    async fn send(&self, email: &ContactEmail) -> Result<(), MailError>;
}

/// Production mailer: lettre over STARTTLS-authenticated SMTP.
///
/// Sender and recipient are fixed at construction from configuration;
/// only the reply-to identity varies per submission.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipient: Mailbox,
}

impl SmtpMailer {
    /// Build the transport and fixed identities from configuration.
    ///
    /// Fails fast on a malformed host or address so a bad deployment
    /// surfaces at startup rather than on the first submission.
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        let from = Mailbox::new(
            Some(config.from_name.clone()),
            config.from_email.parse::<Address>()?,
        );
        let recipient = Mailbox::new(None, config.recipient_email.parse::<Address>()?);

        Ok(Self {
            transport,
            from,
            recipient,
        })
    }

    /// Assemble the multipart/alternative message for `email`.
    fn build_message(&self, email: &ContactEmail) -> Result<Message, MailError> {
        let reply_to = Mailbox::new(
            Some(email.reply_to_name.clone()),
            email.reply_to_email.parse::<Address>()?,
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(self.recipient.clone())
            .reply_to(reply_to)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))?;

        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &ContactEmail) -> Result<(), MailError> {
        let message = self.build_message(email)?;
        self.transport.send(message).await?;
        Ok(())
    }
}
