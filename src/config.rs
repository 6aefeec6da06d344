use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // SMTP transport
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,

    // Mail identities
    pub from_email: String,
    pub from_name: String,
    pub recipient_email: String,

    // Server
    pub port: u16,
    pub site_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // SMTP transport (STARTTLS on the submission port by default)
            smtp_host: std::env::var("SMTP_HOST").context("SMTP_HOST not set")?,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?,
            smtp_password: std::env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?,

            // Mail identities
            from_email: std::env::var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL not set")?,
            from_name: std::env::var("SMTP_FROM_NAME")
                .unwrap_or_else(|_| "Contact Form".to_string()),
            recipient_email: std::env::var("CONTACT_RECIPIENT")
                .context("CONTACT_RECIPIENT not set")?,

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            site_dir: std::env::var("SITE_DIR").unwrap_or_else(|_| "site".to_string()),
        })
    }
}
