use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use site_contact_mailer::config::Config;
use site_contact_mailer::mailer::SmtpMailer;
use site_contact_mailer::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_contact_mailer=info".parse()?),
        )
        .init();

    info!("Starting site server");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    // Build the SMTP mailer up front so credential problems surface now
    let mailer = SmtpMailer::from_config(&config)?;

    let state = AppState {
        config: Arc::new(config),
        mailer: Arc::new(mailer),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
