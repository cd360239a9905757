use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kittens::config::Config;
use kittens::mail::{Mailer, NoopMailer, SmtpMailer};
use kittens::reddit::RedditClient;
use kittens::web;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    init_tracing()?;

    info!("Starting kittens");

    // Load and validate configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(server_email = %config.server_email, "Configuration loaded");

    let reddit = RedditClient::new(&config).context("Failed to build Reddit client")?;

    let mailer: Arc<dyn Mailer> = match config.smtp_host.as_deref() {
        Some(host) => {
            info!(host, "SMTP delivery enabled");
            Arc::new(
                SmtpMailer::new(&config, host).context("Failed to configure SMTP transport")?,
            )
        }
        None => {
            warn!("SMTP_HOST not set; outgoing mail will be logged and dropped");
            Arc::new(NoopMailer)
        }
    };

    web::serve(config, reddit, mailer).await
}

fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,kittens=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        // Pretty-printed logging for development
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
