//! Verdict Runner
//!
//! A long-running bot that watches the review status of the latest homework
//! submission and reports changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tunables from the environment
//! - Repository: HTTP access to the review API
//! - Service: notification delivery to Telegram
//! - Scheduler: the poll loop and its duplicate suppression
//!
//! The only way the process exits on its own is a configuration error at
//! startup; once the loop runs, every failure is reported and retried.

mod config;
mod error;
mod logging;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use verdict_client::{PracticumClient, TelegramClient};

use crate::config::{Config, ConfigError, load_dotenv};
use crate::repository::HttpStatusRepository;
use crate::scheduler::StatusPoller;
use crate::service::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging comes first so a bad configuration can still be reported.
    let loaded = load_config();
    let log_file = loaded.as_ref().ok().and_then(|config| config.log_file.clone());
    logging::init(log_file.as_ref()).context("Failed to initialize logging")?;

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!(severity = "critical", "Invalid configuration, shutting down: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting Verdict Runner");
    info!(
        "Loaded configuration: endpoint={}, chat_id={}, retry_period={:?}",
        config.endpoint, config.telegram_chat_id, config.retry_period
    );

    let repository = Arc::new(HttpStatusRepository::new(PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
    )));

    let notifier = Arc::new(TelegramNotifier::new(
        TelegramClient::new(config.telegram_api_url.clone(), config.telegram_token.clone()),
        config.telegram_chat_id.clone(),
    ));

    let poller = StatusPoller::new(repository, notifier, config.retry_period);

    info!("Starting status polling loop");
    poller.run().await;

    Ok(())
}

/// Loads and validates configuration from `.env` and environment variables
fn load_config() -> Result<Config, ConfigError> {
    load_dotenv()?;
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
