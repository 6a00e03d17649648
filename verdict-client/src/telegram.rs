//! Telegram Bot API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Public Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
///
/// Only `sendMessage` is implemented; the bot never reads updates.
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token issued by @BotFather
    token: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method replies with
#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Telegram client
    ///
    /// # Arguments
    /// * `api_url` - Bot API base URL, trailing slash optional
    /// * `token` - Bot token
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Send a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channel` username
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<BotApiReply>(&body) {
            Ok(reply) if reply.ok && status.is_success() => {
                debug!("Telegram accepted message for chat {}", chat_id);
                Ok(())
            }
            Ok(reply) => Err(ClientError::Telegram {
                status: status.as_u16(),
                description: reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
            Err(_) if !status.is_success() => {
                Err(ClientError::unexpected_status(status.as_u16(), &body))
            }
            Err(e) => Err(ClientError::ParseError(e.to_string())),
        }
    }
}
