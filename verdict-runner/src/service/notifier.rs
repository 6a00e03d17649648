//! Notification service
//!
//! Delivers messages to the configured Telegram chat. Delivery failures are
//! logged and swallowed: a lost message must never stop the poll loop, and
//! the next poll is the only retry.

use async_trait::async_trait;
use tracing::{debug, error};
use verdict_client::TelegramClient;

/// Service trait for relaying messages to the user
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message`; never fails from the caller's point of view
    async fn notify(&self, message: &str);
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to one chat
    pub fn new(client: TelegramClient, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) {
        match self.client.send_message(&self.chat_id, message).await {
            Ok(()) => debug!("Message sent to chat {}", self.chat_id),
            Err(e) => error!("Failed to send message to chat {}: {}", self.chat_id, e),
        }
    }
}
