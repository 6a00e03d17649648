//! Verdict HTTP Clients
//!
//! Thin, typed clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework review API (status polling)
//! - [`TelegramClient`]: the Telegram Bot API (message delivery)
//!
//! Neither client retries. The runner's poll loop is the retry mechanism.
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> verdict_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let response = client.fetch_statuses(0).await?;
//!     println!("{}", response["current_date"]);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

/// Longest response-body excerpt kept in an error
pub const MAX_EXCERPT_CHARS: usize = 512;

/// Trims a response body to [`MAX_EXCERPT_CHARS`] characters
pub(crate) fn excerpt(body: &str) -> String {
    let body = body.trim();
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_EXCERPT_CHARS).collect();

    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
