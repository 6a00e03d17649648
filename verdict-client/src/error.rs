//! Error types for the Verdict clients
//!
//! Display strings reach the chat through the runner's failure report, so
//! they are written for the student, not the operator.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or Telegram
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (DNS, timeout, connection reset)
    ///
    /// The request URL is stripped: it carries the bot token and the
    /// per-poll cursor.
    #[error("Ошибка запроса к API: {0}")]
    RequestFailed(reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("Ошибка соединения, код {status}{}", excerpt_suffix(.excerpt))]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Leading part of the response body
        excerpt: String,
    },

    /// The body is not valid JSON
    #[error("Некорректный JSON в ответе API: {0}")]
    ParseError(String),

    /// The Telegram Bot API refused the message
    #[error("Telegram отклонил сообщение (код {status}): {description}")]
    Telegram {
        /// HTTP status code
        status: u16,
        /// `description` field of the bot API reply
        description: String,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.without_url())
    }
}

fn excerpt_suffix(excerpt: &str) -> String {
    if excerpt.is_empty() {
        String::new()
    } else {
        format!(": {excerpt}")
    }
}

impl ClientError {
    /// Create an unexpected-status error, trimming the body to an excerpt
    pub fn unexpected_status(status: u16, body: &str) -> Self {
        Self::UnexpectedStatus {
            status,
            excerpt: crate::excerpt(body),
        }
    }

    /// HTTP status code attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::Telegram { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            Self::ParseError(_) => None,
        }
    }
}
