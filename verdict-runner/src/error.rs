//! Poll cycle errors
//!
//! Everything that can go wrong inside one poll iteration. All variants are
//! recoverable: the poller reports them and tries again after the retry
//! period.

use thiserror::Error;
use verdict_client::ClientError;
use verdict_core::{DescribeError, ValidationError};

#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Status(#[from] DescribeError),
}

impl PollError {
    /// Short tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(ClientError::RequestFailed(_)) => "network",
            Self::Fetch(ClientError::ParseError(_)) => "decode",
            Self::Fetch(_) => "connectivity",
            Self::Validation(_) => "shape",
            Self::Status(DescribeError::MissingFields) => "field",
            Self::Status(DescribeError::UnknownStatus(_)) => "unknown_status",
        }
    }

    /// HTTP status behind a fetch failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch(e) => e.status(),
            Self::Validation(_) | Self::Status(_) => None,
        }
    }

    /// Message relayed to the chat
    pub fn report(&self) -> String {
        format!("Сбой в работе программы: {}", self)
    }
}
