//! Homework review API client

use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// HTTP client for the homework review API
///
/// Issues a single authenticated GET per call. Status, transport and
/// decoding failures are reported as distinct [`ClientError`] variants and
/// never retried here.
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the `homework_statuses` endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Cursor in seconds since the Unix epoch
    ///
    /// # Returns
    /// The decoded JSON body. Its shape is not checked here; see
    /// `verdict_core::validate`.
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Check the status code and decode the JSON body
    ///
    /// Anything but 200 OK is an error; the body excerpt is kept so the
    /// failure can be diagnosed from the logs afterwards.
    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::unexpected_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::ParseError(e.to_string()))
    }
}
