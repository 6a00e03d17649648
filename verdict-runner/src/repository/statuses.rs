//! Homework statuses repository
//!
//! Fetches the raw statuses payload from the review API. Shape checks and
//! interpretation happen in the poller, not here.

use async_trait::async_trait;
use serde_json::Value;
use verdict_client::{PracticumClient, Result};

/// Repository trait for reading homework statuses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Cursor in seconds since the Unix epoch
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP statuses repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        self.client.fetch_statuses(from_date).await
    }
}
