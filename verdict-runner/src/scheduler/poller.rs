//! Status poller
//!
//! Polls the review API for the latest homework and relays status changes
//! and failures to the chat. One poll is in flight at a time; the sequence
//! fetch → validate → interpret → notify → sleep is strictly ordered.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};
use verdict_core::{describe, latest_homework, response::current_date, validate};

use crate::error::PollError;
use crate::repository::StatusRepository;
use crate::service::Notifier;

/// State carried from one poll to the next
///
/// Only the poller mutates it, and only after comparing against the new
/// message. It lives in memory and is lost on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Last status message sent to the chat
    pub last_status: Option<String>,
    /// Last failure report sent to the chat
    pub last_error: Option<String>,
}

/// Poller that periodically checks the latest homework status
pub struct StatusPoller {
    repository: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    retry_period: Duration,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        repository: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
        retry_period: Duration,
    ) -> Self {
        Self {
            repository,
            notifier,
            retry_period,
        }
    }

    /// Starts the polling loop
    ///
    /// Never returns. The sleep runs after every iteration, whether it
    /// succeeded or failed.
    pub async fn run(&self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.retry_period
        );

        let mut state = PollState::default();

        loop {
            let now = chrono::Utc::now().timestamp();
            state = self.run_once(state, now).await;

            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// # Arguments
    /// * `state` - State left by the previous cycle
    /// * `from_date` - Cursor sent to the review API
    ///
    /// # Returns
    /// The state for the next cycle
    pub async fn run_once(&self, mut state: PollState, from_date: i64) -> PollState {
        match self.check_status(from_date).await {
            Ok(Some(message)) => {
                if state.last_status.as_deref() == Some(message.as_str()) {
                    debug!("Homework status has not changed");
                } else {
                    self.notifier.notify(&message).await;
                    state.last_status = Some(message);
                }
            }
            Ok(None) => {
                debug!("No new homework since {}", from_date);
            }
            Err(e) => {
                let report = e.report();
                error!(kind = e.kind(), status = e.status(), "{}", report);

                if state.last_error.as_deref() == Some(report.as_str()) {
                    debug!("Failure already reported, not notifying again");
                } else {
                    self.notifier.notify(&report).await;
                    state.last_error = Some(report);
                }
            }
        }

        state
    }

    /// Fetches, validates and interprets the latest homework
    ///
    /// Returns `None` when the response lists no homework.
    async fn check_status(&self, from_date: i64) -> Result<Option<String>, PollError> {
        let response = self.repository.fetch_statuses(from_date).await?;

        let has_homework = validate(&response)?;

        if let Some(cursor) = current_date(&response) {
            debug!("Server cursor is {}", cursor);
        }

        if !has_homework {
            return Ok(None);
        }

        let Some(homework) = latest_homework(&response) else {
            return Ok(None);
        };

        Ok(Some(describe(homework)?))
    }
}
