//! # HTTP Submission Client
//!
//! reqwest adapter for the [`SubmissionClient`] port.
//!
//! POSTs the payload as JSON to the configured endpoint. Success is any
//! 2xx status; the response body is never read. Non-2xx statuses and
//! transport failures map onto [`SubmissionError`] variants, all of them
//! retryable.
//!
//! # Examples
//!
//! ```no_run
//! use cotizador::infrastructure::submission::{HttpSubmissionClient, SubmissionConfig};
//!
//! let config = SubmissionConfig {
//!     endpoint_url: "https://api.example.com/quotes".to_string(),
//!     timeout_ms: 10_000,
//! };
//! let client = HttpSubmissionClient::new(config).unwrap();
//! # let _ = client;
//! ```

use crate::infrastructure::submission::config::SubmissionConfig;
use crate::infrastructure::submission::error::{SubmissionError, SubmissionResult};
use crate::infrastructure::submission::{QuoteSubmission, SubmissionClient};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP implementation of the quote submission collaborator.
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    client: Client,
    config: SubmissionConfig,
}

impl HttpSubmissionClient {
    /// Creates a client with the configured transport timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Connection`] if the underlying client
    /// cannot be constructed.
    pub fn new(config: SubmissionConfig) -> SubmissionResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SubmissionError::connection(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Returns the configured endpoint URL.
    #[inline]
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.config.endpoint_url
    }

    /// Maps a reqwest error to a [`SubmissionError`].
    fn map_reqwest_error(error: &reqwest::Error) -> SubmissionError {
        if error.is_timeout() {
            SubmissionError::timeout("request timed out")
        } else {
            SubmissionError::connection(format!("HTTP request failed: {error}"))
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, payload: &QuoteSubmission) -> SubmissionResult<()> {
        let response = self
            .client
            .post(&self.config.endpoint_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| Self::map_reqwest_error(&e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::rejected_status(status.as_u16()))
        }
    }
}
