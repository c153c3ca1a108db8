//! # Quote Submission
//!
//! The engine's single outbound boundary.
//!
//! [`SubmissionClient`] is the port every transport implements;
//! [`HttpSubmissionClient`](http::HttpSubmissionClient) is the reqwest
//! adapter. The payload ([`QuoteSubmission`]) carries the full request,
//! the computed estimate, and the resolved service names. The expected
//! response is a bare pass/fail signal; no body is ever parsed.

pub mod config;
pub mod error;
pub mod http;

pub use config::SubmissionConfig;
pub use error::{SubmissionError, SubmissionResult};
pub use http::HttpSubmissionClient;

use crate::application::quote_request::ProjectDetails;
use crate::domain::value_objects::{ContactInfo, Estimate, QuoteRequestId, ServiceId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A selected service as sent to the collaborator.
///
/// Ids that no longer resolve against the catalog are sent without a
/// name rather than dropped: the receiving side keeps the full picture
/// of what was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedService {
    /// Catalog key of the selection.
    pub id: ServiceId,
    /// Resolved human-readable name, absent for unknown ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The JSON payload of one quote submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSubmission {
    /// Correlation id of the quote request.
    pub request_id: QuoteRequestId,
    /// When the payload was assembled.
    pub submitted_at: DateTime<Utc>,
    /// Selected services with resolved names.
    pub selected_services: Vec<SelectedService>,
    /// Project details from the details step.
    pub project_details: ProjectDetails,
    /// Notes for the selected services (stale notes excluded).
    pub service_notes: BTreeMap<ServiceId, String>,
    /// Contact fields from the contact step.
    pub contact: ContactInfo,
    /// The estimate computed at submission time.
    pub estimate: Estimate,
}

/// Port for the quote submission collaborator.
///
/// Implementations deliver one payload and report a binary outcome. The
/// engine issues a single in-flight request at a time and never cancels:
/// once sent, it only observes success or failure. Timeouts belong to
/// the transport, not to the engine.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Delivers the payload.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] on any non-success acknowledgment or
    /// transport failure; all of these leave the wizard state unchanged
    /// and are retryable by resubmission.
    async fn submit(&self, payload: &QuoteSubmission) -> SubmissionResult<()>;
}
