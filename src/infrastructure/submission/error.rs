//! # Submission Errors
//!
//! Error types for the outbound quote submission.
//!
//! The submission contract is binary: any non-success acknowledgment or
//! transport failure means the submission did not happen, the wizard
//! state is unchanged, and the requester may retry.
//!
//! # Examples
//!
//! ```
//! use cotizador::infrastructure::submission::error::SubmissionError;
//!
//! let err = SubmissionError::timeout("request exceeded 10s");
//! assert!(err.is_retryable());
//!
//! let err = SubmissionError::rejected_status(503);
//! assert!(err.is_retryable());
//! ```

use thiserror::Error;

/// Error from the quote submission collaborator.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    /// The request timed out in transport.
    #[error("submission timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection failure before an acknowledgment.
    #[error("submission connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The collaborator acknowledged with a non-success status.
    ///
    /// The response body is never inspected; the status alone decides.
    #[error("submission rejected with status {status}")]
    RejectedStatus {
        /// HTTP-style status code.
        status: u16,
    },

    /// The payload could not be serialized.
    #[error("submission serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl SubmissionError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a rejected-status error.
    #[must_use]
    pub const fn rejected_status(status: u16) -> Self {
        Self::RejectedStatus { status }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns true if resubmitting the identical payload can succeed.
    ///
    /// Everything except a serialization failure is retryable; a payload
    /// that cannot be serialized will not serialize on the next attempt
    /// either.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::Serialization { .. })
    }
}

/// Result type for submission operations.
pub type SubmissionResult<T> = Result<T, SubmissionError>;
