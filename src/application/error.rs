//! # Engine Errors
//!
//! Error taxonomy for wizard operations.
//!
//! Nothing here is fatal: validation failures are field-level
//! (block-and-report, correct and retry), submission failures are
//! request-level and retryable with all entered data preserved.
//!
//! # Examples
//!
//! ```
//! use cotizador::application::error::EngineError;
//! use cotizador::application::validation::{Field, FieldViolation};
//!
//! let err = EngineError::validation(vec![FieldViolation::new(
//!     Field::SelectedServices,
//!     "select at least one service",
//! )]);
//! assert!(err.is_validation());
//! assert!(!err.is_retryable());
//! ```

use crate::application::validation::FieldViolation;
use crate::domain::value_objects::WizardStep;
use crate::infrastructure::submission::error::SubmissionError;
use thiserror::Error;

/// Error produced by wizard operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The current step's validator rejected the request.
    ///
    /// Carries the full set of violations, never just the first.
    #[error("validation failed: {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// The outbound submission failed; retryable, no data lost.
    #[error("submission failed: {0}")]
    Submission(#[from] SubmissionError),

    /// The requested step change is not a legal transition.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        /// Current step.
        from: WizardStep,
        /// Requested step.
        to: WizardStep,
    },

    /// A submission is already in flight; duplicate submits are refused.
    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

impl EngineError {
    /// Creates a validation error from collected violations.
    #[must_use]
    pub const fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation(violations)
    }

    /// Creates an invalid-transition error.
    #[must_use]
    pub const fn invalid_transition(from: WizardStep, to: WizardStep) -> Self {
        Self::InvalidTransition { from, to }
    }

    /// Returns the violations if this is a validation error.
    #[must_use]
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            Self::Validation(violations) => Some(violations),
            _ => None,
        }
    }

    /// Returns true if this is a field-level validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if retrying the same operation can succeed without
    /// changing any input.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Submission(e) => e.is_retryable(),
            Self::SubmissionInFlight => true,
            Self::Validation(_) | Self::InvalidTransition { .. } => false,
        }
    }
}

/// Result type for wizard operations.
pub type EngineResult<T> = Result<T, EngineError>;
