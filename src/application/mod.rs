//! # Application Layer
//!
//! Orchestration of the quote lifecycle over the domain model.
//!
//! This layer provides:
//! - [`QuoteWizard`]: the step-machine driver from selection to submission
//! - [`QuoteRequest`]: the mutable in-progress request
//! - [`validation`]: per-step field validators with simultaneous reporting
//! - [`EstimateCalculator`]: the deterministic estimate pipeline
//! - [`EngineError`]: the error taxonomy surfaced to callers

pub mod error;
pub mod estimate;
pub mod quote_request;
pub mod validation;
pub mod wizard;

pub use error::{EngineError, EngineResult};
pub use estimate::EstimateCalculator;
pub use quote_request::{ProjectDetails, QuoteRequest};
pub use validation::{Field, FieldViolation, validate_contact, validate_step};
pub use wizard::QuoteWizard;
