//! # Infrastructure Layer
//!
//! Adapters between the engine and the outside world.
//!
//! - [`submission`]: the outbound quote submission boundary (port,
//!   payload, HTTP adapter, configuration)

pub mod submission;

pub use submission::{
    HttpSubmissionClient, QuoteSubmission, SelectedService, SubmissionClient, SubmissionConfig,
    SubmissionError, SubmissionResult,
};
