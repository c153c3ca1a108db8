//! # Domain Layer
//!
//! Core business types: the service catalog, validated value objects,
//! and domain errors. Nothing in this layer performs I/O.

pub mod catalog;
pub mod errors;
pub mod value_objects;

pub use catalog::{Service, ServiceCatalog};
pub use errors::{DomainError, DomainResult};
