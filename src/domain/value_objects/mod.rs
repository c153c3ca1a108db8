//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ServiceId`]: string-based catalog key
//! - [`QuoteRequestId`]: UUID-based request identifier
//!
//! ## Numeric Types
//!
//! - [`PriceRange`]: validated `{min, max}` COP band
//! - [`LinearMeters`]: positive intervention length
//! - [`Estimate`]: derived `{min, max}` estimate in whole COP
//!
//! ## Domain Enums
//!
//! - `Urgency`: estimate multiplier tier
//! - `PipeDiameter`, `Material`: technical project fields
//! - `ServiceCategory`: catalog grouping
//! - `WizardStep`: wizard lifecycle states

pub mod contact;
pub mod enums;
pub mod ids;
pub mod money;
pub mod wizard_step;

pub use contact::ContactInfo;
pub use enums::{Material, ParseEnumError, PipeDiameter, ServiceCategory, Urgency};
pub use ids::{QuoteRequestId, ServiceId};
pub use money::{Estimate, LinearMeters, PriceRange};
pub use wizard_step::WizardStep;
