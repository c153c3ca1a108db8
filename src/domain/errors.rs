//! # Domain Errors
//!
//! Error types for domain-level invariant violations.
//!
//! Catalog misses are deliberately not represented here: an unresolvable
//! service id degrades gracefully (lookup returns `None`, payload
//! assembly omits the name, the estimate skips the band) rather than
//! aborting any flow.
//!
//! # Examples
//!
//! ```
//! use cotizador::domain::errors::DomainError;
//! use cotizador::domain::value_objects::PriceRange;
//! use rust_decimal::Decimal;
//!
//! let err = PriceRange::new(Decimal::from(10), Decimal::from(5)).unwrap_err();
//! assert!(matches!(err, DomainError::InvalidPriceRange { .. }));
//! ```

use crate::domain::value_objects::enums::ParseEnumError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-level error raised when a value object's construction
/// invariant is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A price range with `min > max` or a negative bound.
    #[error("invalid price range: min {min} must be within 0..=max {max}")]
    InvalidPriceRange {
        /// Proposed lower bound.
        min: Decimal,
        /// Proposed upper bound.
        max: Decimal,
    },

    /// Linear meters must be strictly positive.
    #[error("invalid linear meters: {0} (must be positive)")]
    InvalidLinearMeters(Decimal),

    /// A domain enum could not be parsed from its textual form.
    #[error(transparent)]
    ParseEnum(#[from] ParseEnumError),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_price_range_message() {
        let err = DomainError::InvalidPriceRange {
            min: Decimal::from(10),
            max: Decimal::from(5),
        };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("5"));
    }

    #[test]
    fn parse_enum_is_transparent() {
        let parse_err = "HIGH".parse::<crate::domain::value_objects::Urgency>().unwrap_err();
        let err: DomainError = parse_err.into();
        assert!(err.to_string().contains("Urgency"));
    }
}
