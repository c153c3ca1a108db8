//! # Money Types
//!
//! Validated numeric value objects for pricing.
//!
//! - [`PriceRange`]: a `{min, max}` COP band attached to a catalog service
//! - [`LinearMeters`]: positive length of the intervention, drives scaling
//! - [`Estimate`]: the derived `{min, max}` band shown to the requester
//!
//! All monetary amounts use [`rust_decimal::Decimal`]; the [`Estimate`]
//! is the only place values are rounded to whole currency units.
//!
//! # Examples
//!
//! ```
//! use cotizador::domain::value_objects::money::{LinearMeters, PriceRange};
//! use rust_decimal::Decimal;
//!
//! let range = PriceRange::new(Decimal::from(800_000), Decimal::from(5_000_000)).unwrap();
//! assert_eq!(range.min(), Decimal::from(800_000));
//!
//! let lm = LinearMeters::new(Decimal::from(150)).unwrap();
//! assert!(lm.get() > Decimal::from(100));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A min/max price band in COP for a catalog service.
///
/// Invariant: `0 <= min <= max`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Decimal,
    max: Decimal,
}

impl PriceRange {
    /// Creates a price range.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPriceRange`] if `min` is negative or
    /// `min > max`.
    pub fn new(min: Decimal, max: Decimal) -> DomainResult<Self> {
        if min.is_sign_negative() || min > max {
            return Err(DomainError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a price range from whole COP amounts.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPriceRange`] if `min > max`.
    pub fn from_cop(min: i64, max: i64) -> DomainResult<Self> {
        Self::new(Decimal::from(min), Decimal::from(max))
    }

    /// Returns the lower bound.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> Decimal {
        self.min
    }

    /// Returns the upper bound.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> Decimal {
        self.max
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} COP", self.min, self.max)
    }
}

/// Positive length of the intervention, in linear meters.
///
/// Values above 100 meters trigger the estimate's scaling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct LinearMeters(Decimal);

impl LinearMeters {
    /// Creates a linear-meter length.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLinearMeters`] if the value is zero
    /// or negative.
    pub fn new(meters: Decimal) -> DomainResult<Self> {
        if meters <= Decimal::ZERO {
            return Err(DomainError::InvalidLinearMeters(meters));
        }
        Ok(Self(meters))
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for LinearMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

impl TryFrom<Decimal> for LinearMeters {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LinearMeters> for Decimal {
    fn from(lm: LinearMeters) -> Self {
        lm.0
    }
}

/// The derived `{min, max}` estimate in whole COP.
///
/// Estimates are computed on demand from the current quote request and
/// never stored; see the estimate calculator in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Estimate {
    /// Lower bound in whole COP.
    pub min: u64,
    /// Upper bound in whole COP.
    pub max: u64,
}

impl Estimate {
    /// Creates an estimate from already-rounded bounds.
    #[inline]
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// The zero estimate produced for an empty selection.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self { min: 0, max: 0 }
    }

    /// Returns true if both bounds are zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} COP", self.min, self.max)
    }
}
