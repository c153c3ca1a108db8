//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the core enumerations of the quote engine:
//!
//! - [`Urgency`] - Delivery urgency, drives the estimate multiplier
//! - [`PipeDiameter`] - Nominal pipe diameter for technical services
//! - [`Material`] - Pipe material for technical services
//! - [`ServiceCategory`] - Catalog grouping used for presentation filtering
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The value is not a valid variant of the named enum.
    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),
}

/// Delivery urgency selected by the requester.
///
/// Urgency modifies the computed estimate through a pair of multipliers
/// applied to the min/max bounds, strictly after the linear-meter scaling.
///
/// # Examples
///
/// ```
/// use cotizador::domain::value_objects::enums::Urgency;
/// use rust_decimal::Decimal;
///
/// let (min_mult, max_mult) = Urgency::Urgent.multipliers();
/// assert_eq!(min_mult, Decimal::new(15, 1));
/// assert_eq!(max_mult, Decimal::new(18, 1));
/// assert_eq!(Urgency::Normal.to_string(), "NORMAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Urgency {
    /// Standard turnaround, no estimate surcharge.
    #[default]
    Normal = 0,
    /// Prioritized scheduling (min x1.2, max x1.3).
    Priority = 1,
    /// Immediate attention (min x1.5, max x1.8).
    Urgent = 2,
}

impl Urgency {
    /// Returns the `(min, max)` estimate multipliers for this urgency.
    ///
    /// `Normal` maps to the identity pair.
    #[must_use]
    pub fn multipliers(self) -> (Decimal, Decimal) {
        match self {
            Self::Normal => (Decimal::ONE, Decimal::ONE),
            Self::Priority => (Decimal::new(12, 1), Decimal::new(13, 1)),
            Self::Urgent => (Decimal::new(15, 1), Decimal::new(18, 1)),
        }
    }

    /// Returns true if this urgency carries a surcharge.
    #[inline]
    #[must_use]
    pub const fn is_surcharged(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Priority => write!(f, "PRIORITY"),
            Self::Urgent => write!(f, "URGENT"),
        }
    }
}

impl FromStr for Urgency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NORMAL" => Ok(Self::Normal),
            "PRIORITY" => Ok(Self::Priority),
            "URGENT" => Ok(Self::Urgent),
            _ => Err(ParseEnumError::InvalidValue("Urgency", s.to_string())),
        }
    }
}

/// Nominal pipe diameter, in inches.
///
/// Offered as a fixed set of choices for technical services; the engine
/// only cares that a value is set, never about the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PipeDiameter {
    /// 6" nominal diameter.
    #[serde(rename = "6")]
    In6 = 0,
    /// 8" nominal diameter.
    #[serde(rename = "8")]
    In8 = 1,
    /// 10" nominal diameter.
    #[serde(rename = "10")]
    In10 = 2,
    /// 12" nominal diameter.
    #[serde(rename = "12")]
    In12 = 3,
    /// 16" nominal diameter.
    #[serde(rename = "16")]
    In16 = 4,
    /// 20" nominal diameter.
    #[serde(rename = "20")]
    In20 = 5,
    /// 24" nominal diameter.
    #[serde(rename = "24")]
    In24 = 6,
    /// Larger than 24".
    #[serde(rename = "OVER_24")]
    Over24 = 7,
}

impl PipeDiameter {
    /// Returns the nominal size in inches, or `None` for the open-ended bucket.
    #[must_use]
    pub const fn inches(self) -> Option<u8> {
        match self {
            Self::In6 => Some(6),
            Self::In8 => Some(8),
            Self::In10 => Some(10),
            Self::In12 => Some(12),
            Self::In16 => Some(16),
            Self::In20 => Some(20),
            Self::In24 => Some(24),
            Self::Over24 => None,
        }
    }
}

impl fmt::Display for PipeDiameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inches() {
            Some(inches) => write!(f, "{inches}\""),
            None => write!(f, ">24\""),
        }
    }
}

impl FromStr for PipeDiameter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches('"') {
            "6" => Ok(Self::In6),
            "8" => Ok(Self::In8),
            "10" => Ok(Self::In10),
            "12" => Ok(Self::In12),
            "16" => Ok(Self::In16),
            "20" => Ok(Self::In20),
            "24" => Ok(Self::In24),
            ">24" | "OVER_24" => Ok(Self::Over24),
            _ => Err(ParseEnumError::InvalidValue("PipeDiameter", s.to_string())),
        }
    }
}

/// Pipe material for technical services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Material {
    /// PVC pipework.
    Pvc = 0,
    /// Reinforced or plain concrete.
    Concrete = 1,
    /// Vitrified clay.
    VitrifiedClay = 2,
    /// Ductile iron.
    DuctileIron = 3,
    /// Structured-wall polyethylene.
    Polyethylene = 4,
    /// Material unknown or not listed.
    Other = 5,
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pvc => write!(f, "PVC"),
            Self::Concrete => write!(f, "CONCRETE"),
            Self::VitrifiedClay => write!(f, "VITRIFIED_CLAY"),
            Self::DuctileIron => write!(f, "DUCTILE_IRON"),
            Self::Polyethylene => write!(f, "POLYETHYLENE"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

impl FromStr for Material {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PVC" => Ok(Self::Pvc),
            "CONCRETE" => Ok(Self::Concrete),
            "VITRIFIED_CLAY" => Ok(Self::VitrifiedClay),
            "DUCTILE_IRON" => Ok(Self::DuctileIron),
            "POLYETHYLENE" => Ok(Self::Polyethylene),
            "OTHER" => Ok(Self::Other),
            _ => Err(ParseEnumError::InvalidValue("Material", s.to_string())),
        }
    }
}

/// Catalog grouping used for presentation-side filtering.
///
/// Not consulted by the pricing or validation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ServiceCategory {
    /// Pipeline and network inspection.
    Inspection = 0,
    /// Cleaning of networks, tanks, and structures.
    Cleaning = 1,
    /// Maintenance and rehabilitation works.
    Maintenance = 2,
    /// Engineering consulting and supervision.
    Consulting = 3,
    /// Water supply and disposal services.
    Supply = 4,
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inspection => write!(f, "INSPECTION"),
            Self::Cleaning => write!(f, "CLEANING"),
            Self::Maintenance => write!(f, "MAINTENANCE"),
            Self::Consulting => write!(f, "CONSULTING"),
            Self::Supply => write!(f, "SUPPLY"),
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INSPECTION" => Ok(Self::Inspection),
            "CLEANING" => Ok(Self::Cleaning),
            "MAINTENANCE" => Ok(Self::Maintenance),
            "CONSULTING" => Ok(Self::Consulting),
            "SUPPLY" => Ok(Self::Supply),
            _ => Err(ParseEnumError::InvalidValue(
                "ServiceCategory",
                s.to_string(),
            )),
        }
    }
}
