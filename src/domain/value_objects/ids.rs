//! # Identifier Types
//!
//! Newtype identifiers for catalog services and quote requests.
//!
//! - [`ServiceId`]: string-based catalog key (kebab-case, e.g. `inspeccion-cctv`)
//! - [`QuoteRequestId`]: UUID-based identifier generated per quote request
//!
//! # Examples
//!
//! ```
//! use cotizador::domain::value_objects::ids::{QuoteRequestId, ServiceId};
//!
//! let id = ServiceId::new("inspeccion-cctv");
//! assert_eq!(id.as_str(), "inspeccion-cctv");
//!
//! let a = QuoteRequestId::new();
//! let b = QuoteRequestId::new();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// String-based identifier for a catalog service.
///
/// Service ids are the stable keys of the service catalog. They are
/// treated as opaque strings: the engine never parses or derives meaning
/// from them, and ids that do not resolve against the catalog are
/// tolerated everywhere (graceful degradation rather than failure).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Creates a service id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// UUID-based identifier for a quote request.
///
/// Generated once when the request aggregate is created and carried into
/// the submission payload for correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteRequestId(Uuid);

impl QuoteRequestId {
    /// Generates a new random (v4) request id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for QuoteRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuoteRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for QuoteRequestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
