//! # Service Catalog
//!
//! Static read-only table of quotable services.
//!
//! The catalog is the engine's process-wide configuration: it owns the
//! service records, the price table, and the technical-field requirement
//! flags. It is constructed once ([`ServiceCatalog::standard`]) and
//! injected into the wizard; there are no mutation operations.
//!
//! Lookups by unknown id return `None` rather than an error: the wizard
//! must tolerate stale ids gracefully (a deselected or renamed service
//! degrades to "name unknown", it never aborts the flow).
//!
//! # Examples
//!
//! ```
//! use cotizador::domain::catalog::ServiceCatalog;
//! use cotizador::domain::value_objects::ServiceId;
//!
//! let catalog = ServiceCatalog::standard();
//! assert_eq!(catalog.len(), 11);
//!
//! let cctv = catalog.lookup(&ServiceId::new("inspeccion-cctv")).unwrap();
//! assert!(cctv.requires_technical_fields);
//! assert!(catalog.lookup(&ServiceId::new("no-such-service")).is_none());
//! ```

use crate::domain::value_objects::{PriceRange, ServiceCategory, ServiceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog entry: one quotable service offering.
///
/// Services are immutable and loaded at startup; they are never created,
/// mutated, or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique catalog key.
    pub id: ServiceId,
    /// Human-readable name, used in the submission payload.
    pub name: String,
    /// One-line description for presentation.
    pub short_description: String,
    /// Grouping for presentation-side filtering.
    pub category: ServiceCategory,
    /// Whether selecting this service forces the technical detail fields.
    pub requires_technical_fields: bool,
    /// Price band contributed to the estimate; `None` means the service
    /// is priced on request and contributes nothing.
    pub price_range: Option<PriceRange>,
}

/// Immutable catalog of [`Service`] records plus an id index.
///
/// Iteration order ([`list_all`](Self::list_all)) is the catalog
/// (presentation) order and is stable.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
    index: HashMap<ServiceId, usize>,
}

impl ServiceCatalog {
    /// Builds a catalog from an ordered list of services.
    ///
    /// Later entries shadow earlier ones with the same id in the index;
    /// the standard catalog has no duplicates, which a test asserts.
    #[must_use]
    pub fn from_services(services: Vec<Service>) -> Self {
        let index = services
            .iter()
            .enumerate()
            .map(|(position, service)| (service.id.clone(), position))
            .collect();
        Self { services, index }
    }

    /// The standard 11-entry catalog of the reference deployment.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_services(vec![
            Service {
                id: ServiceId::new("inspeccion-cctv"),
                name: "Inspección CCTV de redes".to_string(),
                short_description: "Inspección televisada de redes de acueducto y alcantarillado"
                    .to_string(),
                category: ServiceCategory::Inspection,
                requires_technical_fields: true,
                price_range: Some(cop(800_000, 5_000_000)),
            },
            Service {
                id: ServiceId::new("servicios-vactor"),
                name: "Servicios Vactor".to_string(),
                short_description: "Succión y lavado a presión con equipo Vactor".to_string(),
                category: ServiceCategory::Cleaning,
                requires_technical_fields: true,
                price_range: Some(cop(600_000, 4_000_000)),
            },
            Service {
                id: ServiceId::new("limpieza-alcantarillado"),
                name: "Limpieza de alcantarillado".to_string(),
                short_description: "Limpieza y desobstrucción de colectores y sumideros"
                    .to_string(),
                category: ServiceCategory::Cleaning,
                requires_technical_fields: true,
                price_range: Some(cop(500_000, 3_500_000)),
            },
            Service {
                id: ServiceId::new("sondeo-redes"),
                name: "Sondeo de redes".to_string(),
                short_description: "Sondeo mecánico de tuberías y cajas de inspección".to_string(),
                category: ServiceCategory::Maintenance,
                requires_technical_fields: true,
                price_range: Some(cop(400_000, 2_500_000)),
            },
            Service {
                id: ServiceId::new("pruebas-hermeticidad"),
                name: "Pruebas de hermeticidad".to_string(),
                short_description: "Pruebas de estanqueidad en redes nuevas y existentes"
                    .to_string(),
                category: ServiceCategory::Inspection,
                requires_technical_fields: true,
                price_range: Some(cop(700_000, 3_000_000)),
            },
            Service {
                id: ServiceId::new("rehabilitacion-tuberias"),
                name: "Rehabilitación de tuberías".to_string(),
                short_description: "Rehabilitación sin zanja de tuberías deterioradas".to_string(),
                category: ServiceCategory::Maintenance,
                requires_technical_fields: true,
                price_range: Some(cop(2_000_000, 15_000_000)),
            },
            Service {
                id: ServiceId::new("limpieza-tanques"),
                name: "Limpieza y desinfección de tanques".to_string(),
                short_description: "Lavado y desinfección certificada de tanques de almacenamiento"
                    .to_string(),
                category: ServiceCategory::Cleaning,
                requires_technical_fields: false,
                price_range: Some(cop(900_000, 4_500_000)),
            },
            Service {
                id: ServiceId::new("suministro-agua"),
                name: "Suministro de agua potable".to_string(),
                short_description: "Suministro de agua potable en carrotanque".to_string(),
                category: ServiceCategory::Supply,
                requires_technical_fields: false,
                price_range: Some(cop(350_000, 1_800_000)),
            },
            Service {
                id: ServiceId::new("disposicion-aguas-residuales"),
                name: "Disposición de aguas residuales".to_string(),
                short_description: "Transporte y disposición autorizada de aguas residuales"
                    .to_string(),
                category: ServiceCategory::Supply,
                requires_technical_fields: false,
                price_range: Some(cop(450_000, 2_200_000)),
            },
            Service {
                id: ServiceId::new("diseno-hidraulico"),
                name: "Diseño hidráulico".to_string(),
                short_description: "Diseño y modelación de redes hidráulicas y sanitarias"
                    .to_string(),
                category: ServiceCategory::Consulting,
                requires_technical_fields: false,
                price_range: Some(cop(1_500_000, 8_000_000)),
            },
            Service {
                id: ServiceId::new("interventoria"),
                name: "Interventoría de obras".to_string(),
                short_description: "Interventoría técnica y administrativa de obras hidráulicas"
                    .to_string(),
                category: ServiceCategory::Consulting,
                requires_technical_fields: false,
                // Priced per engagement; contributes nothing to the estimate.
                price_range: None,
            },
        ])
    }

    /// Looks up a service by id.
    ///
    /// Returns `None` for unknown ids; never an error.
    #[must_use]
    pub fn lookup(&self, id: &ServiceId) -> Option<&Service> {
        self.index.get(id).map(|&position| &self.services[position])
    }

    /// Returns all services in stable catalog order.
    #[must_use]
    pub fn list_all(&self) -> &[Service] {
        &self.services
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Returns true if any of the given ids resolves to a service that
    /// requires the technical detail fields.
    ///
    /// Unknown ids contribute nothing to the predicate.
    pub fn any_requires_technical_fields<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a ServiceId>,
    ) -> bool {
        ids.into_iter()
            .filter_map(|id| self.lookup(id))
            .any(|service| service.requires_technical_fields)
    }

    /// Resolves the human-readable name for an id, if known.
    #[must_use]
    pub fn resolve_name(&self, id: &ServiceId) -> Option<&str> {
        self.lookup(id).map(|service| service.name.as_str())
    }

    /// Returns the price band for an id, if the service exists and is priced.
    #[must_use]
    pub fn price_range(&self, id: &ServiceId) -> Option<PriceRange> {
        self.lookup(id).and_then(|service| service.price_range)
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builds a whole-COP price range for the static tables above.
///
/// The literals are fixed catalog data; a test walks the standard catalog
/// and re-checks every band against the [`PriceRange`] invariant.
fn cop(min: i64, max: i64) -> PriceRange {
    #[allow(clippy::expect_used)]
    PriceRange::from_cop(min, max).expect("static catalog price range")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_eleven_entries() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(catalog.len(), 11);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn standard_catalog_ids_are_unique() {
        let catalog = ServiceCatalog::standard();
        let ids: HashSet<_> = catalog.list_all().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn standard_catalog_price_bands_are_valid() {
        let catalog = ServiceCatalog::standard();
        for service in catalog.list_all() {
            if let Some(range) = service.price_range {
                assert!(range.min() >= Decimal::ZERO, "{}", service.id);
                assert!(range.min() <= range.max(), "{}", service.id);
            }
        }
    }

    #[test]
    fn list_all_preserves_catalog_order() {
        let catalog = ServiceCatalog::standard();
        let first = &catalog.list_all()[0];
        assert_eq!(first.id.as_str(), "inspeccion-cctv");
        let last = catalog.list_all().last().unwrap();
        assert_eq!(last.id.as_str(), "interventoria");
    }

    #[test]
    fn lookup_known_service() {
        let catalog = ServiceCatalog::standard();
        let vactor = catalog.lookup(&ServiceId::new("servicios-vactor")).unwrap();
        assert!(vactor.requires_technical_fields);
        let range = vactor.price_range.unwrap();
        assert_eq!(range.min(), Decimal::from(600_000));
        assert_eq!(range.max(), Decimal::from(4_000_000));
    }

    #[test]
    fn lookup_unknown_returns_none() {
        let catalog = ServiceCatalog::standard();
        assert!(catalog.lookup(&ServiceId::new("no-such-service")).is_none());
        assert!(catalog.resolve_name(&ServiceId::new("no-such-service")).is_none());
        assert!(catalog.price_range(&ServiceId::new("no-such-service")).is_none());
    }

    #[test]
    fn unpriced_service_has_no_band() {
        let catalog = ServiceCatalog::standard();
        let id = ServiceId::new("interventoria");
        assert!(catalog.lookup(&id).is_some());
        assert!(catalog.price_range(&id).is_none());
    }

    #[test]
    fn technical_fields_predicate() {
        let catalog = ServiceCatalog::standard();
        let cctv = ServiceId::new("inspeccion-cctv");
        let tanks = ServiceId::new("limpieza-tanques");
        let unknown = ServiceId::new("no-such-service");

        assert!(catalog.any_requires_technical_fields([&cctv]));
        assert!(!catalog.any_requires_technical_fields([&tanks]));
        assert!(catalog.any_requires_technical_fields([&tanks, &cctv]));
        // Unknown ids contribute nothing.
        assert!(!catalog.any_requires_technical_fields([&unknown]));
        assert!(!catalog.any_requires_technical_fields(std::iter::empty::<&ServiceId>()));
    }

    #[test]
    fn resolve_name_known() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(
            catalog.resolve_name(&ServiceId::new("inspeccion-cctv")),
            Some("Inspección CCTV de redes")
        );
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(ServiceCatalog::default().len(), 11);
    }
}
