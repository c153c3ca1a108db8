//! # Quote Request
//!
//! The wizard's working state: a mutable aggregate built up across the
//! four steps and discarded after submission or reset.
//!
//! Selection is a set (duplicates impossible, order irrelevant). The
//! per-service note map deliberately keeps stale entries for deselected
//! services: they are ignored by validation and payload assembly, and
//! re-selecting a service restores its previous note.
//!
//! # Examples
//!
//! ```
//! use cotizador::application::quote_request::QuoteRequest;
//! use cotizador::domain::value_objects::ServiceId;
//!
//! let mut request = QuoteRequest::new();
//! let cctv = ServiceId::new("inspeccion-cctv");
//!
//! request.toggle_service(cctv.clone());
//! assert!(request.is_selected(&cctv));
//! request.toggle_service(cctv.clone());
//! assert!(!request.is_selected(&cctv));
//! ```

use crate::domain::value_objects::{
    ContactInfo, LinearMeters, Material, PipeDiameter, QuoteRequestId, ServiceId, Urgency,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Technical and logistical project fields collected on the details step.
///
/// Which fields are mandatory depends on the selection: the technical
/// trio (`linear_meters`, `pipe_diameter`, `material`) is required only
/// when a selected service carries the technical-requirements flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Length of the intervention; values above 100 m scale the estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linear_meters: Option<LinearMeters>,
    /// Nominal pipe diameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipe_diameter: Option<PipeDiameter>,
    /// Pipe material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    /// Municipality where the work takes place.
    pub city: String,
    /// Requested urgency tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
}

/// The complete in-progress form state across all four wizard steps.
///
/// Created empty when the wizard mounts, mutated step by step, and
/// discarded after a successful submission or an explicit reset. Never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    id: QuoteRequestId,
    created_at: DateTime<Utc>,
    selected: BTreeSet<ServiceId>,
    notes: BTreeMap<ServiceId, String>,
    /// Project details from the details step.
    pub details: ProjectDetails,
    /// Contact fields from the contact step.
    pub contact: ContactInfo,
}

impl QuoteRequest {
    /// Creates an empty request with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: QuoteRequestId::new(),
            created_at: Utc::now(),
            selected: BTreeSet::new(),
            notes: BTreeMap::new(),
            details: ProjectDetails::default(),
            contact: ContactInfo::default(),
        }
    }

    /// Returns the request id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> QuoteRequestId {
        self.id
    }

    /// Returns the creation timestamp.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Toggles a service in the selection set.
    ///
    /// Removes the id if present (leaving any note untouched), adds it
    /// otherwise. Toggling twice restores the original selection.
    pub fn toggle_service(&mut self, id: ServiceId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Returns true if the id is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: &ServiceId) -> bool {
        self.selected.contains(id)
    }

    /// Returns the selected ids.
    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<ServiceId> {
        &self.selected
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn selection_is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Stores the free-text note for a service.
    ///
    /// Notes may be written for ids that are not (or no longer) selected;
    /// such entries are stale and simply ignored downstream.
    pub fn set_note(&mut self, id: ServiceId, note: impl Into<String>) {
        self.notes.insert(id, note.into());
    }

    /// Returns the note stored for a service, selected or not.
    #[must_use]
    pub fn note_for(&self, id: &ServiceId) -> Option<&str> {
        self.notes.get(id).map(String::as_str)
    }

    /// Iterates `(id, note)` pairs for the currently selected services
    /// that have a note, skipping stale entries.
    pub fn selected_notes(&self) -> impl Iterator<Item = (&ServiceId, &str)> {
        self.selected
            .iter()
            .filter_map(|id| self.notes.get(id).map(|note| (id, note.as_str())))
    }

    /// Discards all entered data and issues a fresh request id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self::new()
    }
}
