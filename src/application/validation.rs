//! # Step Validation
//!
//! Per-step validators for the quote wizard.
//!
//! Every validator collects the FULL set of violations for its step and
//! never short-circuits: the requester sees all failing fields at once
//! and corrects them in a single pass.
//!
//! The details step uses a composed validator: a base part (city,
//! urgency), a technical sub-validator activated by a predicate over the
//! current selection (any selected service flagged as requiring technical
//! fields), and a per-service note part. Stale notes for deselected
//! services are ignored.
//!
//! # Examples
//!
//! ```
//! use cotizador::application::quote_request::QuoteRequest;
//! use cotizador::application::validation::{validate_step, Field};
//! use cotizador::domain::catalog::ServiceCatalog;
//! use cotizador::domain::value_objects::WizardStep;
//!
//! let catalog = ServiceCatalog::standard();
//! let request = QuoteRequest::new();
//!
//! let violations = validate_step(&catalog, &request, WizardStep::Services);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].field, Field::SelectedServices);
//! ```

use crate::application::quote_request::QuoteRequest;
use crate::domain::catalog::ServiceCatalog;
use crate::domain::value_objects::contact::{is_valid_email, is_valid_phone};
use crate::domain::value_objects::{ServiceId, WizardStep};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum trimmed length of a per-service note.
pub const MIN_NOTE_LEN: usize = 10;
/// Minimum trimmed length of the city field.
pub const MIN_CITY_LEN: usize = 2;
/// Minimum trimmed length of the full name field.
pub const MIN_FULL_NAME_LEN: usize = 3;
/// Minimum trimmed length of the company field.
pub const MIN_COMPANY_LEN: usize = 2;

/// A validated form field.
///
/// `ServiceNote` carries the id of the service whose note is missing or
/// too short, so the UI can attach the message to the right input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "field", content = "service_id")]
pub enum Field {
    /// The selection set of step 1.
    SelectedServices,
    /// City on the details step.
    City,
    /// Urgency on the details step.
    Urgency,
    /// Linear meters (technical sub-validator).
    LinearMeters,
    /// Pipe diameter (technical sub-validator).
    PipeDiameter,
    /// Material (technical sub-validator).
    Material,
    /// Per-service note for the given service.
    ServiceNote(ServiceId),
    /// Full name on the contact step.
    FullName,
    /// Company on the contact step.
    Company,
    /// Email on the contact step.
    Email,
    /// Phone on the contact step.
    Phone,
    /// Terms acceptance on the contact step.
    AcceptedTerms,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectedServices => write!(f, "selected_services"),
            Self::City => write!(f, "city"),
            Self::Urgency => write!(f, "urgency"),
            Self::LinearMeters => write!(f, "linear_meters"),
            Self::PipeDiameter => write!(f, "pipe_diameter"),
            Self::Material => write!(f, "material"),
            Self::ServiceNote(id) => write!(f, "note[{id}]"),
            Self::FullName => write!(f, "full_name"),
            Self::Company => write!(f, "company"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
            Self::AcceptedTerms => write!(f, "accepted_terms"),
        }
    }
}

/// A single per-field validation failure.
///
/// Always recoverable locally: the requester corrects the input and
/// advances again. Never surfaced as a top-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The failing field.
    pub field: Field,
    /// Human-readable correction hint.
    pub message: String,
}

impl FieldViolation {
    /// Creates a violation for a field.
    #[must_use]
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates the given step against the request.
///
/// Returns the full list of violations; an empty list means the step
/// passes. `Review` always passes and `Submitted` has no inputs left to
/// validate.
#[must_use]
pub fn validate_step(
    catalog: &ServiceCatalog,
    request: &QuoteRequest,
    step: WizardStep,
) -> Vec<FieldViolation> {
    match step {
        WizardStep::Services => validate_services(request),
        WizardStep::Details => DetailsValidator::new(catalog).validate(request),
        WizardStep::Review | WizardStep::Submitted => Vec::new(),
        WizardStep::Contact => validate_contact(request),
    }
}

/// Step 1: the selection must be non-empty.
#[must_use]
pub fn validate_services(request: &QuoteRequest) -> Vec<FieldViolation> {
    if request.selection_is_empty() {
        vec![FieldViolation::new(
            Field::SelectedServices,
            "select at least one service",
        )]
    } else {
        Vec::new()
    }
}

/// Composed validator for the details step.
///
/// Base checks always run; the technical sub-validator runs only when the
/// selection predicate holds; the note checks run once per selected
/// service. All parts append to the same violation list.
#[derive(Debug, Clone, Copy)]
pub struct DetailsValidator<'a> {
    catalog: &'a ServiceCatalog,
}

impl<'a> DetailsValidator<'a> {
    /// Creates a details validator over the given catalog.
    #[must_use]
    pub const fn new(catalog: &'a ServiceCatalog) -> Self {
        Self { catalog }
    }

    /// Runs all parts and returns every violation found.
    #[must_use]
    pub fn validate(&self, request: &QuoteRequest) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        self.base(request, &mut violations);
        if self.technical_fields_required(request) {
            self.technical(request, &mut violations);
        }
        self.notes(request, &mut violations);
        violations
    }

    /// Predicate activating the technical sub-validator.
    #[must_use]
    pub fn technical_fields_required(&self, request: &QuoteRequest) -> bool {
        self.catalog
            .any_requires_technical_fields(request.selected().iter())
    }

    fn base(&self, request: &QuoteRequest, violations: &mut Vec<FieldViolation>) {
        if request.details.city.trim().chars().count() < MIN_CITY_LEN {
            violations.push(FieldViolation::new(
                Field::City,
                "enter the city of the project (at least 2 characters)",
            ));
        }
        if request.details.urgency.is_none() {
            violations.push(FieldViolation::new(
                Field::Urgency,
                "select an urgency level",
            ));
        }
    }

    fn technical(&self, request: &QuoteRequest, violations: &mut Vec<FieldViolation>) {
        match request.details.linear_meters {
            Some(lm) if lm.get() >= Decimal::ONE => {}
            _ => violations.push(FieldViolation::new(
                Field::LinearMeters,
                "enter the length of the intervention (at least 1 linear meter)",
            )),
        }
        if request.details.pipe_diameter.is_none() {
            violations.push(FieldViolation::new(
                Field::PipeDiameter,
                "select the pipe diameter",
            ));
        }
        if request.details.material.is_none() {
            violations.push(FieldViolation::new(
                Field::Material,
                "select the pipe material",
            ));
        }
    }

    fn notes(&self, request: &QuoteRequest, violations: &mut Vec<FieldViolation>) {
        for id in request.selected() {
            let ok = request
                .note_for(id)
                .is_some_and(|note| note.trim().chars().count() >= MIN_NOTE_LEN);
            if !ok {
                violations.push(FieldViolation::new(
                    Field::ServiceNote(id.clone()),
                    "describe the work for this service (at least 10 characters)",
                ));
            }
        }
    }
}

/// Step 4: contact fields and terms acceptance.
#[must_use]
pub fn validate_contact(request: &QuoteRequest) -> Vec<FieldViolation> {
    let contact = &request.contact;
    let mut violations = Vec::new();

    if contact.full_name.trim().chars().count() < MIN_FULL_NAME_LEN {
        violations.push(FieldViolation::new(
            Field::FullName,
            "enter your full name (at least 3 characters)",
        ));
    }
    if contact.company.trim().chars().count() < MIN_COMPANY_LEN {
        violations.push(FieldViolation::new(
            Field::Company,
            "enter your company name (at least 2 characters)",
        ));
    }
    if !is_valid_email(&contact.email) {
        violations.push(FieldViolation::new(
            Field::Email,
            "enter a valid email address",
        ));
    }
    if !is_valid_phone(&contact.phone) {
        violations.push(FieldViolation::new(
            Field::Phone,
            "enter a valid Colombian mobile number (optional +57, then 10 digits starting with 3)",
        ));
    }
    if !contact.accepted_terms {
        violations.push(FieldViolation::new(
            Field::AcceptedTerms,
            "accept the data-processing terms to submit",
        ));
    }
    violations
}
