//! # Quote Wizard
//!
//! The wizard driver: owns the quote request, the current step, and the
//! submission guard, and enforces the forward-guarded / backward-unguarded
//! navigation contract.
//!
//! - Forward: [`try_advance`](QuoteWizard::try_advance) runs the current
//!   step's validator and only moves on a clean pass.
//! - Backward: [`go_back`](QuoteWizard::go_back) never validates.
//! - Submission: [`submit`](QuoteWizard::submit) is the only path into
//!   the terminal state and the only asynchronous operation; one request
//!   may be in flight at a time, and failure leaves every entered field
//!   untouched.
//!
//! # Examples
//!
//! ```
//! use cotizador::application::wizard::QuoteWizard;
//! use cotizador::domain::value_objects::{ServiceId, WizardStep};
//!
//! let mut wizard = QuoteWizard::with_standard_catalog();
//! assert_eq!(wizard.step(), WizardStep::Services);
//!
//! // Nothing selected yet: the services validator blocks the move.
//! assert!(wizard.try_advance().is_err());
//!
//! wizard.toggle_service(ServiceId::new("limpieza-tanques"));
//! assert_eq!(wizard.try_advance().unwrap(), WizardStep::Details);
//! ```

use crate::application::error::{EngineError, EngineResult};
use crate::application::estimate::EstimateCalculator;
use crate::application::quote_request::QuoteRequest;
use crate::application::validation::{validate_contact, validate_step};
use crate::domain::catalog::ServiceCatalog;
use crate::domain::value_objects::{Estimate, ServiceId, WizardStep};
use crate::infrastructure::submission::{QuoteSubmission, SelectedService, SubmissionClient};
use chrono::Utc;
use std::sync::Arc;

/// Drives one quote request through the four wizard steps to submission.
#[derive(Debug, Clone)]
pub struct QuoteWizard {
    catalog: Arc<ServiceCatalog>,
    request: QuoteRequest,
    step: WizardStep,
    is_submitting: bool,
}

impl QuoteWizard {
    /// Creates a wizard over the given catalog with an empty request.
    #[must_use]
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self {
            catalog,
            request: QuoteRequest::new(),
            step: WizardStep::Services,
            is_submitting: false,
        }
    }

    /// Creates a wizard over the standard catalog.
    #[must_use]
    pub fn with_standard_catalog() -> Self {
        Self::new(Arc::new(ServiceCatalog::standard()))
    }

    /// Returns the current step.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the catalog the wizard was built over.
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Returns the in-progress request.
    #[inline]
    #[must_use]
    pub const fn request(&self) -> &QuoteRequest {
        &self.request
    }

    /// Returns the in-progress request for mutation.
    ///
    /// Mutating earlier steps' data while on a later step is allowed;
    /// already-passed steps are never re-validated on the way back.
    #[inline]
    pub const fn request_mut(&mut self) -> &mut QuoteRequest {
        &mut self.request
    }

    /// Toggles a service in the selection set.
    pub fn toggle_service(&mut self, id: ServiceId) {
        self.request.toggle_service(id);
    }

    /// Returns true if a submission request is currently in flight.
    #[inline]
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Recomputes the live estimate for the current request.
    ///
    /// Used on the review step and again at submission time; for an
    /// unchanged request both computations agree.
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        EstimateCalculator::new(&self.catalog).compute(&self.request)
    }

    /// Validates the current step without moving.
    #[must_use]
    pub fn validate_current_step(&self) -> Vec<crate::application::validation::FieldViolation> {
        validate_step(&self.catalog, &self.request, self.step)
    }

    /// Advances to the next step if the current step's validator passes.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] with the full violation list if the
    ///   current step fails validation.
    /// - [`EngineError::InvalidTransition`] from `Contact` (submission is
    ///   an explicit operation, see [`submit`](Self::submit)) and from
    ///   `Submitted`.
    pub fn try_advance(&mut self) -> EngineResult<WizardStep> {
        let next = self.step.next().unwrap_or(self.step);
        if next == WizardStep::Submitted || next == self.step {
            return Err(EngineError::invalid_transition(self.step, next));
        }

        let violations = validate_step(&self.catalog, &self.request, self.step);
        if !violations.is_empty() {
            return Err(EngineError::validation(violations));
        }

        tracing::debug!(from = %self.step, to = %next, "wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Moves one step back without re-validating anything.
    ///
    /// A no-op on the first step; there is no way back out of
    /// `Submitted`. Returns the step after the move.
    pub fn go_back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            tracing::debug!(from = %self.step, to = %previous, "wizard moved back");
            self.step = previous;
        }
        self.step
    }

    /// Submits the quote to the collaborator.
    ///
    /// Only callable on the contact step, after its validator passes. On
    /// a success acknowledgment the wizard transitions to `Submitted`; on
    /// any failure the step and every entered field are preserved and the
    /// error is surfaced for a retry.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidTransition`] when not on the contact step.
    /// - [`EngineError::SubmissionInFlight`] when a request is already
    ///   outstanding.
    /// - [`EngineError::Validation`] if the contact step fails validation.
    /// - [`EngineError::Submission`] on any transport failure or
    ///   non-success acknowledgment (retryable).
    pub async fn submit(&mut self, client: &dyn SubmissionClient) -> EngineResult<()> {
        if self.step != WizardStep::Contact {
            return Err(EngineError::invalid_transition(
                self.step,
                WizardStep::Submitted,
            ));
        }
        if self.is_submitting {
            return Err(EngineError::SubmissionInFlight);
        }
        let violations = validate_contact(&self.request);
        if !violations.is_empty() {
            return Err(EngineError::validation(violations));
        }

        let payload = self.build_payload();
        tracing::info!(
            request_id = %payload.request_id,
            services = payload.selected_services.len(),
            estimate = %payload.estimate,
            "submitting quote request"
        );

        let outcome = {
            let _guard = InFlightGuard::arm(&mut self.is_submitting);
            client.submit(&payload).await
        };

        match outcome {
            Ok(()) => {
                tracing::info!(request_id = %payload.request_id, "quote request accepted");
                self.step = WizardStep::Submitted;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(request_id = %payload.request_id, error = %error, "quote submission failed");
                Err(error.into())
            }
        }
    }

    /// Discards the request and returns to the first step.
    ///
    /// Used after a successful submission to start a new quote, or to
    /// abandon the current one.
    pub fn reset(&mut self) {
        self.request.reset();
        self.step = WizardStep::Services;
        self.is_submitting = false;
    }

    /// Assembles the outbound payload from the current request.
    ///
    /// Selected ids that no longer resolve against the catalog are sent
    /// without a name; stale notes are excluded.
    fn build_payload(&self) -> QuoteSubmission {
        let selected_services = self
            .request
            .selected()
            .iter()
            .map(|id| {
                let name = self.catalog.resolve_name(id).map(str::to_string);
                if name.is_none() {
                    tracing::warn!(service_id = %id, "selected service unknown to catalog");
                }
                SelectedService {
                    id: id.clone(),
                    name,
                }
            })
            .collect();

        let service_notes = self
            .request
            .selected_notes()
            .map(|(id, note)| (id.clone(), note.to_string()))
            .collect();

        QuoteSubmission {
            request_id: self.request.id(),
            submitted_at: Utc::now(),
            selected_services,
            project_details: self.request.details.clone(),
            service_notes,
            contact: self.request.contact.clone(),
            estimate: self.estimate(),
        }
    }
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::with_standard_catalog()
    }
}

/// Holds the in-flight flag for the lifetime of one submission attempt.
///
/// Clearing on drop keeps the flag accurate even when the submit future
/// is dropped mid-await instead of running to completion.
struct InFlightGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> InFlightGuard<'a> {
    fn arm(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::validation::Field;
    use crate::domain::value_objects::money::LinearMeters;
    use crate::domain::value_objects::{Material, PipeDiameter, Urgency};
    use crate::infrastructure::submission::error::{SubmissionError, SubmissionResult};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    fn id(s: &str) -> ServiceId {
        ServiceId::new(s)
    }

    /// Routes the engine's log events through the test writer so the
    /// transition and submission events are exercised under test.
    fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("cotizador=debug")
            .with_test_writer()
            .try_init();
    }

    /// Records every payload it receives and always acknowledges.
    #[derive(Default)]
    struct RecordingClient {
        payloads: Mutex<Vec<QuoteSubmission>>,
    }

    impl RecordingClient {
        fn received(&self) -> Vec<QuoteSubmission> {
            self.payloads.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmissionClient for RecordingClient {
        async fn submit(&self, payload: &QuoteSubmission) -> SubmissionResult<()> {
            self.payloads.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    /// Always fails with a retryable error.
    struct FailingClient;

    #[async_trait]
    impl SubmissionClient for FailingClient {
        async fn submit(&self, _payload: &QuoteSubmission) -> SubmissionResult<()> {
            Err(SubmissionError::rejected_status(502))
        }
    }

    /// Never resolves; stands in for a transport stuck mid-request.
    struct StalledClient;

    #[async_trait]
    impl SubmissionClient for StalledClient {
        async fn submit(&self, _payload: &QuoteSubmission) -> SubmissionResult<()> {
            std::future::pending().await
        }
    }

    /// Drives a wizard to the contact step with everything filled in.
    fn wizard_at_contact() -> QuoteWizard {
        init_test_tracing();
        let mut wizard = QuoteWizard::with_standard_catalog();
        wizard.toggle_service(id("inspeccion-cctv"));
        wizard.toggle_service(id("servicios-vactor"));
        assert_eq!(wizard.try_advance().unwrap(), WizardStep::Details);

        let request = wizard.request_mut();
        request.details.city = "Bogotá".to_string();
        request.details.urgency = Some(Urgency::Normal);
        request.details.linear_meters = Some(LinearMeters::new(Decimal::from(150)).unwrap());
        request.details.pipe_diameter = Some(PipeDiameter::In10);
        request.details.material = Some(Material::Concrete);
        request.set_note(id("inspeccion-cctv"), "inspección del colector norte");
        request.set_note(id("servicios-vactor"), "succión del pozo de la calle 80");
        assert_eq!(wizard.try_advance().unwrap(), WizardStep::Review);
        assert_eq!(wizard.try_advance().unwrap(), WizardStep::Contact);

        let contact = &mut wizard.request_mut().contact;
        contact.full_name = "María Gómez".to_string();
        contact.company = "Constructora Andina".to_string();
        contact.email = "maria@andina.co".to_string();
        contact.phone = "+573134068858".to_string();
        contact.accepted_terms = true;
        wizard
    }

    mod navigation {
        use super::*;

        #[test]
        fn starts_at_services() {
            let wizard = QuoteWizard::with_standard_catalog();
            assert_eq!(wizard.step(), WizardStep::Services);
            assert!(!wizard.is_submitting());
        }

        #[test]
        fn advance_blocked_by_empty_selection() {
            let mut wizard = QuoteWizard::with_standard_catalog();
            let err = wizard.try_advance().unwrap_err();
            assert_eq!(
                err.violations().unwrap()[0].field,
                Field::SelectedServices
            );
            assert_eq!(wizard.step(), WizardStep::Services);
        }

        #[test]
        fn review_step_always_advances() {
            let mut wizard = wizard_at_contact();
            // Walk back to Review and forward again; Review has no validator.
            wizard.go_back();
            assert_eq!(wizard.step(), WizardStep::Review);
            assert_eq!(wizard.try_advance().unwrap(), WizardStep::Contact);
        }

        #[test]
        fn backward_navigation_never_revalidates() {
            let mut wizard = wizard_at_contact();

            // Invalidate step-1 and step-2 data after the fact.
            let selected: Vec<_> = wizard.request().selected().iter().cloned().collect();
            for service in selected {
                wizard.toggle_service(service);
            }
            wizard.request_mut().details.city.clear();

            assert_eq!(wizard.go_back(), WizardStep::Review);
            assert_eq!(wizard.go_back(), WizardStep::Details);
            assert_eq!(wizard.go_back(), WizardStep::Services);
        }

        #[test]
        fn go_back_is_noop_on_first_step() {
            let mut wizard = QuoteWizard::with_standard_catalog();
            assert_eq!(wizard.go_back(), WizardStep::Services);
        }

        #[test]
        fn advance_from_contact_is_rejected() {
            let mut wizard = wizard_at_contact();
            let err = wizard.try_advance().unwrap_err();
            assert!(matches!(
                err,
                EngineError::InvalidTransition {
                    from: WizardStep::Contact,
                    to: WizardStep::Submitted,
                }
            ));
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn happy_path_reaches_submitted() {
            let mut wizard = wizard_at_contact();
            let client = RecordingClient::default();

            wizard.submit(&client).await.unwrap();
            assert_eq!(wizard.step(), WizardStep::Submitted);
            assert!(!wizard.is_submitting());

            let payloads = client.received();
            assert_eq!(payloads.len(), 1);
            let payload = &payloads[0];
            assert_eq!(payload.request_id, wizard.request().id());
            assert_eq!(payload.selected_services.len(), 2);
            assert!(payload
                .selected_services
                .iter()
                .all(|service| service.name.is_some()));
            assert_eq!(payload.service_notes.len(), 2);
            assert_eq!(payload.contact.full_name, "María Gómez");
        }

        #[tokio::test]
        async fn payload_estimate_matches_review_estimate() {
            let mut wizard = wizard_at_contact();
            let client = RecordingClient::default();

            // cctv + vactor, 150 m, normal: {1'470'000, 13'500'000}.
            let reviewed = wizard.estimate();
            assert_eq!(reviewed, Estimate::new(1_470_000, 13_500_000));

            wizard.submit(&client).await.unwrap();
            assert_eq!(client.received()[0].estimate, reviewed);
        }

        #[tokio::test]
        async fn failure_preserves_state_and_data() {
            let mut wizard = wizard_at_contact();

            let err = wizard.submit(&FailingClient).await.unwrap_err();
            assert!(err.is_retryable());
            assert_eq!(wizard.step(), WizardStep::Contact);
            assert!(!wizard.is_submitting());
            // Entered data survives for the retry.
            assert_eq!(wizard.request().contact.full_name, "María Gómez");
            assert_eq!(wizard.request().selected().len(), 2);

            // And the retry can succeed.
            let client = RecordingClient::default();
            wizard.submit(&client).await.unwrap();
            assert_eq!(wizard.step(), WizardStep::Submitted);
        }

        #[tokio::test]
        async fn unaccepted_terms_never_submit() {
            let mut wizard = wizard_at_contact();
            wizard.request_mut().contact.accepted_terms = false;

            let client = RecordingClient::default();
            let err = wizard.submit(&client).await.unwrap_err();
            assert_eq!(
                err.violations().unwrap()[0].field,
                Field::AcceptedTerms
            );
            assert_eq!(wizard.step(), WizardStep::Contact);
            assert!(client.received().is_empty());
        }

        #[tokio::test]
        async fn submit_off_contact_step_is_rejected() {
            let mut wizard = QuoteWizard::with_standard_catalog();
            let client = RecordingClient::default();
            let err = wizard.submit(&client).await.unwrap_err();
            assert!(matches!(err, EngineError::InvalidTransition { .. }));
            assert!(client.received().is_empty());
        }

        #[tokio::test]
        async fn unknown_service_degrades_to_nameless_entry() {
            let mut wizard = wizard_at_contact();
            wizard.toggle_service(id("servicio-fantasma"));
            wizard
                .request_mut()
                .set_note(id("servicio-fantasma"), "nota del servicio fantasma");

            let client = RecordingClient::default();
            wizard.submit(&client).await.unwrap();

            let payload = &client.received()[0];
            assert_eq!(payload.selected_services.len(), 3);
            let ghost = payload
                .selected_services
                .iter()
                .find(|service| service.id == id("servicio-fantasma"))
                .unwrap();
            assert!(ghost.name.is_none());
        }

        #[tokio::test]
        async fn dropped_submit_future_releases_the_guard() {
            use std::task::{Context, Poll, Waker};

            let mut wizard = wizard_at_contact();
            {
                let mut fut = Box::pin(wizard.submit(&StalledClient));
                let mut cx = Context::from_waker(Waker::noop());
                assert!(matches!(fut.as_mut().poll(&mut cx), Poll::Pending));
                // Dropped here, mid-await.
            }
            assert!(!wizard.is_submitting());

            // A fresh attempt goes through.
            let client = RecordingClient::default();
            wizard.submit(&client).await.unwrap();
            assert_eq!(wizard.step(), WizardStep::Submitted);
        }

        #[tokio::test]
        async fn stale_notes_are_excluded_from_payload() {
            let mut wizard = wizard_at_contact();
            wizard
                .request_mut()
                .set_note(id("limpieza-tanques"), "nota de un servicio deseleccionado");

            let client = RecordingClient::default();
            wizard.submit(&client).await.unwrap();

            let payload = &client.received()[0];
            assert!(!payload.service_notes.contains_key(&id("limpieza-tanques")));
            assert_eq!(payload.service_notes.len(), 2);
        }
    }

    mod lifecycle {
        use super::*;

        #[tokio::test]
        async fn reset_after_submission_starts_fresh() {
            let mut wizard = wizard_at_contact();
            let client = RecordingClient::default();
            wizard.submit(&client).await.unwrap();

            let submitted_id = wizard.request().id();
            wizard.reset();
            assert_eq!(wizard.step(), WizardStep::Services);
            assert!(wizard.request().selection_is_empty());
            assert_ne!(wizard.request().id(), submitted_id);
        }

        #[test]
        fn estimate_on_empty_wizard_is_zero() {
            let wizard = QuoteWizard::with_standard_catalog();
            assert_eq!(wizard.estimate(), Estimate::zero());
        }

        #[test]
        fn validate_current_step_reports_without_moving() {
            let wizard = QuoteWizard::with_standard_catalog();
            let violations = wizard.validate_current_step();
            assert_eq!(violations.len(), 1);
            assert_eq!(wizard.step(), WizardStep::Services);
        }
    }
}
