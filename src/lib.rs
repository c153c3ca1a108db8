//! # Cotizador
//!
//! Quote engine for water and sewer network services.
//!
//! The crate drives a four-step quoting wizard over a fixed service
//! catalog: pick services, describe the project, review a live price
//! estimate, leave contact details, submit. Validation is per step with
//! every violation reported at once; forward navigation is guarded,
//! backward navigation is not; the estimate is a deterministic function
//! of the request.
//!
//! ## Architecture
//!
//! - [`domain`]: the service catalog and the value objects (ids, price
//!   bands, enums, wizard steps)
//! - [`application`]: the wizard driver, per-step validation, and the
//!   estimate calculator
//! - [`infrastructure`]: the outbound submission boundary and its HTTP
//!   adapter
//!
//! ## Example
//!
//! ```
//! use cotizador::application::QuoteWizard;
//! use cotizador::domain::value_objects::{ServiceId, Urgency, WizardStep};
//!
//! let mut wizard = QuoteWizard::with_standard_catalog();
//!
//! wizard.toggle_service(ServiceId::new("limpieza-tanques"));
//! assert_eq!(wizard.try_advance().unwrap(), WizardStep::Details);
//!
//! let details = &mut wizard.request_mut().details;
//! details.city = "Medellín".to_string();
//! details.urgency = Some(Urgency::Priority);
//! wizard.request_mut().set_note(
//!     ServiceId::new("limpieza-tanques"),
//!     "lavado y desinfección de dos tanques de 20 m³",
//! );
//! assert_eq!(wizard.try_advance().unwrap(), WizardStep::Review);
//!
//! // Live estimate on the review step.
//! let estimate = wizard.estimate();
//! assert_eq!(estimate.min, 1_080_000);
//! assert_eq!(estimate.max, 5_850_000);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{EngineError, EngineResult, QuoteWizard};
pub use domain::{ServiceCatalog, value_objects::Estimate};
pub use infrastructure::submission::{HttpSubmissionClient, SubmissionClient, SubmissionConfig};
