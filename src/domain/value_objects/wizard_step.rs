//! # Wizard Step
//!
//! Quote wizard lifecycle state machine.
//!
//! This module provides the [`WizardStep`] enum representing the linear
//! four-step quote wizard plus its terminal submitted state.
//!
//! # State Machine
//!
//! ```text
//! Services → Details → Review → Contact → Submitted
//!     ↑_________↓↑________↓↑_______↓
//! ```
//!
//! Forward transitions are guarded by the step validators (enforced by the
//! wizard driver, not by this enum); backward transitions are always
//! allowed and never re-validate. [`Submitted`](WizardStep::Submitted) is
//! terminal.
//!
//! # Examples
//!
//! ```
//! use cotizador::domain::value_objects::wizard_step::WizardStep;
//!
//! let step = WizardStep::Services;
//! assert!(step.can_transition_to(WizardStep::Details));
//! assert!(!step.can_transition_to(WizardStep::Review));
//! assert_eq!(step.previous(), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A step in the quote wizard lifecycle.
///
/// The four form steps are linearly ordered; `Submitted` is reachable only
/// from [`Contact`](WizardStep::Contact) through a successful submission.
///
/// # Examples
///
/// ```
/// use cotizador::domain::value_objects::wizard_step::WizardStep;
///
/// assert_eq!(WizardStep::Services.index(), 1);
/// assert!(WizardStep::Submitted.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum WizardStep {
    /// Step 1: service selection.
    #[default]
    Services = 1,
    /// Step 2: project details and per-service notes.
    Details = 2,
    /// Step 3: estimate review (no input validation).
    Review = 3,
    /// Step 4: contact information and terms.
    Contact = 4,
    /// The quote was acknowledged by the submission collaborator (terminal).
    Submitted = 5,
}

impl WizardStep {
    /// Returns the 1-based step index (`Submitted` is 5).
    #[inline]
    #[must_use]
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns true if this is the terminal state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Returns the next step in the forward direction, if any.
    ///
    /// Forward movement out of [`Contact`](Self::Contact) happens only via
    /// submission, so `Contact.next()` is `Some(Submitted)` while the
    /// wizard driver guards it behind the contact validator.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Services => Some(Self::Details),
            Self::Details => Some(Self::Review),
            Self::Review => Some(Self::Contact),
            Self::Contact => Some(Self::Submitted),
            Self::Submitted => None,
        }
    }

    /// Returns the previous step, if any.
    ///
    /// Backward navigation is never guarded; there is no way back out of
    /// `Submitted`.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Services | Self::Submitted => None,
            Self::Details => Some(Self::Services),
            Self::Review => Some(Self::Details),
            Self::Contact => Some(Self::Review),
        }
    }

    /// Returns true if this step can transition to the target state.
    ///
    /// Allowed moves are one step forward, one step backward (except out
    /// of `Submitted`), and `Contact → Submitted`.
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        self.next() == Some(target) || self.previous() == Some(target)
    }

    /// Returns true if input on this step is validated before advancing.
    ///
    /// `Review` performs no input validation; it only recomputes and
    /// displays the estimate.
    #[inline]
    #[must_use]
    pub const fn is_validated(&self) -> bool {
        matches!(self, Self::Services | Self::Details | Self::Contact)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Services => "SERVICES",
            Self::Details => "DETAILS",
            Self::Review => "REVIEW",
            Self::Contact => "CONTACT",
            Self::Submitted => "SUBMITTED",
        };
        write!(f, "{s}")
    }
}

/// Error returned when converting an invalid u8 to a [`WizardStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWizardStepError(
    /// The invalid u8 value.
    pub u8,
);

impl fmt::Display for InvalidWizardStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid wizard step value: {}", self.0)
    }
}

impl std::error::Error for InvalidWizardStepError {}

impl TryFrom<u8> for WizardStep {
    type Error = InvalidWizardStepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Services),
            2 => Ok(Self::Details),
            3 => Ok(Self::Review),
            4 => Ok(Self::Contact),
            5 => Ok(Self::Submitted),
            _ => Err(InvalidWizardStepError(value)),
        }
    }
}
