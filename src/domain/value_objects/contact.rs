//! # Contact Information
//!
//! Contact fields collected on the final wizard step, plus the format
//! checks the contact validator relies on.
//!
//! Phone numbers follow the Colombian mobile convention: an optional
//! `+57` country prefix followed by ten digits, the first of which is `3`.
//! Spaces are stripped before matching.
//!
//! # Examples
//!
//! ```
//! use cotizador::domain::value_objects::contact::{is_valid_email, is_valid_phone};
//!
//! assert!(is_valid_phone("3134068858"));
//! assert!(is_valid_phone("+57 313 406 8858"));
//! assert!(!is_valid_phone("6134068858"));
//! assert!(is_valid_email("obras@acueducto.co"));
//! ```

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// Contact information entered on the contact step.
///
/// The struct itself imposes no invariants; the contact-step validator
/// reports every violated field at once so the requester can fix them in
/// a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Requester's full name (validated: trimmed length >= 3).
    pub full_name: String,
    /// Company name (validated: trimmed length >= 2).
    pub company: String,
    /// Email address (validated: RFC-style format).
    pub email: String,
    /// Colombian mobile number (validated: `(+57)?3` + nine digits).
    pub phone: String,
    /// Optional free-text message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Whether the terms were accepted; submission requires `true`.
    pub accepted_terms: bool,
}

/// Returns true if `raw` is an RFC-style valid email address.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EmailAddress::is_valid(raw.trim())
}

/// Returns true if `raw` is a valid Colombian mobile number.
///
/// Spaces are stripped first; the remainder must be an optional `+57`
/// prefix followed by exactly ten digits starting with `3`.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = stripped.strip_prefix("+57").unwrap_or(&stripped);
    digits.len() == 10 && digits.starts_with('3') && digits.bytes().all(|b| b.is_ascii_digit())
}
