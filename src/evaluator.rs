//! Password strength evaluator - runs the sections and renders a verdict.

use secrecy::SecretString;

use crate::blacklist::Blacklist;
use crate::sections::{blacklist_section, length_section, SectionResult};

/// Outcome of a single evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// One entry per failed section, in section order.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn is_strong(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Evaluates a password against every section and collects the failures.
pub fn evaluate_password(password: &SecretString, blacklist: &Blacklist) -> PasswordEvaluation {
    let sections: [(&str, fn(&SecretString, &Blacklist) -> SectionResult); 2] = [
        ("length", length_section),
        ("blacklist", blacklist_section),
    ];

    let mut reasons = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(reason) = section_fn(password, blacklist) {
            #[cfg(feature = "tracing")]
            tracing::debug!(section = _section_name, "password section failed");
            reasons.push(reason);
        }
    }

    PasswordEvaluation { reasons }
}

/// Returns `true` when `password` has at least
/// [`MIN_LENGTH`](crate::MIN_LENGTH) characters and is not an exact entry
/// of `disallowed`.
pub fn is_strong(password: &str, disallowed: &Blacklist) -> bool {
    let password = SecretString::new(password.into());
    evaluate_password(&password, disallowed).is_strong()
}
