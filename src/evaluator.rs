//! Password strength evaluator - main assessment logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    SectionOutcome, digit_section, length_section, lowercase_section, special_section,
    uppercase_section, variety_bonus_section,
};
use crate::types::{PasswordAssessment, PasswordScore};

/// Assesses password strength and returns a detailed assessment.
///
/// Accepts any input, including the empty string, and always returns a
/// well-formed result. Sections run in a fixed order and findings are
/// appended in that order: length, uppercase, lowercase, numbers,
/// special characters, then the variety bonus when it applies.
///
/// # Arguments
/// * `password` - The password to assess
///
/// # Returns
/// A `PasswordAssessment` with score, ordered findings, and the
/// criteria that failed.
pub fn assess_password_strength(password: &SecretString) -> PasswordAssessment {
    let length = password.expose_secret().chars().count();

    let mut score: u8 = 0;
    let mut findings = Vec::new();
    let mut failed = Vec::new();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionOutcome); 6] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_section),
        ("variety", variety_bonus_section),
    ];

    for (section_name, section_fn) in sections {
        let outcome = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            section = section_name,
            points = outcome.points,
            "section evaluated"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        score += outcome.points;
        if let Some(finding) = outcome.finding {
            findings.push(finding);
        }
        if let Some(criterion) = outcome.failed {
            failed.push(criterion);
        }
    }

    let score = PasswordScore::new(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), length, "password assessed");

    PasswordAssessment {
        length,
        score,
        findings,
        failed,
    }
}
