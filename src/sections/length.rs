//! Length section - scores password length tiers.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::types::Criterion;

const EXCELLENT_LENGTH: usize = 12;
const GOOD_LENGTH: usize = 8;
const WEAK_LENGTH: usize = 6;

/// Scores the password by length tier.
///
/// Length is counted in Unicode scalar values. Anything under 12
/// characters is flagged for remediation, even when the tier scores.
pub fn length_section(password: &SecretString) -> SectionOutcome {
    let length = password.expose_secret().chars().count();

    let (points, finding) = if length >= EXCELLENT_LENGTH {
        (3, "✓ Excellent length (12+ characters)")
    } else if length >= GOOD_LENGTH {
        (2, "✓ Good length (8-11 characters)")
    } else if length >= WEAK_LENGTH {
        (1, "⚠ Weak length (6-7 characters)")
    } else {
        (0, "✗ Too short (less than 6 characters)")
    };

    SectionOutcome {
        points,
        finding: Some(finding.to_string()),
        failed: (length < EXCELLENT_LENGTH).then_some(Criterion::Length),
    }
}
