//! Character class sections - uppercase, lowercase, digits, special characters.
//!
//! Classification is ASCII-only by contract: letters outside A-Z/a-z
//! contribute to length but never to a class.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::types::Criterion;

/// Scores presence of ASCII uppercase letters.
pub fn uppercase_section(password: &SecretString) -> SectionOutcome {
    class_section(
        password,
        char::is_ascii_uppercase,
        1,
        "uppercase letters",
        Criterion::Uppercase,
    )
}

/// Scores presence of ASCII lowercase letters.
pub fn lowercase_section(password: &SecretString) -> SectionOutcome {
    class_section(
        password,
        char::is_ascii_lowercase,
        1,
        "lowercase letters",
        Criterion::Lowercase,
    )
}

/// Scores presence of ASCII digits.
pub fn digit_section(password: &SecretString) -> SectionOutcome {
    class_section(password, char::is_ascii_digit, 1, "numbers", Criterion::Digit)
}

/// Scores presence of ASCII punctuation characters.
///
/// Binary for scoring, but the finding reports the count.
pub fn special_section(password: &SecretString) -> SectionOutcome {
    class_section(
        password,
        char::is_ascii_punctuation,
        2,
        "special characters",
        Criterion::Special,
    )
}

fn class_section(
    password: &SecretString,
    is_member: fn(&char) -> bool,
    points: u8,
    noun: &str,
    criterion: Criterion,
) -> SectionOutcome {
    let count = password.expose_secret().chars().filter(is_member).count();

    if count > 0 {
        SectionOutcome {
            points,
            finding: Some(format!("✓ Contains {noun} ({count})")),
            failed: None,
        }
    } else {
        SectionOutcome {
            points: 0,
            finding: Some(format!("✗ No {noun}")),
            failed: Some(criterion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_uppercase_section_reports_count() {
        let outcome = uppercase_section(&secret("AbCdE"));
        assert_eq!(outcome.points, 1);
        assert_eq!(
            outcome.finding.as_deref(),
            Some("✓ Contains uppercase letters (3)")
        );
        assert_eq!(outcome.failed, None);
    }

    #[test]
    fn test_uppercase_section_absent() {
        let outcome = uppercase_section(&secret("all lower 123"));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.finding.as_deref(), Some("✗ No uppercase letters"));
        assert_eq!(outcome.failed, Some(Criterion::Uppercase));
    }

    #[test]
    fn test_lowercase_section_reports_count() {
        let outcome = lowercase_section(&secret("aB1!c"));
        assert_eq!(outcome.points, 1);
        assert_eq!(
            outcome.finding.as_deref(),
            Some("✓ Contains lowercase letters (2)")
        );
    }

    #[test]
    fn test_digit_section_reports_count() {
        let outcome = digit_section(&secret("pass2024"));
        assert_eq!(outcome.points, 1);
        assert_eq!(outcome.finding.as_deref(), Some("✓ Contains numbers (4)"));
    }

    #[test]
    fn test_digit_section_absent() {
        let outcome = digit_section(&secret("nodigits"));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.failed, Some(Criterion::Digit));
    }

    #[test]
    fn test_special_section_scores_two_points() {
        let outcome = special_section(&secret("a!b@c"));
        assert_eq!(outcome.points, 2);
        assert_eq!(
            outcome.finding.as_deref(),
            Some("✓ Contains special characters (2)")
        );
    }

    #[test]
    fn test_special_section_absent() {
        let outcome = special_section(&secret("NoPunctuation123"));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.failed, Some(Criterion::Special));
    }

    #[test]
    fn test_whitespace_is_not_special() {
        let outcome = special_section(&secret("with spaces here"));
        assert_eq!(outcome.points, 0);
    }

    #[test]
    fn test_non_ascii_letters_belong_to_no_class() {
        let pwd = secret("ÀÉÏäöü");
        assert_eq!(uppercase_section(&pwd).points, 0);
        assert_eq!(lowercase_section(&pwd).points, 0);
        assert_eq!(digit_section(&pwd).points, 0);
        assert_eq!(special_section(&pwd).points, 0);
    }
}
