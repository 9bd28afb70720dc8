//! Variety bonus section - rewards mixing character classes.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;

/// Awards a bonus when 3 or 4 of the character classes are present.
///
/// Two classes or fewer earn nothing and emit no finding.
pub fn variety_bonus_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| c.is_ascii_punctuation());

    let variety_count = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count();

    let (points, finding) = match variety_count {
        4 => (2, Some("✓ Excellent variety (all character types)")),
        3 => (1, Some("✓ Good variety (3 character types)")),
        _ => (0, None),
    };

    SectionOutcome {
        points,
        finding: finding.map(str::to_string),
        failed: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_all_four_classes() {
        let outcome = variety_bonus_section(&secret("Ab1!"));
        assert_eq!(outcome.points, 2);
        assert_eq!(
            outcome.finding.as_deref(),
            Some("✓ Excellent variety (all character types)")
        );
    }

    #[test]
    fn test_variety_three_classes() {
        let outcome = variety_bonus_section(&secret("Abc123"));
        assert_eq!(outcome.points, 1);
        assert_eq!(
            outcome.finding.as_deref(),
            Some("✓ Good variety (3 character types)")
        );
    }

    #[test]
    fn test_variety_two_classes_is_silent() {
        let outcome = variety_bonus_section(&secret("abc123"));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.finding, None);
    }

    #[test]
    fn test_variety_empty_password() {
        let outcome = variety_bonus_section(&secret(""));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.finding, None);
    }

    #[test]
    fn test_variety_ignores_non_ascii_classes() {
        // Only lowercase counts here, the umlauts belong to no class
        let outcome = variety_bonus_section(&secret("grüße"));
        assert_eq!(outcome.points, 0);
    }
}
