//! Core value types produced by password assessment.

use std::fmt;

/// Integer strength score in `[0, PasswordScore::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Nominal maximum, used as the meter denominator. The criteria
    /// arithmetic itself tops out at 10.
    pub const MAX: u8 = 12;

    pub(crate) fn new(value: u8) -> Self {
        debug_assert!(value <= Self::MAX);
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Qualitative strength level derived from the score.
///
/// Variants are ordered weakest to strongest, so levels compare the
/// way scores do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a score to its level. Thresholds are checked top-down,
    /// first match wins.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            s if s >= 10 => Self::VeryStrong,
            s if s >= 7 => Self::Strong,
            s if s >= 5 => Self::Moderate,
            s if s >= 3 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    /// Display glyph shown next to the level label. Cosmetic only.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::VeryStrong => "🟢",
            Self::Strong => "🔵",
            Self::Moderate => "🟡",
            Self::Weak => "🟠",
            Self::VeryWeak => "🔴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryStrong => "VERY STRONG",
            Self::Strong => "STRONG",
            Self::Moderate => "MODERATE",
            Self::Weak => "WEAK",
            Self::VeryWeak => "VERY WEAK",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scoring criterion that can fail and carry a remediation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    /// Remediation bullet shown when the overall score is low.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::Length => "Increase password length to at least 12 characters",
            Self::Uppercase => "Add uppercase letters (A-Z)",
            Self::Lowercase => "Add lowercase letters (a-z)",
            Self::Digit => "Add numbers (0-9)",
            Self::Special => "Add special characters (!@#$%^&*)",
        }
    }
}

/// Result of a single password assessment.
///
/// `findings` preserves the fixed section order: length, uppercase,
/// lowercase, digits, special characters, then the variety bonus when
/// it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    /// Password length in Unicode scalar values, so the display layer
    /// can mask the password without re-exposing it.
    pub length: usize,
    pub score: PasswordScore,
    pub findings: Vec<String>,
    /// Criteria eligible for remediation hints.
    pub failed: Vec<Criterion>,
}

impl PasswordAssessment {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}
