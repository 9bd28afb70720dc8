//! Console rendering for assessment results.
//!
//! Pure string rendering: the menu loop prints whatever comes out of
//! [`render`], which keeps the layout testable without capturing
//! stdout.

use std::fmt::{self, Write};

use colored::{ColoredString, Colorize};

use crate::types::{PasswordAssessment, PasswordScore, PasswordStrength};

const RULE_WIDTH: usize = 70;
const METER_WIDTH: usize = 20;
const MASK: &str = "*";

/// Scores below this get remediation hints instead of praise.
const REMEDIATION_THRESHOLD: u8 = 7;

/// Masks a password for display, revealing only its length.
pub fn masked(length: usize) -> String {
    MASK.repeat(length)
}

/// Renders the fixed-width strength meter, e.g. `[███████████████░░░░░] 9/12`.
pub fn strength_meter(score: PasswordScore) -> String {
    let filled = score.value() as usize * METER_WIDTH / PasswordScore::MAX as usize;
    let bar = "█".repeat(filled) + &"░".repeat(METER_WIDTH - filled);
    format!("[{}] {}/{}", bar, score.value(), PasswordScore::MAX)
}

/// Renders the full results block for one assessment.
pub fn render(assessment: &PasswordAssessment) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, assessment);
    out
}

fn write_report(out: &mut impl Write, assessment: &PasswordAssessment) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let minor = "-".repeat(RULE_WIDTH);
    let strength = assessment.strength();

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "PASSWORD STRENGTH ASSESSMENT RESULTS")?;
    writeln!(out, "{rule}")?;

    writeln!(out)?;
    writeln!(
        out,
        "Password: {} (hidden for security)",
        masked(assessment.length)
    )?;
    writeln!(out, "Length: {} characters", assessment.length)?;

    writeln!(out)?;
    writeln!(
        out,
        "Strength Level: {} {}",
        strength.glyph(),
        colorize_level(strength)
    )?;
    writeln!(out, "Strength Score: {}", strength_meter(assessment.score))?;

    writeln!(out)?;
    writeln!(out, "Detailed Analysis:")?;
    writeln!(out, "{minor}")?;
    for finding in &assessment.findings {
        writeln!(out, "  {finding}")?;
    }

    writeln!(out)?;
    writeln!(out, "{minor}")?;
    if assessment.score.value() < REMEDIATION_THRESHOLD {
        writeln!(out, "RECOMMENDATIONS:")?;
        for criterion in &assessment.failed {
            writeln!(out, "  • {}", criterion.remediation())?;
        }
    } else {
        writeln!(
            out,
            "✓ Great password! Your password meets security standards."
        )?;
    }
    writeln!(out, "{rule}")?;

    Ok(())
}

fn colorize_level(strength: PasswordStrength) -> ColoredString {
    let label = strength.label();
    match strength {
        PasswordStrength::VeryStrong => label.green().bold(),
        PasswordStrength::Strong => label.blue().bold(),
        PasswordStrength::Moderate => label.yellow(),
        PasswordStrength::Weak => label.bright_red(),
        PasswordStrength::VeryWeak => label.red(),
    }
}
