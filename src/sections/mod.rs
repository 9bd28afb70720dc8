//! Password scoring sections
//!
//! Each section scores a specific criterion of password strength.

mod classes;
mod length;
mod variety;

pub use classes::{digit_section, lowercase_section, special_section, uppercase_section};
pub use length::length_section;
pub use variety::variety_bonus_section;

use crate::types::Criterion;

/// Outcome of one scoring section.
/// - `points` - points awarded toward the total score
/// - `finding` - analysis line, when the section emits one
/// - `failed` - criterion to surface as a remediation hint, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: u8,
    pub finding: Option<String>,
    pub failed: Option<Criterion>,
}
