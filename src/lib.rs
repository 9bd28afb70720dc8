//! Password strength assessment library
//!
//! This library provides heuristic password strength assessment with
//! human-readable findings and remediation hints. It is advisory only:
//! nothing here stores, hashes, or transmits credentials.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_assess::assess_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = assess_password_strength(&password);
//!
//! println!("Score: {}/12", assessment.score.value());
//! println!("Strength: {}", assessment.strength());
//! for finding in &assessment.findings {
//!     println!("  {finding}");
//! }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

// Display layer
pub mod reporter;
pub mod tips;

// Public API
pub use evaluator::assess_password_strength;
pub use types::{Criterion, PasswordAssessment, PasswordScore, PasswordStrength};
