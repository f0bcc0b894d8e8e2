//! # typo-align
//!
//! A library for classifying every character of a typed text against an
//! expected one.
//!
//! Given a *compared* text (what the user typed) and an *exemplary* text (what
//! was expected), `typo-align` decides for each character whether it is
//! correct, extra, or missing. It uses the best possible alignment rather than a
//! naive left-to-right diff, so reordered, partially typed, or differently cased
//! input is still annotated precisely.
//!
//! ## Features
//!
//! - **Optimal alignment**: maximizes matched characters over every
//!   order-preserving assignment, with a deterministic tie-break
//! - **Missing characters**: expected characters are inserted at their
//!   relative position, so correct + missing reads back the exemplary text
//! - **Letter case**: compare as-is (recording case mismatches) or normalize
//! - **Thresholds**: minimum matched / maximum wrong characters, as a count or
//!   a percentage
//!
//! ## Example
//!
//! ```rust
//! use typo_align::{classify, ClassificationKind, Configuration};
//!
//! let result = classify("cde", "abc", &Configuration::default());
//!
//! let kinds: Vec<ClassificationKind> = result.iter().map(|c| c.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         ClassificationKind::Missing,
//!         ClassificationKind::Missing,
//!         ClassificationKind::Correct,
//!         ClassificationKind::Extra,
//!         ClassificationKind::Extra,
//!     ]
//! );
//! assert_eq!(result.reconstructed_exemplary(), "abc");
//! ```
//!
//! ## Modules
//!
//! - [`alignment`]: position index, candidate search, LIS, selection, basis
//! - [`classify`]: compliance gates and the classification builder
//! - [`core`]: output types and configuration
//! - [`cli`]: command-line interface implementation

pub mod alignment;
pub mod classify;
pub mod cli;
pub mod core;
pub mod utils;

// Re-export commonly used types for convenience
pub use alignment::basis::{build_basis, Basis};
pub use alignment::lis::find_lis;
pub use classify::builder::classify;
pub use core::config::{CaseNormalization, ConfigError, Configuration, LetterCasePolicy, Quantity};
pub use core::types::*;
