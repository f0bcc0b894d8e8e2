//! Core data types shared by the aligner and the classifier.
//!
//! - [`Slot`]: an exemplary position or nothing, one per compared character
//! - [`ClassifiedChar`], [`ClassificationKind`], [`Classification`]: the output annotation
//! - [`Configuration`]: letter-case policy and quantity thresholds
//!
//! ## Thresholds
//!
//! | Option | Measured against | Rejects when |
//! |--------|------------------|--------------|
//! | `required_minimum_matched_chars` | exemplary length | matched < threshold |
//! | `acceptable_maximum_wrong_chars` | compared length  | unmatched > threshold |
//!
//! A rejected pair is not an error: its output is the compared text fully extra.

pub mod config;
pub mod types;
