//! Per-character classification of a compared text.
//!
//! - [`compliance`]: quick (order-insensitive) and exact (alignment-based)
//!   threshold gates
//! - [`builder`]: turns a [`Basis`](crate::alignment::Basis) into correct,
//!   extra, and missing characters
//! - [`letter_case`]: case normalization of the final output
//!
//! Reading only the correct and missing characters of a qualifying result, in
//! order, gives back the exemplary text.

pub mod builder;
pub mod compliance;
pub mod letter_case;

pub use builder::classify;
pub use compliance::{
    common_char_count, exact_compliance, exact_rejection, quick_compliance, quick_rejection,
    Rejection,
};
