//! Character alignment between a compared and an exemplary text.
//!
//! The pipeline, leaves first:
//!
//! - [`CharPositionIndex`]: case-folded character -> ascending positions
//! - [`CandidateGenerator`]: every order-preserving assignment of compared
//!   characters to exemplary positions
//! - [`find_lis`]: longest strictly increasing subsequence of a candidate
//! - [`AlignmentSelector`]: keeps the longest match, then the smallest sum of
//!   matched positions, then the first seen
//! - [`build_basis`]: trims common prefix/suffix and assembles a full [`Basis`]
//!
//! ## Example
//!
//! ```rust
//! use typo_align::alignment::build_basis;
//! use typo_align::Slot;
//!
//! let basis = build_basis("hola", "hello");
//! assert_eq!(basis.subsequence, vec![0, 2]);
//! assert_eq!(basis.missing_elements, vec![1, 3, 4]);
//! assert_eq!(basis.sequence[3], Slot::Absent);
//! ```

pub mod basis;
pub mod candidates;
pub mod index;
pub mod lis;
pub mod selector;

pub use basis::{build_basis, Basis};
pub use candidates::CandidateGenerator;
pub use index::CharPositionIndex;
pub use lis::find_lis;
pub use selector::{select_alignment, Alignment, AlignmentSelector};
