//! Small text helpers shared across the crate.

pub mod text;
