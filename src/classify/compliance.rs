use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::alignment::basis::Basis;
use crate::core::config::Configuration;
use crate::utils::text::fold_char;

/// Why an input pair did not qualify for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The texts share no character
    NoCommonChars,
    /// Fewer matched characters than `required_minimum_matched_chars` allows
    TooFewMatched { matched: usize },
    /// More unmatched compared characters than `acceptable_maximum_wrong_chars` allows
    TooManyWrong { wrong: usize },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCommonChars => write!(f, "no common characters"),
            Self::TooFewMatched { matched } => write!(f, "only {matched} matched characters"),
            Self::TooManyWrong { wrong } => write!(f, "{wrong} wrong characters"),
        }
    }
}

/// Number of characters the texts share regardless of order:
/// the sum over folded characters of the smaller occurrence count.
#[must_use]
pub fn common_char_count(compared: &str, exemplary: &str) -> usize {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in exemplary.chars() {
        *counts.entry(fold_char(c)).or_default() += 1;
    }

    let mut common = 0usize;
    for c in compared.chars() {
        if let Some(remaining) = counts.get_mut(&fold_char(c)) {
            if *remaining > 0 {
                *remaining -= 1;
                common += 1;
            }
        }
    }
    common
}

/// Shared threshold check for a matched count
fn check_thresholds(
    matched: usize,
    compared_len: usize,
    exemplary_len: usize,
    config: &Configuration,
) -> Option<Rejection> {
    if matched == 0 {
        return Some(Rejection::NoCommonChars);
    }

    if let Some(required) = &config.required_minimum_matched_chars {
        if !required.is_reached_by(matched, exemplary_len) {
            return Some(Rejection::TooFewMatched { matched });
        }
    }

    let wrong = compared_len.saturating_sub(matched);
    if let Some(allowed) = &config.acceptable_maximum_wrong_chars {
        if allowed.is_exceeded_by(wrong, compared_len) {
            return Some(Rejection::TooManyWrong { wrong });
        }
    }

    None
}

/// Cheap, order-insensitive check using the common character count as an
/// upper bound on the number of matches. It never rejects a pair that
/// [`exact_rejection`] would accept.
#[must_use]
pub fn quick_rejection(compared: &str, exemplary: &str, config: &Configuration) -> Option<Rejection> {
    let common = common_char_count(compared, exemplary);
    check_thresholds(
        common,
        compared.chars().count(),
        exemplary.chars().count(),
        config,
    )
}

/// Authoritative check against the matched subsequence of a computed basis
#[must_use]
pub fn exact_rejection(basis: &Basis, config: &Configuration) -> Option<Rejection> {
    check_thresholds(
        basis.matched_len(),
        basis.sequence.len(),
        basis.exemplary_sequence.len(),
        config,
    )
}

#[must_use]
pub fn quick_compliance(compared: &str, exemplary: &str, config: &Configuration) -> bool {
    quick_rejection(compared, exemplary, config).is_none()
}

#[must_use]
pub fn exact_compliance(basis: &Basis, config: &Configuration) -> bool {
    exact_rejection(basis, config).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::basis::build_basis;
    use crate::core::config::Quantity;

    #[test]
    fn test_common_char_count() {
        assert_eq!(common_char_count("hola", "hello"), 3);
        assert_eq!(common_char_count("lll", "hello"), 2);
        assert_eq!(common_char_count("ABC", "cba"), 3);
        assert_eq!(common_char_count("xyz", "abc"), 0);
        assert_eq!(common_char_count("", "abc"), 0);
    }

    #[test]
    fn test_no_common_chars_is_rejected() {
        let config = Configuration::default();
        assert_eq!(
            quick_rejection("xyz", "abc", &config),
            Some(Rejection::NoCommonChars)
        );
        assert!(quick_compliance("xa", "abc", &config));
    }

    #[test]
    fn test_minimum_matched() {
        let config =
            Configuration::default().with_required_minimum_matched_chars(Quantity::percent(50.0));
        assert_eq!(
            quick_rejection("1abc", "1234", &config),
            Some(Rejection::TooFewMatched { matched: 1 })
        );
        assert!(quick_compliance("12ab", "1234", &config));

        let config = Configuration::default().with_required_minimum_matched_chars(Quantity::Count(3));
        assert!(!quick_compliance("12ab", "1234", &config));
    }

    #[test]
    fn test_maximum_wrong() {
        let config = Configuration::default().with_acceptable_maximum_wrong_chars(Quantity::Count(1));
        assert!(quick_compliance("12x4", "1234", &config));
        assert_eq!(
            quick_rejection("1xy4", "1234", &config),
            Some(Rejection::TooManyWrong { wrong: 2 })
        );
    }

    #[test]
    fn test_quick_passes_where_exact_rejects() {
        // Every character is shared, but only one can be matched in order
        let config = Configuration::default().with_required_minimum_matched_chars(Quantity::Count(2));
        assert!(quick_compliance("cba", "abc", &config));

        let basis = build_basis("cba", "abc");
        assert_eq!(basis.matched_len(), 1);
        assert_eq!(
            exact_rejection(&basis, &config),
            Some(Rejection::TooFewMatched { matched: 1 })
        );
        assert!(!exact_compliance(&basis, &config));
    }

    #[test]
    fn test_exact_rejects_too_many_wrong_after_quick_passes() {
        // Order-insensitive count leaves nothing wrong; the alignment leaves two
        let config = Configuration::default().with_acceptable_maximum_wrong_chars(Quantity::Count(1));
        assert_eq!(quick_rejection("cba", "abc", &config), None);

        let basis = build_basis("cba", "abc");
        assert_eq!(
            exact_rejection(&basis, &config),
            Some(Rejection::TooManyWrong { wrong: 2 })
        );
    }
}
