use tracing::debug;

use crate::alignment::basis::{build_basis, Basis};
use crate::classify::compliance::{exact_rejection, quick_rejection};
use crate::classify::letter_case::normalize;
use crate::core::config::Configuration;
use crate::core::types::{Classification, ClassificationKind, ClassifiedChar, Slot};

/// Classify every character of `compared` against `exemplary`.
///
/// Degenerate and non-qualifying inputs have defined outputs instead of
/// errors: an empty exemplary text or a rejected pair yields the compared text
/// fully extra, and an empty compared text yields the exemplary text fully
/// missing.
///
/// ```
/// use typo_align::{classify, ClassificationKind, Configuration};
///
/// let result = classify("hola", "hello", &Configuration::default());
/// assert_eq!(result.reconstructed_exemplary(), "hello");
/// assert_eq!(result.markers(), "=-+=--+");
/// assert_eq!(result.chars[2].kind, ClassificationKind::Extra);
/// ```
#[must_use]
pub fn classify(compared: &str, exemplary: &str, config: &Configuration) -> Classification {
    let mut result = classify_chars(compared, exemplary, config);
    if let Some(target) = config.normalization() {
        normalize(&mut result.chars, target);
    }
    result
}

fn classify_chars(compared: &str, exemplary: &str, config: &Configuration) -> Classification {
    if exemplary.is_empty() {
        return Classification::all_extra(compared);
    }
    if compared.is_empty() {
        return Classification::all_missing(exemplary);
    }

    if let Some(rejection) = quick_rejection(compared, exemplary, config) {
        debug!(%rejection, "Rejected by quick compliance");
        return Classification::all_extra(compared);
    }

    let basis = build_basis(compared, exemplary);

    if let Some(rejection) = exact_rejection(&basis, config) {
        debug!(%rejection, "Rejected by exact compliance");
        return Classification::all_extra(compared);
    }

    debug!(
        matched = basis.matched_len(),
        missing = basis.missing_elements.len(),
        "Classifying aligned texts"
    );
    Classification::new(materialize(
        compared,
        exemplary,
        &basis,
        config.normalization().is_none(),
    ))
}

/// Turn a basis into the output sequence.
///
/// Compared characters start out extra and become correct where their slot
/// holds the next accepted position. Missing exemplary characters are then
/// placed right after the correct character preceding them in exemplary
/// order, or at the front when none does.
fn materialize(
    compared: &str,
    exemplary: &str,
    basis: &Basis,
    record_letter_case: bool,
) -> Vec<ClassifiedChar> {
    let exemplary: Vec<char> = exemplary.chars().collect();

    // Seed as extra, promote matches; keep the matched position alongside
    let mut accepted = basis.subsequence.iter().copied().peekable();
    let seeded: Vec<(ClassifiedChar, Option<usize>)> = compared
        .chars()
        .zip(&basis.sequence)
        .map(|(c, slot)| {
            let mut classified = ClassifiedChar::extra(c);
            match (*slot, accepted.peek()) {
                (Slot::Index(position), Some(&next)) if position == next => {
                    accepted.next();
                    classified.kind = ClassificationKind::Correct;
                    if record_letter_case {
                        classified = classified
                            .with_letter_case_correct(exemplary.get(position) == Some(&c));
                    }
                    (classified, Some(position))
                }
                _ => (classified, None),
            }
        })
        .collect();

    let mut missing = basis.missing_elements.iter().copied().peekable();
    let mut following = basis.subsequence.iter().copied();
    let mut output = Vec::with_capacity(seeded.len() + basis.missing_elements.len());

    let mut emit_missing_before = |bound: Option<usize>, output: &mut Vec<ClassifiedChar>| {
        while let Some(&m) = missing.peek() {
            if bound.is_some_and(|b| m >= b) {
                break;
            }
            missing.next();
            if let Some(&value) = exemplary.get(m) {
                output.push(ClassifiedChar::missing(value));
            }
        }
    };

    emit_missing_before(following.next(), &mut output);
    for (classified, matched_at) in seeded {
        output.push(classified);
        if matched_at.is_some() {
            emit_missing_before(following.next(), &mut output);
        }
    }

    output
}
