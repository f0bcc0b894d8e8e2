use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::candidates::CandidateGenerator;
use crate::alignment::index::CharPositionIndex;
use crate::alignment::selector::{select_alignment, Alignment};
use crate::core::types::Slot;
use crate::utils::text::fold;

/// The optimal alignment between a compared and an exemplary text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basis {
    /// `0..len(exemplary)`
    pub exemplary_sequence: Vec<usize>,

    /// One slot per compared character
    pub sequence: Vec<Slot>,

    /// Accepted matches: strictly increasing exemplary positions
    pub subsequence: Vec<usize>,

    /// Exemplary positions not covered by `subsequence`, ascending
    pub missing_elements: Vec<usize>,
}

impl Basis {
    fn assemble(exemplary_len: usize, sequence: Vec<Slot>, subsequence: Vec<usize>) -> Self {
        let exemplary_sequence: Vec<usize> = (0..exemplary_len).collect();

        let mut matched = subsequence.iter().peekable();
        let missing_elements = exemplary_sequence
            .iter()
            .copied()
            .filter(|&i| {
                if matched.peek() == Some(&&i) {
                    matched.next();
                    false
                } else {
                    true
                }
            })
            .collect();

        Self {
            exemplary_sequence,
            sequence,
            subsequence,
            missing_elements,
        }
    }

    /// Every compared character mapped to the same exemplary position
    fn identity(len: usize) -> Self {
        Self::assemble(len, (0..len).map(Slot::Index).collect(), (0..len).collect())
    }

    /// Number of matched characters
    #[must_use]
    pub fn matched_len(&self) -> usize {
        self.subsequence.len()
    }
}

/// Longest common prefix, then longest common suffix of what remains
fn common_affixes(compared: &[char], exemplary: &[char]) -> (usize, usize) {
    let prefix = compared
        .iter()
        .zip(exemplary)
        .take_while(|(a, b)| a == b)
        .count();

    let suffix = compared[prefix..]
        .iter()
        .rev()
        .zip(exemplary[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    (prefix, suffix)
}

/// Compute the alignment basis of two texts.
///
/// Both texts are case-folded. Common prefix and suffix characters are always
/// matched, so the candidate search only runs on the differing middle part.
#[must_use]
pub fn build_basis(compared: &str, exemplary: &str) -> Basis {
    let compared = fold(compared);
    let exemplary = fold(exemplary);

    if compared == exemplary {
        debug!(len = compared.len(), "Texts are identical");
        return Basis::identity(exemplary.len());
    }

    let (prefix, suffix) = common_affixes(&compared, &exemplary);
    let compared_middle = &compared[prefix..compared.len() - suffix];
    let exemplary_middle = &exemplary[prefix..exemplary.len() - suffix];

    debug!(
        prefix,
        suffix,
        compared_middle = compared_middle.len(),
        exemplary_middle = exemplary_middle.len(),
        "Trimmed common affixes"
    );

    let index = CharPositionIndex::from_chars(exemplary_middle.iter().copied());
    let middle: Alignment = select_alignment(CandidateGenerator::new(compared_middle, &index));

    let suffix_start = exemplary.len() - suffix;

    let sequence: Vec<Slot> = (0..prefix)
        .map(Slot::Index)
        .chain(middle.sequence.into_iter().map(|s| s.offset(prefix)))
        .chain((suffix_start..exemplary.len()).map(Slot::Index))
        .collect();

    let subsequence: Vec<usize> = (0..prefix)
        .chain(middle.subsequence.into_iter().map(|i| i + prefix))
        .chain(suffix_start..exemplary.len())
        .collect();

    Basis::assemble(exemplary.len(), sequence, subsequence)
}
