use std::collections::HashMap;

use crate::alignment::index::CharPositionIndex;
use crate::core::types::Slot;

/// What a single compared character may be assigned to
#[derive(Debug, Clone)]
struct SlotChoices {
    /// Dense id of the folded character, `None` when it never occurs in the exemplary text
    class: Option<usize>,
    /// Exemplary positions holding the same folded character
    positions: Vec<usize>,
}

/// A partially built candidate. Each branch owns its own state, so sibling
/// branches never observe each other's choices.
#[derive(Debug, Clone)]
struct Branch {
    sequence: Vec<Slot>,
    /// Last exemplary position assigned to each character class on this branch
    last_used: Vec<Option<usize>>,
}

/// Enumerates every order-preserving assignment of compared characters to
/// exemplary positions.
///
/// Repeated occurrences of a character take strictly increasing positions, and
/// an occurrence is absent only once no larger position is left. Characters
/// that never occur in the exemplary text are always absent.
///
/// Candidates are produced lazily by an explicit depth-first search in
/// ascending position order.
/// The number of candidates grows combinatorially with repeated characters,
/// so callers must bound input length.
#[derive(Debug)]
pub struct CandidateGenerator {
    slots: Vec<SlotChoices>,
    stack: Vec<Branch>,
}

impl CandidateGenerator {
    /// `compared` is expected to be case-folded already; `exemplary` indexes
    /// the exemplary text.
    #[must_use]
    pub fn new(compared: &[char], exemplary: &CharPositionIndex) -> Self {
        let mut class_ids: HashMap<char, usize> = HashMap::new();
        let mut slots: Vec<SlotChoices> = Vec::with_capacity(compared.len());

        for &c in compared {
            let positions = exemplary.positions(c);
            let class = if positions.is_empty() {
                None
            } else {
                let next_id = class_ids.len();
                Some(*class_ids.entry(c).or_insert(next_id))
            };
            slots.push(SlotChoices {
                class,
                positions: positions.to_vec(),
            });
        }

        let root = Branch {
            sequence: Vec::with_capacity(compared.len()),
            last_used: vec![None; class_ids.len()],
        };

        Self {
            slots,
            stack: vec![root],
        }
    }

    fn expand(&mut self, branch: Branch) {
        let slot = &self.slots[branch.sequence.len()];

        let Some(class) = slot.class else {
            let mut child = branch;
            child.sequence.push(Slot::Absent);
            self.stack.push(child);
            return;
        };

        let start = match branch.last_used[class] {
            Some(floor) => slot.positions.partition_point(|&p| p <= floor),
            None => 0,
        };
        let open = &slot.positions[start..];

        if open.is_empty() {
            let mut child = branch;
            child.sequence.push(Slot::Absent);
            self.stack.push(child);
            return;
        }

        // Pushed in reverse so the smallest position is explored first
        for &position in open.iter().rev() {
            let mut child = branch.clone();
            child.sequence.push(Slot::Index(position));
            child.last_used[class] = Some(position);
            self.stack.push(child);
        }
    }
}

impl Iterator for CandidateGenerator {
    type Item = Vec<Slot>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(branch) = self.stack.pop() {
            if branch.sequence.len() == self.slots.len() {
                return Some(branch.sequence);
            }
            self.expand(branch);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::text::fold;

    use Slot::{Absent, Index};

    fn generate(compared: &str, exemplary: &str) -> Vec<Vec<Slot>> {
        let index = CharPositionIndex::new(exemplary);
        CandidateGenerator::new(&fold(compared), &index).collect()
    }

    #[test]
    fn test_empty_compared_yields_one_empty_candidate() {
        assert_eq!(generate("", "abc"), vec![Vec::<Slot>::new()]);
    }

    #[test]
    fn test_unknown_characters_are_always_absent() {
        assert_eq!(generate("xyz", "abc"), vec![vec![Absent, Absent, Absent]]);
    }

    #[test]
    fn test_single_occurrences_take_every_position() {
        // 'l' occurs twice in "ello", 'o' once, 'a' never
        let candidates = generate("ola", "ello");
        assert_eq!(
            candidates,
            vec![
                vec![Index(3), Index(1), Absent],
                vec![Index(3), Index(2), Absent],
            ]
        );
    }

    #[test]
    fn test_repeated_characters_take_increasing_positions() {
        let candidates = generate("aa", "aa");
        assert_eq!(
            candidates,
            vec![vec![Index(0), Index(1)], vec![Index(1), Absent]]
        );
        for candidate in &candidates {
            let assigned: Vec<usize> = candidate.iter().filter_map(|s| s.index()).collect();
            assert!(assigned.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_exhausted_positions_become_absent() {
        assert_eq!(generate("aaa", "a"), vec![vec![Index(0), Absent, Absent]]);
    }

    #[test]
    fn test_occurrence_is_never_skipped_while_positions_remain() {
        // The second 'a' has no position left after the first takes 1
        assert_eq!(
            generate("abax", "bay"),
            vec![vec![Index(1), Index(0), Absent, Absent]]
        );
    }

    #[test]
    fn test_alternating_repeats_stay_bounded() {
        // Each character contributes 2^(n-1) choices for n occurrences
        let compared = fold(&"ba".repeat(4));
        let index = CharPositionIndex::new(&"ab".repeat(4));
        assert_eq!(CandidateGenerator::new(&compared, &index).count(), 64);

        let compared = fold(&"ba".repeat(8));
        let index = CharPositionIndex::new(&"ab".repeat(8));
        assert_eq!(CandidateGenerator::new(&compared, &index).count(), 16_384);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let index = CharPositionIndex::new("ABC");
        let candidates: Vec<_> = CandidateGenerator::new(&fold("b"), &index).collect();
        assert_eq!(candidates, vec![vec![Index(1)]]);
    }
}
