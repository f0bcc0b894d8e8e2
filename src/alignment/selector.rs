use crate::alignment::lis::find_lis;
use crate::core::types::Slot;

/// A candidate assignment together with its accepted matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub sequence: Vec<Slot>,
    /// Strictly increasing exemplary positions taken from `sequence`
    pub subsequence: Vec<usize>,
}

impl Alignment {
    /// Pair a candidate with its longest increasing run of assigned positions
    #[must_use]
    pub fn from_candidate(sequence: Vec<Slot>) -> Self {
        let assigned: Vec<usize> = sequence.iter().filter_map(|s| s.index()).collect();
        let subsequence = find_lis(&assigned);
        Self {
            sequence,
            subsequence,
        }
    }

    fn weight(&self) -> usize {
        self.subsequence.iter().sum()
    }
}

/// Keeps the best alignment seen so far.
///
/// Longer subsequences always win. Among equally long ones the smallest sum of
/// matched positions wins, and on equal sums the first one offered stays.
#[derive(Debug, Default)]
pub struct AlignmentSelector {
    best: Option<(Alignment, usize)>,
    offered: usize,
}

impl AlignmentSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, alignment: Alignment) {
        self.offered += 1;
        let weight = alignment.weight();

        let replace = match &self.best {
            None => true,
            Some((best, best_weight)) => {
                alignment.subsequence.len() > best.subsequence.len()
                    || (alignment.subsequence.len() == best.subsequence.len()
                        && weight < *best_weight)
            }
        };

        if replace {
            self.best = Some((alignment, weight));
        }
    }

    /// Number of candidates offered so far
    #[must_use]
    pub fn offered(&self) -> usize {
        self.offered
    }

    /// The selected alignment, `None` when nothing was offered
    #[must_use]
    pub fn finish(self) -> Option<Alignment> {
        self.best.map(|(alignment, _)| alignment)
    }
}

/// Run the LIS over every candidate and keep the best alignment
pub fn select_alignment(candidates: impl IntoIterator<Item = Vec<Slot>>) -> Alignment {
    let mut selector = AlignmentSelector::new();
    for candidate in candidates {
        selector.offer(Alignment::from_candidate(candidate));
    }
    tracing::trace!(candidates = selector.offered(), "Selected alignment");
    selector.finish().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use Slot::{Absent, Index};

    #[test]
    fn test_from_candidate_skips_absent() {
        let alignment = Alignment::from_candidate(vec![Index(3), Absent, Index(1), Index(2)]);
        assert_eq!(alignment.subsequence, vec![1, 2]);
    }

    #[test]
    fn test_longer_subsequence_wins() {
        let selected = select_alignment(vec![
            vec![Index(2), Index(0)],
            vec![Index(0), Index(2)],
        ]);
        assert_eq!(selected.sequence, vec![Index(0), Index(2)]);
        assert_eq!(selected.subsequence, vec![0, 2]);
    }

    #[test]
    fn test_smaller_sum_wins_on_equal_length() {
        let selected = select_alignment(vec![
            vec![Index(3), Index(2), Absent],
            vec![Index(3), Index(1), Absent],
        ]);
        assert_eq!(selected.subsequence, vec![1]);
        assert_eq!(selected.sequence, vec![Index(3), Index(1), Absent]);
    }

    #[test]
    fn test_first_seen_wins_on_equal_sum() {
        let selected = select_alignment(vec![
            vec![Index(0), Absent],
            vec![Absent, Index(0)],
        ]);
        assert_eq!(selected.sequence, vec![Index(0), Absent]);
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(select_alignment(Vec::new()), Alignment::default());
    }
}
