use std::collections::HashMap;

use crate::utils::text::fold_char;

/// Case-folded character -> ascending positions at which it occurs
#[derive(Debug, Clone, Default)]
pub struct CharPositionIndex {
    positions: HashMap<char, Vec<usize>>,
}

impl CharPositionIndex {
    /// Index a text, folding each character
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::from_chars(text.chars())
    }

    /// Index characters, folding each one. Positions are counted in characters.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, c) in chars.into_iter().enumerate() {
            positions.entry(fold_char(c)).or_default().push(i);
        }
        Self { positions }
    }

    /// Positions of `c` (folded), empty when it never occurs
    #[must_use]
    pub fn positions(&self, c: char) -> &[usize] {
        self.positions
            .get(&fold_char(c))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&fold_char(c))
    }

    /// Number of occurrences of `c` (folded)
    #[must_use]
    pub fn count(&self, c: char) -> usize {
        self.positions(c).len()
    }

    /// Distinct folded characters
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.positions.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_ascending() {
        let index = CharPositionIndex::new("hello");
        assert_eq!(index.positions('l'), &[2, 3]);
        assert_eq!(index.positions('h'), &[0]);
        assert_eq!(index.positions('o'), &[4]);
        assert!(index.positions('z').is_empty());
    }

    #[test]
    fn test_case_folding() {
        let index = CharPositionIndex::new("AbaB");
        assert_eq!(index.positions('a'), &[0, 2]);
        assert_eq!(index.positions('B'), &[1, 3]);
        assert!(index.contains('A'));
        assert_eq!(index.count('b'), 2);
    }

    #[test]
    fn test_positions_count_chars_not_bytes() {
        let index = CharPositionIndex::new("äbä");
        assert_eq!(index.positions('ä'), &[0, 2]);
        assert_eq!(index.positions('b'), &[1]);
    }

    #[test]
    fn test_empty() {
        let index = CharPositionIndex::new("");
        assert_eq!(index.chars().count(), 0);
    }
}
