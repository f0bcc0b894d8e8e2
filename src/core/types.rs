use serde::{Deserialize, Serialize};

/// One slot of an alignment sequence: the exemplary position a compared
/// character was assigned to, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Index(usize),
    Absent,
}

impl Slot {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(i),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Shift an assigned position by `offset`; absent slots stay absent.
    #[must_use]
    pub fn offset(self, offset: usize) -> Self {
        match self {
            Self::Index(i) => Self::Index(i + offset),
            Self::Absent => Self::Absent,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Absent => write!(f, "-"),
        }
    }
}

/// How a single output character relates to the exemplary text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKind {
    /// Present in both texts at an aligned position
    Correct,
    /// Expected by the exemplary text but absent from the compared text
    Missing,
    /// Present in the compared text but not expected
    Extra,
    /// Reserved for a refinement stage; never produced by the aligner
    Swapped,
    /// Reserved for a refinement stage; never produced by the aligner
    Misspelled { expected: char },
}

impl ClassificationKind {
    /// Short marker used by the text renderer
    #[must_use]
    pub fn marker(self) -> char {
        match self {
            Self::Correct => '=',
            Self::Missing => '-',
            Self::Extra => '+',
            Self::Swapped => '~',
            Self::Misspelled { .. } => '!',
        }
    }
}

impl std::fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Missing => write!(f, "missing"),
            Self::Extra => write!(f, "extra"),
            Self::Swapped => write!(f, "swapped"),
            Self::Misspelled { expected } => write!(f, "misspelled({expected})"),
        }
    }
}

/// A character of the output annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedChar {
    pub value: char,

    pub kind: ClassificationKind,

    /// Whether the compared character had the same letter case as the
    /// exemplary one. Only set for correct characters compared as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_case_correct: Option<bool>,
}

impl ClassifiedChar {
    #[must_use]
    pub fn new(value: char, kind: ClassificationKind) -> Self {
        Self {
            value,
            kind,
            letter_case_correct: None,
        }
    }

    #[must_use]
    pub fn correct(value: char) -> Self {
        Self::new(value, ClassificationKind::Correct)
    }

    #[must_use]
    pub fn missing(value: char) -> Self {
        Self::new(value, ClassificationKind::Missing)
    }

    #[must_use]
    pub fn extra(value: char) -> Self {
        Self::new(value, ClassificationKind::Extra)
    }

    #[must_use]
    pub fn with_letter_case_correct(mut self, correct: bool) -> Self {
        self.letter_case_correct = Some(correct);
        self
    }

    /// True for characters that stand in for the exemplary text
    #[must_use]
    pub fn is_exemplary(&self) -> bool {
        matches!(
            self.kind,
            ClassificationKind::Correct | ClassificationKind::Missing
        )
    }

    /// True for characters that were typed in the compared text
    #[must_use]
    pub fn is_compared(&self) -> bool {
        !matches!(self.kind, ClassificationKind::Missing)
    }
}

/// The full per-character annotation of a compared text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub chars: Vec<ClassifiedChar>,
}

impl Classification {
    #[must_use]
    pub fn new(chars: Vec<ClassifiedChar>) -> Self {
        Self { chars }
    }

    /// Every character of `text` classified as extra
    #[must_use]
    pub fn all_extra(text: &str) -> Self {
        Self::new(text.chars().map(ClassifiedChar::extra).collect())
    }

    /// Every character of `text` classified as missing
    #[must_use]
    pub fn all_missing(text: &str) -> Self {
        Self::new(text.chars().map(ClassifiedChar::missing).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedChar> {
        self.chars.iter()
    }

    #[must_use]
    pub fn count(&self, kind: ClassificationKind) -> usize {
        self.chars.iter().filter(|c| c.kind == kind).count()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.count(ClassificationKind::Correct)
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.count(ClassificationKind::Missing)
    }

    #[must_use]
    pub fn extra_count(&self) -> usize {
        self.count(ClassificationKind::Extra)
    }

    /// Every character is correct (letter case aside)
    #[must_use]
    pub fn is_exact_match(&self) -> bool {
        self.chars
            .iter()
            .all(|c| c.kind == ClassificationKind::Correct)
    }

    /// Number of correct characters whose letter case differs from the exemplary text
    #[must_use]
    pub fn letter_case_mismatches(&self) -> usize {
        self.chars
            .iter()
            .filter(|c| c.letter_case_correct == Some(false))
            .count()
    }

    /// Concatenation of correct and missing characters
    #[must_use]
    pub fn reconstructed_exemplary(&self) -> String {
        self.chars
            .iter()
            .filter(|c| c.is_exemplary())
            .map(|c| c.value)
            .collect()
    }

    /// Concatenation of every character that came from the compared text
    #[must_use]
    pub fn compared_text(&self) -> String {
        self.chars
            .iter()
            .filter(|c| c.is_compared())
            .map(|c| c.value)
            .collect()
    }

    /// Marker line aligned under the characters, e.g. `h-o=` style annotations
    #[must_use]
    pub fn markers(&self) -> String {
        self.chars.iter().map(|c| c.kind.marker()).collect()
    }
}

impl From<Vec<ClassifiedChar>> for Classification {
    fn from(chars: Vec<ClassifiedChar>) -> Self {
        Self::new(chars)
    }
}

impl IntoIterator for Classification {
    type Item = ClassifiedChar;
    type IntoIter = std::vec::IntoIter<ClassifiedChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.into_iter()
    }
}

impl<'a> IntoIterator for &'a Classification {
    type Item = &'a ClassifiedChar;
    type IntoIter = std::slice::Iter<'a, ClassifiedChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_offset() {
        assert_eq!(Slot::Index(2).offset(3), Slot::Index(5));
        assert_eq!(Slot::Absent.offset(3), Slot::Absent);
        assert_eq!(Slot::Index(4).index(), Some(4));
        assert!(Slot::Absent.is_absent());
    }

    #[test]
    fn test_reconstruction_helpers() {
        let classification = Classification::new(vec![
            ClassifiedChar::correct('h'),
            ClassifiedChar::missing('e'),
            ClassifiedChar::extra('o'),
            ClassifiedChar::correct('l'),
        ]);

        assert_eq!(classification.reconstructed_exemplary(), "hel");
        assert_eq!(classification.compared_text(), "hol");
        assert_eq!(classification.markers(), "=-+=");
        assert_eq!(classification.correct_count(), 2);
        assert_eq!(classification.missing_count(), 1);
        assert_eq!(classification.extra_count(), 1);
        assert!(!classification.is_exact_match());
    }

    #[test]
    fn test_classified_char_serialization() {
        let c = ClassifiedChar::correct('A').with_letter_case_correct(false);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"value":"A","kind":"correct","letter_case_correct":false}"#
        );

        let extra = ClassifiedChar::extra('x');
        let json = serde_json::to_string(&extra).unwrap();
        assert!(!json.contains("letter_case_correct"));
    }
}
