use crate::core::config::CaseNormalization;
use crate::core::types::ClassifiedChar;
use crate::utils::text::{lower_char, upper_char};

/// Rewrite the case of every output character in place.
///
/// Only values change; order, kinds, and count are preserved. `Capitalized`
/// uppercases the first character of each whitespace-separated word and
/// lowercases the rest.
pub fn normalize(chars: &mut [ClassifiedChar], target: CaseNormalization) {
    match target {
        CaseNormalization::Uppercase => {
            for c in chars.iter_mut() {
                c.value = upper_char(c.value);
            }
        }
        CaseNormalization::Lowercase => {
            for c in chars.iter_mut() {
                c.value = lower_char(c.value);
            }
        }
        CaseNormalization::Capitalized => {
            let mut word_start = true;
            for c in chars.iter_mut() {
                if c.value.is_whitespace() {
                    word_start = true;
                    continue;
                }
                c.value = if word_start {
                    upper_char(c.value)
                } else {
                    lower_char(c.value)
                };
                word_start = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ClassificationKind;

    fn values(chars: &[ClassifiedChar]) -> String {
        chars.iter().map(|c| c.value).collect()
    }

    fn correct(text: &str) -> Vec<ClassifiedChar> {
        text.chars().map(ClassifiedChar::correct).collect()
    }

    #[test]
    fn test_uppercase_and_lowercase() {
        let mut chars = correct("MiXed 1");
        normalize(&mut chars, CaseNormalization::Uppercase);
        assert_eq!(values(&chars), "MIXED 1");

        normalize(&mut chars, CaseNormalization::Lowercase);
        assert_eq!(values(&chars), "mixed 1");
    }

    #[test]
    fn test_capitalized() {
        let mut chars = correct("hELLO  wORLD");
        normalize(&mut chars, CaseNormalization::Capitalized);
        assert_eq!(values(&chars), "Hello  World");
    }

    #[test]
    fn test_kinds_and_length_are_preserved() {
        let mut chars = vec![
            ClassifiedChar::correct('s'),
            ClassifiedChar::missing('t'),
            ClassifiedChar::extra('ß'),
        ];
        normalize(&mut chars, CaseNormalization::Uppercase);
        assert_eq!(values(&chars), "STß");
        assert_eq!(chars[1].kind, ClassificationKind::Missing);
        assert_eq!(chars.len(), 3);
    }
}
