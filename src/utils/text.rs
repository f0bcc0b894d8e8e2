//! Character helpers that never change the number of characters in a text.

/// Safely convert usize to f64 for threshold calculations
#[inline]
pub fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Keep a case mapping only when it maps one character to exactly one character.
fn single<I: Iterator<Item = char>>(mut mapped: I, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

/// Case-fold a single character.
///
/// Characters whose lowercase form spans several characters (e.g. `'İ'`) are
/// left as they are so positions stay aligned with the source text.
#[must_use]
pub fn fold_char(c: char) -> char {
    single(c.to_lowercase(), c)
}

#[must_use]
pub fn upper_char(c: char) -> char {
    single(c.to_uppercase(), c)
}

#[must_use]
pub fn lower_char(c: char) -> char {
    fold_char(c)
}

/// Case-fold a whole text into its characters
#[must_use]
pub fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_char() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('a'), 'a');
        assert_eq!(fold_char('Ö'), 'ö');
        assert_eq!(fold_char('1'), '1');
        // 'İ' lowercases to two characters
        assert_eq!(fold_char('İ'), 'İ');
    }

    #[test]
    fn test_upper_char_keeps_length() {
        assert_eq!(upper_char('a'), 'A');
        // 'ß' uppercases to "SS"
        assert_eq!(upper_char('ß'), 'ß');
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("HeLLo"), vec!['h', 'e', 'l', 'l', 'o']);
        assert!(fold("").is_empty());
    }
}
