//! Word lists for seeding a corpus
//!
//! A small sample list is compiled into the binary; larger lists are read
//! from text files at runtime.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_WORD_LENGTH, validate_word};
    use crate::corpus::CorpusStore;
    use crate::query::biggest_group;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_words_are_valid() {
        for &word in SAMPLE {
            assert!(validate_word(word, MAX_WORD_LENGTH).is_ok(), "{word:?}");
            assert_eq!(word, word.trim(), "'{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn sample_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = SAMPLE.iter().collect();
        assert_eq!(unique.len(), SAMPLE.len());
    }

    #[test]
    fn sample_biggest_group() {
        let mut store = CorpusStore::new();
        store.add_words(SAMPLE).unwrap();

        let group = biggest_group(&store);
        assert_eq!(group.count, 6);
        assert!(group.words.contains(&"stop".to_string()));
    }
}
