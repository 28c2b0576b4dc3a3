//! Corpus word representation
//!
//! A `WordEntry` stores the submitted word together with its derived anagram keys.

use super::keys::{AnagramKeys, derive_keys};
use crate::error::{EngineError, Result};
use serde::Serialize;
use std::fmt;

/// Longest word accepted into the corpus, in characters
pub const MAX_WORD_LENGTH: usize = 100;

/// One word of the corpus with its derived keys
///
/// Keys are computed once from `word` and never change; the only way to
/// "edit" an entry is to delete it and add the new word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    word: String,
    sorted_key: String,
    sorted_key_lowercase: String,
    is_proper_noun: bool,
    length: usize,
}

impl WordEntry {
    /// Create an entry, enforcing the default length bound
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the word is empty or longer than
    /// [`MAX_WORD_LENGTH`] characters.
    ///
    /// # Examples
    /// ```
    /// use anagram_index::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Silent").unwrap();
    /// assert_eq!(entry.word(), "Silent");
    /// assert_eq!(entry.sorted_key_lowercase(), "eilnst");
    ///
    /// assert!(WordEntry::new("").is_err());
    /// ```
    pub fn new(word: impl Into<String>) -> Result<Self> {
        Self::with_max_length(word, MAX_WORD_LENGTH)
    }

    /// Create an entry with a caller-chosen length bound
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the word is empty or longer than
    /// `max_length` characters.
    pub fn with_max_length(word: impl Into<String>, max_length: usize) -> Result<Self> {
        let word = word.into();
        validate_word(&word, max_length)?;
        let keys = derive_keys(&word);
        Ok(Self::from_derived(word, keys))
    }

    /// Build an entry from keys computed elsewhere (e.g. in a parallel batch)
    pub(crate) fn from_derived(word: String, keys: AnagramKeys) -> Self {
        Self {
            word,
            sorted_key: keys.sorted_key,
            sorted_key_lowercase: keys.sorted_key_lowercase,
            is_proper_noun: keys.is_proper_noun,
            length: keys.length,
        }
    }

    /// The word exactly as submitted
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Case-sensitive grouping key
    #[inline]
    #[must_use]
    pub fn sorted_key(&self) -> &str {
        &self.sorted_key
    }

    /// Case-insensitive grouping key
    #[inline]
    #[must_use]
    pub fn sorted_key_lowercase(&self) -> &str {
        &self.sorted_key_lowercase
    }

    /// Title-cased like a proper noun
    #[inline]
    #[must_use]
    pub const fn is_proper_noun(&self) -> bool {
        self.is_proper_noun
    }

    /// Character count of the word
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Check a submitted word against the corpus bounds
///
/// # Errors
/// Returns `EngineError::InvalidInput` for an empty word or one longer than
/// `max_length` characters.
pub fn validate_word(word: &str, max_length: usize) -> Result<()> {
    if word.is_empty() {
        return Err(EngineError::invalid("word must not be empty"));
    }

    let length = word.chars().count();
    if length > max_length {
        return Err(EngineError::invalid(format!(
            "word must be at most {max_length} characters, got {length}"
        )));
    }

    Ok(())
}
