//! Mutual anagram check

use crate::core::sorted_key_lowercase;
use crate::error::{EngineError, Result};

/// Check whether every word is an anagram of every other, ignoring case
///
/// # Errors
/// Returns `InvalidInput` when fewer than two words are given.
///
/// # Examples
/// ```
/// use anagram_index::query::are_anagrams;
///
/// assert!(are_anagrams(&["Listen", "silent", "ENLIST"]).unwrap());
/// assert!(!are_anagrams(&["listen", "lister"]).unwrap());
/// assert!(are_anagrams(&["only"]).is_err());
/// ```
pub fn are_anagrams<S: AsRef<str>>(words: &[S]) -> Result<bool> {
    let [first, rest @ ..] = words else {
        return Err(EngineError::invalid("at least 2 words are required, got 0"));
    };
    if rest.is_empty() {
        return Err(EngineError::invalid("at least 2 words are required, got 1"));
    }

    let key = sorted_key_lowercase(first.as_ref());
    Ok(rest
        .iter()
        .all(|word| sorted_key_lowercase(word.as_ref()) == key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_lowercase_key_equality() {
        let pairs = [
            ("foo", "oof", true),
            ("Foo", "oOF", true),
            ("Zab", "baz", true),
            ("foo", "fo", false),
            ("foo", "bar", false),
            ("", "", true),
        ];

        for (a, b, expected) in pairs {
            assert_eq!(are_anagrams(&[a, b]).unwrap(), expected, "{a} vs {b}");
            assert_eq!(
                expected,
                sorted_key_lowercase(a) == sorted_key_lowercase(b)
            );
        }
    }

    #[test]
    fn one_mismatch_fails_the_set() {
        assert!(!are_anagrams(&["stop", "pots", "tops", "stoop"]).unwrap());
    }

    #[test]
    fn identical_words_are_anagrams() {
        assert!(are_anagrams(&["same", "same"]).unwrap());
    }

    #[test]
    fn too_few_words() {
        let empty: [&str; 0] = [];
        assert!(are_anagrams(&empty).unwrap_err().is_invalid_input());
        assert!(are_anagrams(&["only"]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn accepts_owned_strings() {
        let words = vec!["evil".to_string(), "VILE".to_string()];
        assert!(are_anagrams(words.as_slice()).unwrap());
    }
}
