//! Anagram key derivation
//!
//! Two words are anagrams when their letters, sorted by code point, are equal.
//! The lowercase variant folds case first so `Zab` and `abz` share a group.

/// All values derived from a single word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnagramKeys {
    /// Letters sorted by code point, case preserved
    pub sorted_key: String,
    /// Letters of the lowercased word sorted by code point
    pub sorted_key_lowercase: String,
    /// Title-cased like a proper noun ("Food", "F")
    pub is_proper_noun: bool,
    /// Character count of the original word
    pub length: usize,
}

/// Derive every grouping value for `word`
///
/// Total for any input; the empty string yields empty keys and length 0.
///
/// # Examples
/// ```
/// use anagram_index::core::derive_keys;
///
/// let keys = derive_keys("Zab");
/// assert_eq!(keys.sorted_key, "Zab");
/// assert_eq!(keys.sorted_key_lowercase, "abz");
/// assert!(keys.is_proper_noun);
/// assert_eq!(keys.length, 3);
/// ```
#[must_use]
pub fn derive_keys(word: &str) -> AnagramKeys {
    AnagramKeys {
        sorted_key: sorted_key(word),
        sorted_key_lowercase: sorted_key_lowercase(word),
        is_proper_noun: is_proper_noun(word),
        length: word.chars().count(),
    }
}

/// Case-sensitive grouping key
#[must_use]
pub fn sorted_key(word: &str) -> String {
    sort_chars(word.chars())
}

/// Case-insensitive grouping key
#[must_use]
pub fn sorted_key_lowercase(word: &str) -> String {
    sort_chars(word.to_lowercase().chars())
}

fn sort_chars(chars: impl Iterator<Item = char>) -> String {
    let mut letters: Vec<char> = chars.collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Check whether `word` is capitalised like a proper noun
///
/// Uppercase letters may only start a cased run and lowercase letters may only
/// continue one. At least one cased letter is required, so "" and "42" are not
/// proper nouns while "O'Neil" is.
#[must_use]
pub fn is_proper_noun(word: &str) -> bool {
    let mut seen_cased = false;
    let mut previous_cased = false;

    for ch in word.chars() {
        if ch.is_uppercase() || is_titlecase(ch) {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// Titlecase digraphs such as 'ǅ' are neither upper nor lower but still change
/// when lowercased
fn is_titlecase(ch: char) -> bool {
    !ch.is_uppercase() && !ch.is_lowercase() && !ch.to_lowercase().eq(std::iter::once(ch))
}
